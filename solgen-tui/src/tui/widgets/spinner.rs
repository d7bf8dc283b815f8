use crate::tui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::*;

const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Busy indicator shown while a generation request is outstanding
pub struct Spinner {
    pub message: String,
    pub frame: usize,
    pub spinning: bool,
}

impl Spinner {
    pub fn new(message: String) -> Self {
        Self {
            message,
            frame: 0,
            spinning: false,
        }
    }

    pub fn start(&mut self) {
        self.spinning = true;
    }

    pub fn stop(&mut self) {
        self.spinning = false;
        self.frame = 0;
    }

    pub fn tick(&mut self) {
        if self.spinning {
            self.frame = (self.frame + 1) % FRAMES.len();
        }
    }

    pub fn glyph(&self) -> &'static str {
        FRAMES[self.frame % FRAMES.len()]
    }

    /// Label for the generate control: idle text or spinner + busy text.
    pub fn label(&self, idle: &str) -> String {
        if self.spinning {
            format!("{} {}", self.glyph(), self.message)
        } else {
            idle.to_string()
        }
    }

    pub fn render(&self, frame: &mut Frame, palette: &Palette, area: Rect, idle: &str) {
        let style = if self.spinning {
            // disabled look while busy
            palette.text_dim_style()
        } else {
            Style::default().fg(Color::White).bg(palette.primary).bold()
        };

        let widget = Paragraph::new(self.label(idle))
            .style(style)
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(palette.primary_style()),
            );

        frame.render_widget(widget, area);
    }
}
