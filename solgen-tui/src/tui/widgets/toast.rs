use crate::tui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::*;
use solgen::feedback::{Notice, NoticeKind};

/// Transient acknowledgment drawn in the top-right corner
pub struct Toast<'a> {
    notice: &'a Notice,
}

impl<'a> Toast<'a> {
    pub fn new(notice: &'a Notice) -> Self {
        Self { notice }
    }

    fn icon(&self) -> &'static str {
        match self.notice.kind {
            NoticeKind::Success => "✔",
            NoticeKind::Failure => "✖",
        }
    }

    /// Area for the toast inside `area`, sized to the message.
    pub fn area(&self, area: Rect) -> Rect {
        let width = (self.notice.message.chars().count() as u16 + 6).min(area.width);
        let height = 3.min(area.height);
        Rect {
            x: area.x + area.width.saturating_sub(width + 1),
            y: area.y + 1.min(area.height.saturating_sub(height)),
            width,
            height,
        }
    }

    pub fn render(&self, frame: &mut Frame, palette: &Palette, area: Rect) {
        let color = match self.notice.kind {
            NoticeKind::Success => palette.success,
            NoticeKind::Failure => palette.error,
        };
        let toast_area = self.area(area);

        frame.render_widget(Clear, toast_area);
        let widget = Paragraph::new(Line::from(vec![
            Span::styled(self.icon(), Style::default().fg(color).bold()),
            Span::styled(format!(" {}", self.notice.message), palette.text_primary_style()),
        ]))
        .style(palette.surface_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        );

        frame.render_widget(widget, toast_area);
    }
}
