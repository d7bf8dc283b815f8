use ratatui::prelude::*;
use ratatui::widgets::*;

use crate::tui::app::{App, GENERATE_LABEL};
use crate::tui::screens;
use crate::tui::theme::Palette;
use crate::tui::widgets::Toast;

/// Render the current application state
pub fn render(frame: &mut Frame, app: &App) {
    let palette = Palette::for_mode(app.session.theme());
    let area = frame.area();

    frame.render_widget(
        Block::default().style(Style::default().bg(palette.background)),
        area,
    );

    // Main layout: header, tagline, generate control, wallet list, footer
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(1), // Tagline
            Constraint::Length(3), // Generate control
            Constraint::Min(1),    // Wallet list
            Constraint::Length(3), // Footer
        ])
        .split(area);

    render_header(frame, &palette, app, main_layout[0]);
    render_tagline(frame, &palette, main_layout[1]);
    render_generate(frame, &palette, app, main_layout[2]);
    screens::render_wallets(frame, &palette, app, main_layout[3]);
    render_footer(frame, &palette, main_layout[4]);

    // Toast overlay
    if let Some(notice) = app.session.feedback().current() {
        Toast::new(notice).render(frame, &palette, area);
    }
}

fn render_header(frame: &mut Frame, palette: &Palette, app: &App, area: Rect) {
    let theme_icon = if app.session.theme().is_dark() {
        Span::styled("☀ light", Style::default().fg(palette.accent))
    } else {
        Span::styled("☾ dark", Style::default().fg(palette.accent))
    };

    let title_line = Line::from(vec![
        Span::styled("Solana Wallet Generator", palette.text_primary_style().bold()),
        Span::styled("  │  t: ", palette.text_dim_style()),
        theme_icon,
    ]);

    let header = Paragraph::new(title_line)
        .alignment(Alignment::Center)
        .style(palette.surface_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.primary_style()),
        );

    frame.render_widget(header, area);
}

fn render_tagline(frame: &mut Frame, palette: &Palette, area: Rect) {
    let tagline = Paragraph::new("Generate secure Solana wallets instantly.")
        .alignment(Alignment::Center)
        .style(palette.text_dim_style());
    frame.render_widget(tagline, area);
}

fn render_generate(frame: &mut Frame, palette: &Palette, app: &App, area: Rect) {
    let button_area = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(30),
            Constraint::Percentage(35),
        ])
        .split(area)[1];

    app.spinner.render(frame, palette, button_area, GENERATE_LABEL);
}

fn render_footer(frame: &mut Frame, palette: &Palette, area: Rect) {
    let help_text =
        "g: Generate | j/k: Select | v: Reveal | c: Field | y: Copy | d: Delete | t: Theme | q: Quit";

    let footer = Paragraph::new(Span::styled(help_text, palette.text_dim_style()))
        .alignment(Alignment::Center)
        .style(palette.surface_style())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.primary_style()),
        );

    frame.render_widget(footer, area);
}
