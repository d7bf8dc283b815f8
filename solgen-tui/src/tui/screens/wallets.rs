use crate::tui::app::App;
use crate::tui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::*;
use solgen::session::RecordField;

/// Rows of a card besides the seed phrase: borders, labels, gaps, key values
const CARD_CHROME: u16 = 9;

pub fn render(frame: &mut Frame, palette: &Palette, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            format!(" Wallets ({}) ", app.session.len()),
            palette.primary_style(),
        ))
        .borders(Borders::ALL)
        .border_style(palette.primary_style())
        .style(palette.surface_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.session.is_empty() {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled("No wallets yet", palette.text_primary_style().bold())),
            Line::from(Span::styled("Press g to generate one", palette.text_dim_style())),
        ])
        .alignment(Alignment::Center);
        frame.render_widget(hint, inner);
        return;
    }

    // card borders take one column on each side
    let text_width = inner.width.saturating_sub(2);
    let heights: Vec<u16> = app
        .session
        .list()
        .iter()
        .map(|entry| CARD_CHROME + wrapped_rows(entry.record.seed_phrase(), text_width))
        .collect();

    // keep the selected card on screen
    let selected = app.selected.min(heights.len() - 1);
    let mut first = selected;
    let mut used = heights[first];
    while first > 0 && used + heights[first - 1] <= inner.height {
        first -= 1;
        used += heights[first];
    }

    let mut y = inner.y;
    let bottom = inner.y + inner.height;
    for (position, height) in heights.iter().enumerate().skip(first) {
        if y >= bottom {
            break;
        }
        let card = Rect::new(inner.x, y, inner.width, (*height).min(bottom - y));
        render_card(frame, palette, app, position, card);
        y += card.height;
    }
}

/// Rows `text` occupies when word-wrapped to `width` columns.
fn wrapped_rows(text: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows = 0usize;
    let mut used = 0usize;
    for word in text.split_whitespace() {
        let len = word.chars().count();
        if used > 0 && used + 1 + len <= width {
            used += 1 + len;
            continue;
        }
        // a word wider than the line is broken across rows
        let span = len.div_ceil(width).max(1);
        rows += span;
        used = len - (span - 1) * width;
    }
    u16::try_from(rows.max(1)).unwrap_or(u16::MAX)
}

fn render_card(frame: &mut Frame, palette: &Palette, app: &App, position: usize, area: Rect) {
    let Some(entry) = app.session.list().get(position) else {
        return;
    };
    let is_selected = position == app.selected;
    let number = app.session.label_number(position).unwrap_or_default();

    let border_style = if is_selected {
        palette.primary_style().bold()
    } else {
        palette.text_dim_style()
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" Wallet #{} ", number),
            palette.text_primary_style().bold(),
        ))
        .title(
            Line::from(Span::styled(" d: delete ", Style::default().fg(palette.danger)))
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(border_style)
        .style(palette.card_style());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let seed_rows = wrapped_rows(entry.record.seed_phrase(), inner.width);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),         // Seed label
            Constraint::Length(seed_rows), // Seed value (wraps)
            Constraint::Length(1),
            Constraint::Length(1), // Secret label
            Constraint::Length(1), // Secret value
            Constraint::Length(1),
            Constraint::Length(1), // Public label
            Constraint::Length(1), // Public value
            Constraint::Min(0),
        ])
        .split(inner);

    let revealed = app.session.is_revealed(position);
    let secret = app.session.secret_display(position).unwrap_or_default();
    let eye = if revealed { "v: hide" } else { "v: show" };

    let label = |field: RecordField, extra: Option<&str>| -> Paragraph<'static> {
        let mut spans = vec![Span::styled(field.label(), palette.text_dim_style().bold())];
        if let Some(extra) = extra {
            spans.push(Span::styled(format!("  [{}]", extra), palette.text_dim_style()));
        }
        if is_selected && app.selected_field == field {
            spans.push(Span::styled("  ◂ y: copy", palette.primary_style()));
        }
        Paragraph::new(Line::from(spans))
    };

    frame.render_widget(label(RecordField::SeedPhrase, None), rows[0]);
    frame.render_widget(
        Paragraph::new(entry.record.seed_phrase())
            .style(palette.field_style())
            .wrap(Wrap { trim: true }),
        rows[1],
    );

    frame.render_widget(label(RecordField::SecretKey, Some(eye)), rows[3]);
    frame.render_widget(Paragraph::new(secret).style(palette.field_style()), rows[4]);

    frame.render_widget(label(RecordField::PublicKey, None), rows[6]);
    frame.render_widget(
        Paragraph::new(entry.record.public_key()).style(palette.field_style()),
        rows[7],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::ui;
    use async_trait::async_trait;
    use ratatui::backend::TestBackend;
    use solgen::clipboard::ClipboardWriter;
    use solgen::{AppError, AppResult, WalletRecord, WalletSource};
    use std::sync::Arc;
    use std::time::Duration;

    struct Offline;

    #[async_trait]
    impl WalletSource for Offline {
        async fn fetch_wallet(&self) -> AppResult<WalletRecord> {
            Err(AppError::internal("offline"))
        }
    }

    impl ClipboardWriter for Offline {
        fn write_text(&mut self, _text: &str) -> AppResult<()> {
            Ok(())
        }
    }

    fn app_with(records: &[(&str, &str, &str)]) -> App {
        let mut app = App::new(Duration::from_secs(2), Arc::new(Offline), Box::new(Offline));
        for (seed, public, secret) in records {
            app.session.begin_generation();
            app.session
                .finish_generation(Ok(WalletRecord::new(*seed, *public, *secret).unwrap()));
        }
        app
    }

    fn screen(app: &App) -> String {
        screen_sized(app, 100, 40)
    }

    fn screen_sized(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui::render(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn empty_session_shows_hint() {
        let text = screen(&app_with(&[]));
        assert!(text.contains("No wallets yet"));
        assert!(text.contains("Generate Wallet"));
    }

    #[test]
    fn cards_are_numbered_from_oldest() {
        let app = app_with(&[("abc def", "PubOld", "SecOld"), ("ghi jkl", "PubNew", "SecNew")]);
        let text = screen(&app);
        let newest = text.find("Wallet #2").unwrap();
        let oldest = text.find("Wallet #1").unwrap();
        assert!(newest < oldest);
    }

    #[test]
    fn secret_masked_until_revealed() {
        let mut app = app_with(&[("abc def", "Pub1", "Sec1")]);
        let text = screen(&app);
        assert!(text.contains("Pub1"));
        assert!(text.contains("abc def"));
        assert!(!text.contains("Sec1"));

        app.session.toggle_reveal(0);
        assert!(screen(&app).contains("Sec1"));
    }

    #[test]
    fn generating_state_replaces_button_label() {
        let mut app = app_with(&[]);
        app.session.begin_generation();
        app.spinner.start();
        let text = screen(&app);
        assert!(text.contains("Generating..."));
        assert!(!text.contains("Generate Wallet"));
    }

    #[test]
    fn long_mnemonic_is_shown_in_full_on_narrow_terminal() {
        let mut words = vec!["abandon"; 23];
        words.push("zebra");
        let seed = words.join(" ");
        let app = app_with(&[(seed.as_str(), "Pub1", "Sec1")]);

        let text = screen_sized(&app, 80, 40);
        assert!(text.contains("zebra"));
        assert!(text.contains("Pub1"));
    }

    #[test]
    fn selected_card_stays_visible_with_tall_cards() {
        let seed = vec!["abandon"; 24].join(" ");
        let mut app = app_with(&[
            (seed.as_str(), "PubA", "SecA"),
            (seed.as_str(), "PubB", "SecB"),
            (seed.as_str(), "PubC", "SecC"),
            (seed.as_str(), "PubD", "SecD"),
        ]);
        app.selected = 3;

        let text = screen_sized(&app, 80, 30);
        assert!(text.contains("PubA"));
    }

    #[test]
    fn wrapped_rows_counts_greedy_lines() {
        assert_eq!(wrapped_rows("", 10), 1);
        assert_eq!(wrapped_rows("abc def", 10), 1);
        assert_eq!(wrapped_rows("abc def ghi", 10), 2);
        assert_eq!(wrapped_rows("abcdefghijkl", 5), 3);
        assert_eq!(wrapped_rows(&vec!["abandon"; 24].join(" "), 76), 3);
    }
}
