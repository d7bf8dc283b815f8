use ratatui::prelude::*;
use crate::tui::app::App;
use crate::tui::theme::Palette;

mod wallets;

pub fn render_wallets(frame: &mut Frame, palette: &Palette, app: &App, area: Rect) {
    wallets::render(frame, palette, app, area);
}
