use ratatui::style::{Color, Style};
use solgen::session::ThemeMode;

/// Color palette for one theme mode
pub struct Palette {
    pub primary: Color,
    pub background: Color,
    pub surface: Color,
    pub card: Color,
    pub field: Color,
    pub text_primary: Color,
    pub text_dim: Color,
    pub success: Color,
    pub error: Color,
    pub danger: Color,
    pub accent: Color,
}

impl Palette {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    fn dark() -> Self {
        Self {
            primary: Color::Rgb(5, 150, 105),        // #059669 - emerald
            background: Color::Black,
            surface: Color::Rgb(17, 24, 39),         // #111827
            card: Color::Rgb(31, 41, 55),            // #1F2937
            field: Color::Rgb(55, 65, 81),           // #374151
            text_primary: Color::Rgb(229, 231, 235), // #E5E7EB
            text_dim: Color::Rgb(156, 163, 175),     // #9CA3AF
            success: Color::Green,
            error: Color::Red,
            danger: Color::Rgb(239, 68, 68),         // #EF4444
            accent: Color::Rgb(250, 204, 21),        // #FACC15 - sun icon
        }
    }

    fn light() -> Self {
        Self {
            primary: Color::Rgb(5, 150, 105),
            background: Color::Rgb(31, 41, 55),
            surface: Color::White,
            card: Color::Rgb(229, 231, 235),
            field: Color::Rgb(55, 65, 81),
            text_primary: Color::Rgb(17, 24, 39),
            text_dim: Color::Rgb(75, 85, 99),
            success: Color::Rgb(21, 128, 61),
            error: Color::Rgb(185, 28, 28),
            danger: Color::Rgb(220, 38, 38),
            accent: Color::White,
        }
    }

    /// Get the primary style for titles and active elements
    pub fn primary_style(&self) -> Style {
        Style::default().fg(self.primary)
    }

    /// Get the surface style for the main panel
    pub fn surface_style(&self) -> Style {
        Style::default().bg(self.surface).fg(self.text_primary)
    }

    pub fn card_style(&self) -> Style {
        Style::default().bg(self.card).fg(self.text_primary)
    }

    /// Monospace-looking value boxes keep light text in both modes
    pub fn field_style(&self) -> Style {
        Style::default().bg(self.field).fg(Color::Rgb(229, 231, 235))
    }

    pub fn text_primary_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn text_dim_style(&self) -> Style {
        Style::default().fg(self.text_dim)
    }
}
