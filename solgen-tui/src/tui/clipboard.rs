use solgen::clipboard::ClipboardWriter;
use solgen::{AppError, AppResult};

/// System clipboard via arboard.
///
/// The handle is opened per write; on headless systems opening fails and
/// the failure is reported like any other write error.
pub struct SystemClipboard;

impl ClipboardWriter for SystemClipboard {
    fn write_text(&mut self, text: &str) -> AppResult<()> {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| AppError::clipboard(format!("clipboard unavailable: {}", e)))?;
        clipboard
            .set_text(text.to_owned())
            .map_err(|e| AppError::clipboard(e.to_string()))
    }
}
