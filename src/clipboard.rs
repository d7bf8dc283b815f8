use crate::error::AppResult;
use crate::feedback::Feedback;
use tracing::warn;

pub const COPY_SUCCESS_MESSAGE: &str = "Copied to clipboard!";

/// Write-text capability provided by the environment
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> AppResult<()>;
}

/// Copy `text` and acknowledge the outcome on the feedback channel.
///
/// A failed write never propagates; it becomes a failure notice.
pub fn copy_with_feedback(
    clipboard: &mut dyn ClipboardWriter,
    feedback: &mut Feedback,
    text: &str,
) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            feedback.success(COPY_SUCCESS_MESSAGE);
            true
        }
        Err(e) => {
            warn!("Clipboard write failed: {}", e);
            feedback.failure(format!("Copy failed: {}", e));
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::feedback::NoticeKind;
    use std::time::Duration;

    struct Recording(Vec<String>);

    impl ClipboardWriter for Recording {
        fn write_text(&mut self, text: &str) -> AppResult<()> {
            self.0.push(text.to_string());
            Ok(())
        }
    }

    struct Unavailable;

    impl ClipboardWriter for Unavailable {
        fn write_text(&mut self, _text: &str) -> AppResult<()> {
            Err(AppError::clipboard("no display"))
        }
    }

    #[test]
    fn test_successful_copy_acknowledged() {
        let mut clipboard = Recording(Vec::new());
        let mut feedback = Feedback::new(Duration::from_secs(2));

        assert!(copy_with_feedback(&mut clipboard, &mut feedback, "Pub1"));
        assert_eq!(clipboard.0, vec!["Pub1"]);
        let notice = feedback.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, COPY_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_failed_copy_reports_failure() {
        let mut feedback = Feedback::new(Duration::from_secs(2));

        assert!(!copy_with_feedback(&mut Unavailable, &mut feedback, "Pub1"));
        let notice = feedback.current().unwrap();
        assert_eq!(notice.kind, NoticeKind::Failure);
        assert!(notice.message.contains("no display"));
    }
}
