use super::record::{RecordField, WalletRecord};
use super::reveal::RevealState;
use super::store::{RecordId, SessionStore, WalletEntry};
use super::theme::ThemeMode;
use crate::clipboard::{copy_with_feedback, ClipboardWriter};
use crate::error::AppResult;
use crate::feedback::Feedback;
use crate::generator::WalletSource;
use std::time::{Duration, Instant};
use tracing::{debug, error, info};

pub const GENERATION_FAILED_MESSAGE: &str = "Wallet generation failed";

/// All state owned by one active view: records, reveal flags, theme,
/// in-flight generation count, and the toast channel.
///
/// Dropping the controller ends the session and zeroizes every record.
#[derive(Debug)]
pub struct SessionController {
    store: SessionStore,
    reveal: RevealState,
    theme: ThemeMode,
    in_flight: usize,
    feedback: Feedback,
}

impl SessionController {
    pub fn new(toast_ttl: Duration) -> Self {
        Self {
            store: SessionStore::new(),
            reveal: RevealState::new(),
            theme: ThemeMode::default(),
            in_flight: 0,
            feedback: Feedback::new(toast_ttl),
        }
    }

    // --- Generation ---

    /// True while at least one generation request is outstanding.
    pub fn is_generating(&self) -> bool {
        self.in_flight > 0
    }

    /// Mark a generation request as started.
    ///
    /// Nothing here refuses a second request; callers that want a single
    /// outstanding request check `is_generating` first.
    pub fn begin_generation(&mut self) {
        self.in_flight += 1;
        info!(in_flight = self.in_flight, "Wallet generation started");
    }

    /// Apply the outcome of a generation request.
    ///
    /// Success prepends the record. Failure leaves the store untouched,
    /// logs the cause and raises a failure notice.
    pub fn finish_generation(&mut self, result: AppResult<WalletRecord>) -> Option<RecordId> {
        self.in_flight = self.in_flight.saturating_sub(1);
        match result {
            Ok(record) => {
                let id = self.store.prepend(record);
                info!(id = id.value(), total = self.store.len(), "Wallet generated");
                Some(id)
            }
            Err(e) => {
                error!("Error generating wallet: {}", e);
                self.feedback.failure(GENERATION_FAILED_MESSAGE);
                None
            }
        }
    }

    /// Request one wallet from `source` and store it.
    pub async fn generate(&mut self, source: &dyn WalletSource) -> Option<RecordId> {
        self.begin_generation();
        let result = source.fetch_wallet().await;
        self.finish_generation(result)
    }

    // --- Records ---

    pub fn list(&self) -> &[WalletEntry] {
        self.store.list()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn label_number(&self, position: usize) -> Option<usize> {
        self.store.label_number(position)
    }

    /// Remove the record at `position`; out-of-range positions are ignored.
    pub fn delete(&mut self, position: usize) -> bool {
        match self.store.delete(position) {
            Some(entry) => {
                self.reveal.forget(entry.id);
                true
            }
            None => false,
        }
    }

    // --- Reveal state ---

    /// Flip the secret-key visibility of the record at `position`.
    ///
    /// A position with no record has nothing to reveal and stays hidden.
    pub fn toggle_reveal(&mut self, position: usize) -> bool {
        match self.store.id_at(position) {
            Some(id) => {
                let revealed = self.reveal.toggle(id);
                debug!(id = id.value(), revealed, "Reveal toggled");
                revealed
            }
            None => false,
        }
    }

    pub fn is_revealed(&self, position: usize) -> bool {
        self.store
            .id_at(position)
            .is_some_and(|id| self.reveal.is_revealed(id))
    }

    /// Secret key text for display, masked unless revealed.
    pub fn secret_display(&self, position: usize) -> Option<String> {
        self.store
            .get(position)
            .map(|e| e.record.secret_display(self.reveal.is_revealed(e.id)))
    }

    // --- Clipboard ---

    /// Copy arbitrary text and acknowledge it.
    pub fn copy_text(&mut self, clipboard: &mut dyn ClipboardWriter, text: &str) -> bool {
        copy_with_feedback(clipboard, &mut self.feedback, text)
    }

    /// Copy one field of the record at `position`.
    pub fn copy_field(
        &mut self,
        clipboard: &mut dyn ClipboardWriter,
        position: usize,
        field: RecordField,
    ) -> bool {
        match self.store.get(position) {
            Some(entry) => {
                copy_with_feedback(clipboard, &mut self.feedback, entry.record.field(field))
            }
            None => false,
        }
    }

    // --- Theme & feedback ---

    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    pub fn toggle_theme(&mut self) -> ThemeMode {
        self.theme = self.theme.toggled();
        debug!(theme = self.theme.as_str(), "Theme toggled");
        self.theme
    }

    pub fn feedback(&self) -> &Feedback {
        &self.feedback
    }

    pub fn feedback_mut(&mut self) -> &mut Feedback {
        &mut self.feedback
    }

    /// End the session: drop every record and reveal flag.
    pub fn clear(&mut self) {
        debug!(
            records = self.store.len(),
            revealed = self.reveal.revealed_count(),
            "Session cleared"
        );
        self.store.clear();
        self.reveal.clear();
    }

    /// Periodic housekeeping: expire stale notices.
    pub fn tick(&mut self, now: Instant) {
        self.feedback.expire(now);
    }
}
