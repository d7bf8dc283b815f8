use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use solgen::clipboard::ClipboardWriter;
use solgen::session::RecordField;
use solgen::{SessionController, WalletSource};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

use crate::tui::event::AppEvent;
use crate::tui::widgets::Spinner;

pub const GENERATE_LABEL: &str = "Generate Wallet";
pub const GENERATING_LABEL: &str = "Generating...";

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub tx: Option<mpsc::UnboundedSender<AppEvent>>,

    /// Everything the session owns: records, reveal flags, theme, toasts
    pub session: SessionController,
    /// Position of the highlighted wallet card
    pub selected: usize,
    /// Field of the highlighted card that `y` copies
    pub selected_field: RecordField,
    pub spinner: Spinner,

    source: Arc<dyn WalletSource>,
    clipboard: Box<dyn ClipboardWriter + Send>,
}

impl App {
    pub fn new(
        toast_ttl: Duration,
        source: Arc<dyn WalletSource>,
        clipboard: Box<dyn ClipboardWriter + Send>,
    ) -> Self {
        Self {
            should_quit: false,
            tx: None,
            session: SessionController::new(toast_ttl),
            selected: 0,
            selected_field: RecordField::default(),
            spinner: Spinner::new(GENERATING_LABEL.to_string()),
            source,
            clipboard,
        }
    }

    pub fn set_sender(&mut self, tx: mpsc::UnboundedSender<AppEvent>) {
        self.tx = Some(tx);
    }

    /// Handle application events
    pub fn handle_event(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::Quit => {
                self.should_quit = true;
                false
            }
            AppEvent::Key(key) => {
                // Ctrl-C always quits
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    self.should_quit = true;
                    return false;
                }
                self.handle_key(key);
                !self.should_quit
            }
            AppEvent::Tick => {
                self.spinner.tick();
                self.session.tick(Instant::now());
                true
            }
            AppEvent::WalletGenerated(result) => {
                if self.session.finish_generation(result).is_some() {
                    // the newest wallet is at the top; highlight it
                    self.selected = 0;
                }
                if !self.session.is_generating() {
                    self.spinner.stop();
                }
                true
            }
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('g') => self.generate_wallet(),
            KeyCode::Char('t') => {
                self.session.toggle_theme();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.session.len() {
                    self.selected += 1;
                }
            }
            KeyCode::Tab | KeyCode::Char('c') => {
                self.selected_field = self.selected_field.next();
            }
            KeyCode::Char('v') | KeyCode::Enter => {
                self.session.toggle_reveal(self.selected);
            }
            KeyCode::Char('y') => self.copy_selected_field(),
            KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
            KeyCode::Esc => self.session.feedback_mut().dismiss(),
            _ => {}
        }
    }

    // --- Actions ---

    /// Start a generation request unless one is already outstanding.
    fn generate_wallet(&mut self) {
        if self.session.is_generating() {
            debug!("Generate ignored: request already in flight");
            return;
        }
        if let Some(tx) = &self.tx {
            self.session.begin_generation();
            self.spinner.start();
            let tx = tx.clone();
            let source = Arc::clone(&self.source);
            tokio::spawn(async move {
                let result = source.fetch_wallet().await;
                // a closed channel means the view is gone; the result is dropped
                let _ = tx.send(AppEvent::WalletGenerated(result));
            });
        }
    }

    fn copy_selected_field(&mut self) {
        let field = self.selected_field;
        self.session
            .copy_field(self.clipboard.as_mut(), self.selected, field);
    }

    fn delete_selected(&mut self) {
        if self.session.delete(self.selected) && self.selected >= self.session.len() {
            self.selected = self.session.len().saturating_sub(1);
        }
    }
}
