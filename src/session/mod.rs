pub mod controller;
pub mod record;
pub mod reveal;
pub mod store;
pub mod theme;

pub use controller::SessionController;
pub use record::{RecordField, WalletRecord};
pub use reveal::RevealState;
pub use store::{RecordId, SessionStore, WalletEntry};
pub use theme::ThemeMode;
