pub mod clipboard;
pub mod config;
pub mod error;
pub mod feedback;
pub mod generator;
pub mod session;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use generator::{GeneratorClient, WalletSource};
pub use session::{SessionController, WalletRecord};
