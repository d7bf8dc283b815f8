pub mod client;

pub use client::GeneratorClient;

use crate::error::AppResult;
use crate::session::WalletRecord;
use async_trait::async_trait;

/// Anything that can hand out one freshly generated wallet record
#[async_trait]
pub trait WalletSource: Send + Sync {
    async fn fetch_wallet(&self) -> AppResult<WalletRecord>;
}
