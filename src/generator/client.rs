use crate::config::GeneratorConfig;
use crate::error::{AppError, AppResult};
use crate::generator::WalletSource;
use crate::session::WalletRecord;
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

/// Client for the remote wallet generation endpoint
pub struct GeneratorClient {
    http: Client,
    url: String,
}

impl std::fmt::Debug for GeneratorClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratorClient")
            .field("url", &self.url)
            .finish_non_exhaustive()
    }
}

impl GeneratorClient {
    /// Create a new generation client from config
    pub fn new(config: &GeneratorConfig) -> AppResult<Self> {
        let http = Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            http,
            url: config.url.clone(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Request one freshly generated wallet.
    ///
    /// The body is validated before a record is built; anything other than
    /// three non-blank string fields is rejected.
    pub async fn generate(&self) -> AppResult<WalletRecord> {
        debug!(url = self.url(), "Requesting wallet");

        let response = self.http.get(&self.url).send().await.map_err(|e| {
            error!("Wallet generation request failed: {}", e);
            AppError::Http(e)
        })?;

        if !response.status().is_success() {
            // the body is dropped unread
            let status = response.status();
            error!("Wallet generation failed with status {}", status);
            return Err(AppError::GeneratorStatus {
                status: status.as_u16(),
            });
        }

        let body: Value = response.json().await.map_err(|e| {
            error!("Failed to parse wallet response: {}", e);
            AppError::malformed("response body is not valid JSON")
        })?;

        WalletRecord::from_json(&body).map_err(|e| {
            error!("Rejected wallet response: {}", e);
            e
        })
    }
}

#[async_trait]
impl WalletSource for GeneratorClient {
    async fn fetch_wallet(&self) -> AppResult<WalletRecord> {
        self.generate().await
    }
}
