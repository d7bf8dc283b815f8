//! Wallet records as returned by the generation service.
//!
//! A record is accepted whole or not at all: every field must be present,
//! a JSON string, and not blank. Field contents are zeroized on drop.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Character used to mask a hidden secret key, one per source character.
pub const MASK_CHAR: char = '•';

/// Wire names of the three record fields.
pub const SEED_PHRASE_FIELD: &str = "seedPhrase";
pub const PUBLIC_KEY_FIELD: &str = "publicKey";
pub const SECRET_KEY_FIELD: &str = "secretKey";

/// One generated wallet: mnemonic, public identifier, private credential.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct WalletRecord {
    seed_phrase: String,
    public_key: String,
    secret_key: String,
}

impl WalletRecord {
    /// Build a record, rejecting blank fields.
    pub fn new(
        seed_phrase: impl Into<String>,
        public_key: impl Into<String>,
        secret_key: impl Into<String>,
    ) -> AppResult<Self> {
        let record = Self {
            seed_phrase: seed_phrase.into(),
            public_key: public_key.into(),
            secret_key: secret_key.into(),
        };
        for (name, value) in record.fields() {
            if value.trim().is_empty() {
                return Err(AppError::malformed(format!("{} is empty", name)));
            }
        }
        Ok(record)
    }

    /// Validate an untrusted response body.
    ///
    /// Unknown extra fields are ignored. Error messages name the field but
    /// never echo its value.
    pub fn from_json(body: &Value) -> AppResult<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| AppError::malformed("response body is not a JSON object"))?;

        let field = |name: &str| -> AppResult<String> {
            match object.get(name) {
                None | Some(Value::Null) => {
                    Err(AppError::malformed(format!("{} is missing", name)))
                }
                Some(Value::String(s)) => Ok(s.clone()),
                Some(_) => Err(AppError::malformed(format!("{} is not a string", name))),
            }
        };

        Self::new(
            field(SEED_PHRASE_FIELD)?,
            field(PUBLIC_KEY_FIELD)?,
            field(SECRET_KEY_FIELD)?,
        )
    }

    pub fn seed_phrase(&self) -> &str {
        &self.seed_phrase
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    pub fn secret_key(&self) -> &str {
        &self.secret_key
    }

    /// Secret key as it should be displayed: plaintext only when revealed.
    pub fn secret_display(&self, revealed: bool) -> String {
        if revealed {
            self.secret_key.clone()
        } else {
            mask(&self.secret_key)
        }
    }

    /// Text of one field, for copying.
    pub fn field(&self, field: RecordField) -> &str {
        match field {
            RecordField::SeedPhrase => &self.seed_phrase,
            RecordField::SecretKey => &self.secret_key,
            RecordField::PublicKey => &self.public_key,
        }
    }

    fn fields(&self) -> [(&'static str, &str); 3] {
        [
            (SEED_PHRASE_FIELD, &self.seed_phrase),
            (PUBLIC_KEY_FIELD, &self.public_key),
            (SECRET_KEY_FIELD, &self.secret_key),
        ]
    }
}

impl std::fmt::Debug for WalletRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WalletRecord")
            .field("seed_phrase", &"<redacted>")
            .field("public_key", &self.public_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// The copyable fields of a record, in on-screen order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordField {
    #[default]
    SeedPhrase,
    SecretKey,
    PublicKey,
}

impl RecordField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::SeedPhrase => "Seed Phrase",
            Self::SecretKey => "Private Key",
            Self::PublicKey => "Public Key",
        }
    }

    /// Next field in display order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Self::SeedPhrase => Self::SecretKey,
            Self::SecretKey => Self::PublicKey,
            Self::PublicKey => Self::SeedPhrase,
        }
    }
}

fn mask(secret: &str) -> String {
    std::iter::repeat(MASK_CHAR).take(secret.chars().count()).collect()
}
