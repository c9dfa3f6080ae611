//! [`CodeExtractor`]: store lookup followed by keyword/digit matching.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::matcher;
use crate::response::CodeResponse;
use crate::store;

/// Reads the newest message from a Messages store and pulls out its
/// verification code.
///
/// Holds only the store path, so a single instance can be shared across
/// concurrent requests; every call opens and closes its own connection.
#[derive(Debug, Clone)]
pub struct CodeExtractor {
    store_path: Option<PathBuf>,
}

impl CodeExtractor {
    /// Extractor bound to an explicit store location.
    pub fn new(store_path: impl Into<PathBuf>) -> Self {
        Self {
            store_path: Some(store_path.into()),
        }
    }

    /// Extractor bound to `<home>/Library/Messages/chat.db`.
    ///
    /// If no home directory can be resolved every call reports
    /// [`ExtractError::StoreNotFound`].
    pub fn from_home() -> Self {
        Self {
            store_path: store::default_store_path(),
        }
    }

    pub fn store_path(&self) -> Option<&Path> {
        self.store_path.as_deref()
    }

    /// Run one extraction and fold the outcome into a response body.
    pub async fn extract_latest_code(&self) -> CodeResponse {
        self.try_extract().await.into()
    }

    /// Run one extraction, keeping the failure kind.
    pub async fn try_extract(&self) -> Result<String, ExtractError> {
        let path = match self.store_path.as_deref() {
            Some(path) if path.exists() => path,
            _ => {
                warn!(path = ?self.store_path, "messaging store not found");
                return Err(ExtractError::StoreNotFound);
            }
        };

        let text = match store::latest_message_text(path).await {
            Ok(text) => text,
            Err(e) => {
                match &e {
                    ExtractError::Connection(_)
                    | ExtractError::Query(_)
                    | ExtractError::NullText => {
                        warn!(path = %path.display(), error = %e, "messaging store lookup failed")
                    }
                    _ => debug!(reason = %e, "no recent message"),
                }
                return Err(e);
            }
        };

        let code = matcher::find_code(&text).map(str::to_owned);
        match &code {
            Ok(c) => debug!(len = c.len(), "verification code found"),
            Err(e) => debug!(reason = %e, "latest message has no code"),
        }
        code
    }
}
