use thiserror::Error;

/// Every way a single extraction attempt can come up empty.
///
/// None of these are fatal: the caller folds them into a
/// [`CodeResponse`](crate::CodeResponse) whose `message` is
/// [`ExtractError::message`].
#[derive(Debug, Error)]
pub enum ExtractError {
    /// The messaging store does not exist at the configured path (or no home
    /// directory could be resolved to build the default path).
    #[error("messaging store not found")]
    StoreNotFound,

    /// The store exists but could not be opened read-only.
    #[error("failed to open messaging store: {0}")]
    Connection(#[source] sqlx::Error),

    /// The store opened but the latest-message query failed.
    #[error("latest-message query failed: {0}")]
    Query(#[source] sqlx::Error),

    /// The newest message in the window has a NULL `text` column.
    #[error("latest message has no text body")]
    NullText,

    /// No message newer than the 60-second window.
    #[error("no message inside the lookup window")]
    NoRowsFound,

    /// The latest message carries none of the verification-code keywords.
    #[error("message has no verification-code keyword")]
    NoKeywordMatch,

    /// A keyword is present but there is no run of 4 to 6 digits.
    #[error("message has no 4-6 digit code")]
    NoDigitsFound,
}

impl ExtractError {
    /// Fixed client-facing message for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            ExtractError::StoreNotFound => "Database file not found",
            ExtractError::Connection(_) => "Database connection error",
            ExtractError::Query(_) | ExtractError::NullText => "Database query error",
            ExtractError::NoRowsFound => "No message found",
            ExtractError::NoKeywordMatch | ExtractError::NoDigitsFound => "No code found",
        }
    }
}
