//! smscode-core – verification-code extraction from the macOS Messages store.
//!
//! [`CodeExtractor`] opens `chat.db` read-only, fetches the newest message from
//! the last 60 seconds, and returns its 4–6 digit code when the message carries
//! one of the [`matcher::KEYWORDS`].

pub mod error;
pub mod extractor;
pub mod matcher;
pub mod response;
pub mod store;

pub use error::ExtractError;
pub use extractor::CodeExtractor;
pub use response::{CodeResponse, SmsCode};
