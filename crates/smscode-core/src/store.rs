//! Read-only access to the Messages `chat.db` store.
//!
//! The store is owned by the OS; this module never creates, migrates or
//! writes to it. Each lookup opens its own connection with
//! `SQLITE_OPEN_READONLY` and closes it before returning, whatever the
//! outcome.
//!
//! # Timestamps
//!
//! `message.date` counts nanoseconds since 2001-01-01T00:00:00Z. The query
//! shifts it onto the Unix epoch ([`STORE_EPOCH_OFFSET_SECS`]) and compares
//! local wall-clock datetimes inside SQLite, so "now" is taken from the same
//! clock the store uses.

use std::path::{Path, PathBuf};

use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::Connection;
use tracing::warn;

use crate::error::ExtractError;

/// Seconds between 1970-01-01 and 2001-01-01 (UTC).
pub const STORE_EPOCH_OFFSET_SECS: i64 = 978_307_200;

/// Width of the lookup window, in seconds.
pub const WINDOW_SECS: i64 = 60;

// ?1 = STORE_EPOCH_OFFSET_SECS, ?2 = window modifier ("-60 seconds").
const LATEST_MESSAGE_SQL: &str = "SELECT text FROM message \
     WHERE datetime(date / 1000000000 + ?1, 'unixepoch', 'localtime') \
         > datetime('now', 'localtime', ?2) \
     ORDER BY date DESC \
     LIMIT 1";

fn window_modifier() -> String {
    format!("-{WINDOW_SECS} seconds")
}

/// `<home>/Library/Messages/chat.db`, or `None` when there is no home directory.
pub fn default_store_path() -> Option<PathBuf> {
    dirs_next::home_dir().map(|home| home.join("Library").join("Messages").join("chat.db"))
}

/// Body of the newest message inside the window.
///
/// A matching row whose `text` is NULL (attachment-only messages) cannot be
/// read as a body and is reported as [`ExtractError::NullText`].
pub async fn latest_message_text(path: &Path) -> Result<String, ExtractError> {
    let options = SqliteConnectOptions::new()
        .filename(path)
        .read_only(true)
        .create_if_missing(false);

    let mut conn = SqliteConnection::connect_with(&options)
        .await
        .map_err(ExtractError::Connection)?;

    let row = sqlx::query_scalar::<_, Option<String>>(LATEST_MESSAGE_SQL)
        .bind(STORE_EPOCH_OFFSET_SECS)
        .bind(window_modifier())
        .fetch_optional(&mut conn)
        .await;

    if let Err(e) = conn.close().await {
        warn!(path = %path.display(), error = %e, "failed to close messaging store connection");
    }

    match row {
        Ok(Some(Some(text))) => Ok(text),
        Ok(Some(None)) => Err(ExtractError::NullText),
        Ok(None) => Err(ExtractError::NoRowsFound),
        Err(e) => Err(ExtractError::Query(e)),
    }
}
