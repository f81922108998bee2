//! Error types for the ankiconnect crate.
//!
//! Failures fall into three layers: the transport (reqwest, HTTP status),
//! the envelope (an `error` string reported by AnkiConnect), and local
//! checks made before anything is sent (validation, configuration).
//!
//! # Example
//!
//! ```no_run
//! use ankiconnect::{AnkiClient, Error};
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let client = AnkiClient::new()?;
//!
//! match client.decks().names().await {
//!     Ok(decks) => println!("{} decks", decks.len()),
//!     Err(Error::ConnectionRefused) => eprintln!("start Anki first"),
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// AnkiConnect answered with a non-success status and no readable
    /// error envelope.
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// AnkiConnect returned an error message.
    ///
    /// Typical messages are "deck was not found" or
    /// "cannot create note because it is a duplicate".
    #[error("AnkiConnect error: {0}")]
    AnkiConnect(String),

    /// The result was `null` where a value was expected.
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Nothing is listening on the configured address.
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,

    /// The API key is missing or wrong, or the request needs approval in Anki.
    #[error("Permission denied. Request permission first or check API key.")]
    PermissionDenied,

    /// The server speaks an older protocol than the client requires.
    #[error("AnkiConnect version {found} is not supported (need at least {required})")]
    UnsupportedVersion {
        /// Version reported by the server.
        found: u32,
        /// Minimum version the client was configured with.
        required: u32,
    },

    /// Input was rejected locally before sending.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Invalid client configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Map an error string from the response envelope to a typed error.
    pub(crate) fn from_envelope(message: String) -> Self {
        if message.contains("permission") {
            Error::PermissionDenied
        } else {
            Error::AnkiConnect(message)
        }
    }
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
