//! A typed async client for AnkiConnect.
//!
//! AnkiConnect is an Anki add-on that exposes a JSON API on
//! `http://127.0.0.1:8765`. Every call posts `{action, version, params}` and
//! gets back `{result, error}`; this crate turns that into typed methods
//! returning [`Result`].
//!
//! # Quick Start
//!
//! ```no_run
//! use ankiconnect::{AnkiClient, NoteInput};
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let client = AnkiClient::new()?;
//! client.misc().ensure_supported().await?;
//!
//! client.decks().create("Spanish").await?;
//! let note = NoteInput::builder("Spanish", "Basic")
//!     .field("Front", "gato")
//!     .field("Back", "cat")
//!     .build();
//! client.notes().add(&note).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Action Groups
//!
//! - [`AnkiClient::decks()`] - list, create and delete decks
//! - [`AnkiClient::models()`] - list and create note types
//! - [`AnkiClient::notes()`] - find, add, update and delete notes
//! - [`AnkiClient::media()`] - manage the media folder
//! - [`AnkiClient::gui()`] - exit Anki, open the browser
//! - [`AnkiClient::misc()`] - version checks, sync, permissions
//!
//! # Configuration
//!
//! [`ClientBuilder`] sets the URL, API key, timeout and protocol version.
//! [`ClientBuilder::from_env`] reads `ANKICONNECT_URL` and
//! `ANKICONNECT_API_KEY`.

pub mod actions;
pub mod client;
pub mod error;
mod request;
pub mod types;

pub use actions::PermissionResult;
pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use request::PROTOCOL_VERSION;
pub use types::{
    CardTemplateInput, DuplicateScope, MediaAttachment, MediaSource, ModelInput, NoteField,
    NoteInfo, NoteInput, NoteInputBuilder, NoteOptions, NoteUpdate, StoreMedia,
};
