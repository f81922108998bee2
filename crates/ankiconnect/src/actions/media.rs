//! Media folder actions.
//!
//! # Example
//!
//! ```no_run
//! use ankiconnect::{AnkiClient, StoreMedia};
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let client = AnkiClient::new()?;
//!
//! let stored = client
//!     .media()
//!     .store(&StoreMedia::from_url("cat.jpg", "https://example.com/cat.jpg"))
//!     .await?;
//! let jpgs = client.media().list("*.jpg").await?;
//! # let _ = (stored, jpgs);
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::StoreMedia;

/// Media operations.
///
/// Obtained via [`AnkiClient::media()`].
#[derive(Debug)]
pub struct MediaActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct PatternParams<'a> {
    pattern: &'a str,
}

#[derive(Serialize)]
struct FilenameParams<'a> {
    filename: &'a str,
}

// retrieveMediaFile answers `false` instead of an error for missing files.
#[derive(Deserialize)]
#[serde(untagged)]
enum Retrieved {
    Content(String),
    Missing(#[allow(dead_code)] bool),
}

impl MediaActions<'_> {
    /// Names of media files matching a glob `pattern`, such as `*.mp3`.
    pub async fn list(&self, pattern: &str) -> Result<Vec<String>> {
        self.client
            .invoke("getMediaFilesNames", PatternParams { pattern })
            .await
    }

    /// Write a file into the media folder.
    ///
    /// Returns the name actually used, which differs from the requested one
    /// when Anki renames to avoid a clash.
    pub async fn store(&self, media: &StoreMedia) -> Result<String> {
        self.client.invoke("storeMediaFile", media).await
    }

    /// Base64 content of `filename`, or `None` if there is no such file.
    pub async fn retrieve(&self, filename: &str) -> Result<Option<String>> {
        let retrieved: Retrieved = self
            .client
            .invoke("retrieveMediaFile", FilenameParams { filename })
            .await?;
        Ok(match retrieved {
            Retrieved::Content(data) => Some(data),
            Retrieved::Missing(_) => None,
        })
    }

    /// Delete `filename` from the media folder.
    pub async fn delete(&self, filename: &str) -> Result<()> {
        self.client
            .invoke_unit("deleteMediaFile", FilenameParams { filename })
            .await
    }

    /// Absolute path of the media folder.
    pub async fn directory(&self) -> Result<String> {
        self.client.invoke_bare("getMediaDirPath").await
    }
}
