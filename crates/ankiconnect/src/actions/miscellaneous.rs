//! Version checks, sync and other actions that fit no other group.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::AnkiClient;
use crate::error::{Error, Result};

/// Miscellaneous operations.
///
/// Obtained via [`AnkiClient::misc()`].
#[derive(Debug)]
pub struct MiscActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

/// Answer to a permission request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionResult {
    /// `"granted"` or `"denied"`.
    pub permission: String,
    #[serde(default)]
    pub require_api_key: bool,
    #[serde(default)]
    pub version: Option<u32>,
}

impl PermissionResult {
    /// Whether Anki accepted the request.
    pub fn is_granted(&self) -> bool {
        self.permission == "granted"
    }
}

impl MiscActions<'_> {
    /// The API version exposed by AnkiConnect.
    pub async fn version(&self) -> Result<u32> {
        self.client.invoke_bare("version").await
    }

    /// Whether the server is at least the client's protocol version.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use ankiconnect::AnkiClient;
    /// # async fn example() -> ankiconnect::Result<()> {
    /// let client = AnkiClient::new()?;
    /// if !client.misc().check_version().await? {
    ///     eprintln!("please upgrade AnkiConnect");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check_version(&self) -> Result<bool> {
        let found = self.version().await?;
        let required = self.client.version();
        debug!(found, required, "checked AnkiConnect version");
        Ok(self.client.supports(found))
    }

    /// Fail with [`Error::UnsupportedVersion`] if the server is too old.
    pub async fn ensure_supported(&self) -> Result<u32> {
        let found = self.version().await?;
        if !self.client.supports(found) {
            return Err(Error::UnsupportedVersion {
                found,
                required: self.client.version(),
            });
        }
        Ok(found)
    }

    /// Synchronize the local collection with AnkiWeb.
    pub async fn sync(&self) -> Result<()> {
        self.client.invoke_unit_bare("sync").await
    }

    /// Ask the user to allow this client.
    ///
    /// This is the one action that needs no API key.
    pub async fn request_permission(&self) -> Result<PermissionResult> {
        self.client.invoke_bare("requestPermission").await
    }

    /// Reload the collection from disk.
    pub async fn reload_collection(&self) -> Result<()> {
        self.client.invoke_unit_bare("reloadCollection").await
    }
}
