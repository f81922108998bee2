//! GUI actions.

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;

/// Operations that drive Anki's window.
///
/// Obtained via [`AnkiClient::gui()`].
#[derive(Debug)]
pub struct GuiActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct BrowseParams<'a> {
    query: &'a str,
}

impl GuiActions<'_> {
    /// Ask Anki to close gracefully.
    ///
    /// The request is only scheduled; this returns without waiting for the
    /// process to exit.
    pub async fn exit(&self) -> Result<()> {
        self.client.invoke_unit_bare("guiExitAnki").await
    }

    /// Open the card browser on `query` and return the matching card IDs.
    pub async fn browse(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("guiBrowse", BrowseParams { query })
            .await
    }

    /// Switch the main window to the deck list.
    pub async fn deck_browser(&self) -> Result<()> {
        self.client.invoke_unit_bare("guiDeckBrowser").await
    }
}
