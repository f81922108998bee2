//! Deck actions.
//!
//! # Example
//!
//! ```no_run
//! use ankiconnect::AnkiClient;
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let client = AnkiClient::new()?;
//!
//! let id = client.decks().create("Japanese::Kanji").await?;
//! for name in client.decks().names().await? {
//!     println!("{name}");
//! }
//! # let _ = id;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;

/// Deck operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct CreateDeckParams<'a> {
    deck: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct DeleteDecksParams<'a, S> {
    decks: &'a [S],
    cards_too: bool,
}

#[derive(Serialize)]
struct ChangeDeckParams<'a> {
    cards: &'a [i64],
    deck: &'a str,
}

impl DeckActions<'_> {
    /// Names of all decks.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_bare("deckNames").await
    }

    /// Map of deck name to deck ID.
    pub async fn names_and_ids(&self) -> Result<HashMap<String, i64>> {
        self.client.invoke_bare("deckNamesAndIds").await
    }

    /// Create an empty deck and return its ID.
    ///
    /// An existing deck with the same name is left alone and its ID is
    /// returned. Use `::` to nest decks.
    pub async fn create(&self, name: &str) -> Result<i64> {
        self.client
            .invoke("createDeck", CreateDeckParams { deck: name })
            .await
    }

    /// Delete decks by name.
    ///
    /// AnkiConnect requires `cards_too` to be true in recent versions; the
    /// cards inside the decks are then deleted with them.
    pub async fn delete<S: Serialize>(&self, names: &[S], cards_too: bool) -> Result<()> {
        self.client
            .invoke_unit(
                "deleteDecks",
                DeleteDecksParams {
                    decks: names,
                    cards_too,
                },
            )
            .await
    }

    /// Move cards into `deck`, creating it if needed.
    pub async fn move_cards(&self, cards: &[i64], deck: &str) -> Result<()> {
        self.client
            .invoke_unit("changeDeck", ChangeDeckParams { cards, deck })
            .await
    }
}
