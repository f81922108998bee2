//! Note actions.
//!
//! # Example
//!
//! ```no_run
//! use ankiconnect::{AnkiClient, NoteInput};
//!
//! # async fn example() -> ankiconnect::Result<()> {
//! let client = AnkiClient::new()?;
//!
//! let note = NoteInput::builder("Default", "Basic")
//!     .field("Front", "Hello")
//!     .field("Back", "World")
//!     .build();
//! let id = client.notes().add(&note).await?;
//!
//! let found = client.notes().find("deck:Default").await?;
//! assert!(found.contains(&id));
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::{NoteInfo, NoteInput, NoteUpdate};

/// Note operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct QueryParams<'a> {
    query: &'a str,
}

#[derive(Serialize)]
struct NoteIdsParams<'a> {
    notes: &'a [i64],
}

#[derive(Serialize)]
struct NoteParams<'a, T> {
    note: &'a T,
}

#[derive(Serialize)]
struct NotesParams<'a> {
    notes: &'a [NoteInput],
}

#[derive(Serialize)]
struct TagsParams<'a> {
    notes: &'a [i64],
    tags: &'a str,
}

impl NoteActions<'_> {
    /// IDs of notes matching an Anki search query.
    ///
    /// See <https://docs.ankiweb.net/searching.html> for the syntax.
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findNotes", QueryParams { query })
            .await
    }

    /// Details for each of the given notes.
    pub async fn info(&self, ids: &[i64]) -> Result<Vec<NoteInfo>> {
        self.client
            .invoke("notesInfo", NoteIdsParams { notes: ids })
            .await
    }

    /// Add a note and return its ID.
    ///
    /// Duplicates are rejected with an [`Error::AnkiConnect`](crate::Error::AnkiConnect)
    /// unless the note allows them.
    pub async fn add(&self, note: &NoteInput) -> Result<i64> {
        self.client.invoke("addNote", NoteParams { note }).await
    }

    /// Add several notes at once.
    ///
    /// The result lines up with `notes`; `None` marks a note that could not
    /// be created.
    pub async fn add_many(&self, notes: &[NoteInput]) -> Result<Vec<Option<i64>>> {
        self.client
            .invoke("addNotes", NotesParams { notes })
            .await
    }

    /// Whether each note could be added, without adding it.
    pub async fn can_add(&self, notes: &[NoteInput]) -> Result<Vec<bool>> {
        self.client
            .invoke("canAddNotes", NotesParams { notes })
            .await
    }

    /// Replace field values of an existing note, optionally attaching media.
    ///
    /// Changes may be lost if the note is open in Anki's browser while
    /// this runs.
    pub async fn update_fields(&self, update: &NoteUpdate) -> Result<()> {
        self.client
            .invoke_unit("updateNoteFields", NoteParams { note: update })
            .await
    }

    /// Delete notes together with all of their cards.
    pub async fn delete(&self, ids: &[i64]) -> Result<()> {
        self.client
            .invoke_unit("deleteNotes", NoteIdsParams { notes: ids })
            .await
    }

    /// Delete every note that has no cards.
    pub async fn remove_empty(&self) -> Result<()> {
        self.client.invoke_unit_bare("removeEmptyNotes").await
    }

    /// Add space-separated `tags` to the notes.
    pub async fn add_tags(&self, ids: &[i64], tags: &str) -> Result<()> {
        self.client
            .invoke_unit("addTags", TagsParams { notes: ids, tags })
            .await
    }

    /// Remove space-separated `tags` from the notes.
    pub async fn remove_tags(&self, ids: &[i64], tags: &str) -> Result<()> {
        self.client
            .invoke_unit("removeTags", TagsParams { notes: ids, tags })
            .await
    }

    /// Every tag in the collection.
    pub async fn all_tags(&self) -> Result<Vec<String>> {
        self.client.invoke_bare("getTags").await
    }
}
