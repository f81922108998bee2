//! Note-related types.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A note to be created.
///
/// Field names are case-sensitive and must match the model exactly.
/// Values are HTML.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInput {
    /// Target deck.
    pub deck_name: String,
    /// Model (note type) name.
    pub model_name: String,
    /// Field values keyed by field name.
    pub fields: HashMap<String, String>,
    /// Duplicate handling.
    pub options: NoteOptions,
    /// Tags for the note.
    pub tags: Vec<String>,
    /// Pictures to download and reference from fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub picture: Vec<MediaAttachment>,
    /// Audio files to download and reference from fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<MediaAttachment>,
    /// Video files to download and reference from fields.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub video: Vec<MediaAttachment>,
}

impl NoteInput {
    /// Start building a note for `deck` using `model`.
    ///
    /// # Example
    ///
    /// ```
    /// use ankiconnect::NoteInput;
    ///
    /// let note = NoteInput::builder("Spanish", "Basic")
    ///     .field("Front", "perro")
    ///     .field("Back", "dog")
    ///     .tag("animals")
    ///     .build();
    /// assert_eq!(note.fields["Back"], "dog");
    /// ```
    pub fn builder(deck: impl Into<String>, model: impl Into<String>) -> NoteInputBuilder {
        NoteInputBuilder {
            note: NoteInput {
                deck_name: deck.into(),
                model_name: model.into(),
                fields: HashMap::new(),
                options: NoteOptions::default(),
                tags: Vec::new(),
                picture: Vec::new(),
                audio: Vec::new(),
                video: Vec::new(),
            },
        }
    }
}

/// Fluent construction of a [`NoteInput`].
#[derive(Debug, Clone)]
pub struct NoteInputBuilder {
    note: NoteInput,
}

impl NoteInputBuilder {
    /// Set a field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.note.fields.insert(name.into(), value.into());
        self
    }

    /// Add a tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.note.tags.push(tag.into());
        self
    }

    /// Add several tags.
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.note.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Allow the note even if its first field duplicates an existing note.
    pub fn allow_duplicate(mut self, allow: bool) -> Self {
        self.note.options.allow_duplicate = allow;
        self
    }

    /// Restrict duplicate checking.
    pub fn duplicate_scope(mut self, scope: DuplicateScope) -> Self {
        self.note.options.duplicate_scope = Some(scope);
        self
    }

    /// Attach a picture.
    pub fn picture(mut self, media: MediaAttachment) -> Self {
        self.note.picture.push(media);
        self
    }

    /// Attach an audio file.
    pub fn audio(mut self, media: MediaAttachment) -> Self {
        self.note.audio.push(media);
        self
    }

    /// Attach a video file.
    pub fn video(mut self, media: MediaAttachment) -> Self {
        self.note.video.push(media);
        self
    }

    /// Finish the note.
    pub fn build(self) -> NoteInput {
        self.note
    }
}

/// Options applied when adding a note.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    /// Duplicates are normally rejected with an error.
    pub allow_duplicate: bool,
    /// Where to look for duplicates.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_scope: Option<DuplicateScope>,
}

/// Scope for duplicate checking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateScope {
    /// Only the target deck.
    Deck,
    /// The whole collection.
    Collection,
}

/// A picture, audio or video file fetched by AnkiConnect and referenced
/// from one or more fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaAttachment {
    /// Download location.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Base64 content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,
    /// Local path readable by Anki.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Name to store the file under in the media folder.
    pub filename: String,
    /// MD5 of content to skip; a download matching it is not attached.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_hash: Option<String>,
    /// Fields the media reference is appended to.
    pub fields: Vec<String>,
}

impl MediaAttachment {
    fn empty(filename: impl Into<String>) -> Self {
        Self {
            url: None,
            data: None,
            path: None,
            filename: filename.into(),
            skip_hash: None,
            fields: Vec::new(),
        }
    }

    /// Media downloaded from `url`.
    pub fn from_url(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::empty(filename)
        }
    }

    /// Media given as base64 content.
    pub fn from_base64(filename: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            data: Some(data.into()),
            ..Self::empty(filename)
        }
    }

    /// Media read from a local path.
    pub fn from_path(filename: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            path: Some(path.into()),
            ..Self::empty(filename)
        }
    }

    /// Show the media in `field`.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Skip the attachment when the downloaded content has this MD5.
    pub fn skip_hash(mut self, md5: impl Into<String>) -> Self {
        self.skip_hash = Some(md5.into());
        self
    }
}

/// New field values for an existing note.
#[derive(Debug, Clone, Serialize)]
pub struct NoteUpdate {
    /// Note to change.
    pub id: i64,
    /// Replacement field values. Fields left out are not touched.
    pub fields: HashMap<String, String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub picture: Vec<MediaAttachment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub audio: Vec<MediaAttachment>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub video: Vec<MediaAttachment>,
}

impl NoteUpdate {
    /// An update to note `id` with no changes yet.
    pub fn new(id: i64) -> Self {
        Self {
            id,
            fields: HashMap::new(),
            picture: Vec::new(),
            audio: Vec::new(),
            video: Vec::new(),
        }
    }

    /// Replace a field value.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Attach a picture.
    pub fn picture(mut self, media: MediaAttachment) -> Self {
        self.picture.push(media);
        self
    }

    /// Attach an audio file.
    pub fn audio(mut self, media: MediaAttachment) -> Self {
        self.audio.push(media);
        self
    }

    /// Attach a video file.
    pub fn video(mut self, media: MediaAttachment) -> Self {
        self.video.push(media);
        self
    }
}

/// An existing note as reported by `notesInfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteInfo {
    pub note_id: i64,
    pub model_name: String,
    pub tags: Vec<String>,
    pub fields: HashMap<String, NoteField>,
    #[serde(default)]
    pub cards: Vec<i64>,
}

impl NoteInfo {
    /// Value of a field, if the model has it.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(|f| f.value.as_str())
    }

    /// Field names in model order.
    pub fn field_names(&self) -> Vec<&str> {
        let mut names: Vec<(&str, i32)> = self
            .fields
            .iter()
            .map(|(name, f)| (name.as_str(), f.order))
            .collect();
        names.sort_by_key(|(_, order)| *order);
        names.into_iter().map(|(name, _)| name).collect()
    }
}

/// A field value and its position in the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoteField {
    pub value: String,
    pub order: i32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn minimal_note_serializes_without_media() {
        let note = NoteInput::builder("Default", "Basic")
            .field("Front", "Q")
            .build();
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value,
            json!({
                "deckName": "Default",
                "modelName": "Basic",
                "fields": {"Front": "Q"},
                "options": {"allowDuplicate": false},
                "tags": []
            })
        );
    }

    #[test]
    fn attachments_and_scope_are_serialized() {
        let note = NoteInput::builder("Default", "Basic")
            .allow_duplicate(true)
            .duplicate_scope(DuplicateScope::Deck)
            .audio(
                MediaAttachment::from_url("hi.mp3", "https://example.com/hi.mp3")
                    .field("Back")
                    .skip_hash("7e2c2f954ef6051373ba916f000168dc"),
            )
            .build();
        let value = serde_json::to_value(&note).unwrap();
        assert_eq!(
            value["options"],
            json!({"allowDuplicate": true, "duplicateScope": "deck"})
        );
        assert_eq!(
            value["audio"],
            json!([{
                "url": "https://example.com/hi.mp3",
                "filename": "hi.mp3",
                "skipHash": "7e2c2f954ef6051373ba916f000168dc",
                "fields": ["Back"]
            }])
        );
        assert!(value.get("picture").is_none());
    }

    #[test]
    fn note_info_orders_fields() {
        let info: NoteInfo = serde_json::from_value(json!({
            "noteId": 1502298033753i64,
            "modelName": "Basic",
            "tags": ["tag"],
            "fields": {
                "Back": {"value": "back content", "order": 1},
                "Front": {"value": "front content", "order": 0}
            },
            "cards": [1498938915662i64]
        }))
        .unwrap();
        assert_eq!(info.field_names(), vec!["Front", "Back"]);
        assert_eq!(info.field("Back"), Some("back content"));
        assert_eq!(info.field("Extra"), None);
    }

    #[test]
    fn update_serializes_id_and_fields() {
        let update = NoteUpdate::new(42).field("Front", "new");
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"id": 42, "fields": {"Front": "new"}})
        );
    }
}
