//! Media-related types.

use serde::Serialize;
use serde::ser::{SerializeMap, Serializer};

/// Where the content of a stored media file comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// Base64-encoded file content.
    Base64(String),
    /// Absolute path readable by Anki.
    Path(String),
    /// URL for Anki to download.
    Url(String),
}

/// A file to write into Anki's media folder.
///
/// Exactly one source is sent, so conflicting inputs cannot be expressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreMedia {
    pub filename: String,
    pub source: MediaSource,
    /// Replace a same-named file instead of letting Anki pick a new name.
    pub delete_existing: Option<bool>,
}

impl StoreMedia {
    /// Store base64 `data` as `filename`.
    pub fn from_base64(filename: impl Into<String>, data: impl Into<String>) -> Self {
        Self::new(filename, MediaSource::Base64(data.into()))
    }

    /// Store the file at `path` as `filename`.
    pub fn from_path(filename: impl Into<String>, path: impl Into<String>) -> Self {
        Self::new(filename, MediaSource::Path(path.into()))
    }

    /// Download `url` and store it as `filename`.
    pub fn from_url(filename: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(filename, MediaSource::Url(url.into()))
    }

    fn new(filename: impl Into<String>, source: MediaSource) -> Self {
        Self {
            filename: filename.into(),
            source,
            delete_existing: None,
        }
    }

    /// Set whether an existing file with the same name is replaced.
    pub fn delete_existing(mut self, delete: bool) -> Self {
        self.delete_existing = Some(delete);
        self
    }
}

impl Serialize for StoreMedia {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let len = 2 + usize::from(self.delete_existing.is_some());
        let mut map = serializer.serialize_map(Some(len))?;
        map.serialize_entry("filename", &self.filename)?;
        match &self.source {
            MediaSource::Base64(data) => map.serialize_entry("data", data)?,
            MediaSource::Path(path) => map.serialize_entry("path", path)?,
            MediaSource::Url(url) => map.serialize_entry("url", url)?,
        }
        if let Some(delete) = self.delete_existing {
            map.serialize_entry("deleteExisting", &delete)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn only_one_source_is_sent() {
        let value = serde_json::to_value(StoreMedia::from_base64("a.txt", "SGk=")).unwrap();
        assert_eq!(value, json!({"filename": "a.txt", "data": "SGk="}));

        let value = serde_json::to_value(StoreMedia::from_path("b.png", "/tmp/b.png")).unwrap();
        assert_eq!(value, json!({"filename": "b.png", "path": "/tmp/b.png"}));
    }

    #[test]
    fn delete_existing_is_camel_case() {
        let media = StoreMedia::from_url("c.jpg", "https://example.com/c.jpg").delete_existing(false);
        assert_eq!(
            serde_json::to_value(media).unwrap(),
            json!({
                "filename": "c.jpg",
                "url": "https://example.com/c.jpg",
                "deleteExisting": false
            })
        );
    }
}
