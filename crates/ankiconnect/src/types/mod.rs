//! Domain types sent to and returned by AnkiConnect.

mod media;
mod model;
mod note;

pub use media::{MediaSource, StoreMedia};
pub use model::{CardTemplateInput, ModelInput};
pub use note::{
    DuplicateScope, MediaAttachment, NoteField, NoteInfo, NoteInput, NoteInputBuilder,
    NoteOptions, NoteUpdate,
};
