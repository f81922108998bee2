//! Action groups for AnkiConnect operations.
//!
//! Each group borrows the client and maps its methods onto AnkiConnect
//! action names.

mod decks;
mod graphical;
mod media;
mod miscellaneous;
mod models;
mod notes;

pub use decks::DeckActions;
pub use graphical::GuiActions;
pub use media::MediaActions;
pub use miscellaneous::{MiscActions, PermissionResult};
pub use models::ModelActions;
pub use notes::NoteActions;
