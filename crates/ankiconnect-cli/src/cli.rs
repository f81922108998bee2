//! Command-line arguments.

use clap::{Args, Parser, Subcommand};

use ankiconnect::client::{API_KEY_ENV, DEFAULT_URL, URL_ENV};

/// Drive a running Anki through the AnkiConnect add-on.
#[derive(Parser, Debug)]
#[command(name = "ankiconnect")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// AnkiConnect endpoint
    #[arg(long, env = URL_ENV, default_value = DEFAULT_URL)]
    pub url: String,

    /// API key, if AnkiConnect is configured to require one
    #[arg(long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 60)]
    pub timeout_secs: u64,

    /// Enable verbose logging (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the AnkiConnect API version and whether it is supported
    Version,
    /// Synchronize the collection with AnkiWeb
    Sync,
    /// Ask Anki to close
    Exit,
    /// Deck operations
    #[command(subcommand)]
    Decks(DeckCommand),
    /// Model (note type) operations
    #[command(subcommand)]
    Models(ModelCommand),
    /// Note operations
    #[command(subcommand)]
    Notes(NoteCommand),
    /// Media folder operations
    #[command(subcommand)]
    Media(MediaCommand),
}

#[derive(Subcommand, Debug)]
pub enum DeckCommand {
    /// List deck names
    List {
        /// Include deck IDs
        #[arg(long)]
        ids: bool,
    },
    /// Create a deck and print its ID
    Create { name: String },
    /// Delete decks
    Delete {
        #[arg(required = true)]
        names: Vec<String>,
        /// Delete the cards in the decks as well
        #[arg(long)]
        cards_too: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum ModelCommand {
    /// List model names
    List {
        /// Include model IDs
        #[arg(long)]
        ids: bool,
    },
    /// List a model's fields
    Fields { model: String },
    /// Create a model
    Create {
        name: String,
        /// Field name, in order (repeatable)
        #[arg(long = "field", required = true)]
        fields: Vec<String>,
        /// Card template as NAME|FRONT|BACK (repeatable)
        #[arg(long = "template", required = true, value_parser = parse_template)]
        templates: Vec<TemplateSpec>,
        /// Card CSS
        #[arg(long)]
        css: Option<String>,
        /// Create a cloze model
        #[arg(long)]
        cloze: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum NoteCommand {
    /// Print IDs of notes matching a search query
    Find { query: String },
    /// Print details for notes
    Info {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Add a note and print its ID
    Add(AddNote),
    /// Delete notes and their cards
    Delete {
        #[arg(required = true)]
        ids: Vec<i64>,
    },
    /// Delete notes that have no cards
    RemoveEmpty,
    /// Add or remove space-separated tags
    Tags {
        #[arg(required = true)]
        ids: Vec<i64>,
        #[arg(long, required_unless_present = "remove")]
        add: Option<String>,
        #[arg(long)]
        remove: Option<String>,
    },
}

#[derive(Args, Debug)]
pub struct AddNote {
    #[arg(long)]
    pub deck: String,
    #[arg(long, default_value = "Basic")]
    pub model: String,
    /// Field value as NAME=VALUE (repeatable)
    #[arg(long = "field", required = true, value_parser = parse_key_val)]
    pub fields: Vec<(String, String)>,
    /// Tag (repeatable)
    #[arg(long = "tag")]
    pub tags: Vec<String>,
    #[arg(long)]
    pub allow_duplicate: bool,
}

#[derive(Subcommand, Debug)]
pub enum MediaCommand {
    /// List media files matching a glob pattern
    List {
        #[arg(default_value = "*")]
        pattern: String,
    },
    /// Store a media file
    Store(StoreArgs),
    /// Print a media file's content as base64
    Retrieve { filename: String },
    /// Delete a media file
    Delete { filename: String },
    /// Print the media folder path
    Dir,
}

#[derive(Args, Debug)]
pub struct StoreArgs {
    pub filename: String,
    /// Base64 content
    #[arg(long, required_unless_present_any = ["path", "url"], conflicts_with_all = ["path", "url"])]
    pub data: Option<String>,
    /// Path readable by Anki
    #[arg(long, conflicts_with = "url")]
    pub path: Option<String>,
    /// URL for Anki to download
    #[arg(long)]
    pub url: Option<String>,
    /// Replace an existing file with the same name
    #[arg(long)]
    pub replace: bool,
}

/// A card template given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSpec {
    pub name: String,
    pub front: String,
    pub back: String,
}

fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got `{s}`"))?;
    if key.is_empty() {
        return Err(format!("empty field name in `{s}`"));
    }
    Ok((key.to_string(), value.to_string()))
}

fn parse_template(s: &str) -> Result<TemplateSpec, String> {
    let mut parts = s.splitn(3, '|');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), Some(front), Some(back)) if !name.is_empty() => Ok(TemplateSpec {
            name: name.to_string(),
            front: front.to_string(),
            back: back.to_string(),
        }),
        _ => Err(format!("expected NAME|FRONT|BACK, got `{s}`")),
    }
}
