//! Subcommand handlers. Results go to stdout as pretty JSON.

use std::error::Error;

use ankiconnect::{AnkiClient, ModelInput, NoteInput, StoreMedia};
use serde::Serialize;
use serde_json::json;
use tracing::debug;

use crate::cli::{AddNote, Command, DeckCommand, MediaCommand, ModelCommand, NoteCommand, StoreArgs};

type CliResult = Result<(), Box<dyn Error>>;

fn to_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

fn print_json<T: Serialize>(value: &T) -> CliResult {
    println!("{}", to_json(value)?);
    Ok(())
}

pub async fn run(client: &AnkiClient, command: Command) -> CliResult {
    match command {
        Command::Version => {
            let version = client.misc().version().await?;
            print_json(&json!({"version": version, "supported": client.supports(version)}))
        }
        Command::Sync => {
            client.misc().sync().await?;
            Ok(())
        }
        Command::Exit => {
            client.gui().exit().await?;
            Ok(())
        }
        Command::Decks(cmd) => decks(client, cmd).await,
        Command::Models(cmd) => models(client, cmd).await,
        Command::Notes(cmd) => notes(client, cmd).await,
        Command::Media(cmd) => media(client, cmd).await,
    }
}

async fn decks(client: &AnkiClient, cmd: DeckCommand) -> CliResult {
    let decks = client.decks();
    match cmd {
        DeckCommand::List { ids: false } => print_json(&decks.names().await?),
        DeckCommand::List { ids: true } => print_json(&decks.names_and_ids().await?),
        DeckCommand::Create { name } => print_json(&decks.create(&name).await?),
        DeckCommand::Delete { names, cards_too } => {
            decks.delete(&names, cards_too).await?;
            debug!(count = names.len(), "deleted decks");
            Ok(())
        }
    }
}

async fn models(client: &AnkiClient, cmd: ModelCommand) -> CliResult {
    let models = client.models();
    match cmd {
        ModelCommand::List { ids: false } => print_json(&models.names().await?),
        ModelCommand::List { ids: true } => print_json(&models.names_and_ids().await?),
        ModelCommand::Fields { model } => print_json(&models.field_names(&model).await?),
        ModelCommand::Create {
            name,
            fields,
            templates,
            css,
            cloze,
        } => {
            let mut input = fields
                .into_iter()
                .fold(ModelInput::new(name), |model, field| model.field(field));
            for t in templates {
                input = input.template(t.name, t.front, t.back);
            }
            if let Some(css) = css {
                input = input.css(css);
            }
            if cloze {
                input = input.cloze(true);
            }
            models.create(&input).await?;
            Ok(())
        }
    }
}

fn build_note(add: AddNote) -> NoteInput {
    add.fields
        .into_iter()
        .fold(NoteInput::builder(add.deck, add.model), |b, (k, v)| {
            b.field(k, v)
        })
        .tags(add.tags)
        .allow_duplicate(add.allow_duplicate)
        .build()
}

async fn notes(client: &AnkiClient, cmd: NoteCommand) -> CliResult {
    let notes = client.notes();
    match cmd {
        NoteCommand::Find { query } => print_json(&notes.find(&query).await?),
        NoteCommand::Info { ids } => print_json(&notes.info(&ids).await?),
        NoteCommand::Add(add) => print_json(&notes.add(&build_note(add)).await?),
        NoteCommand::Delete { ids } => {
            notes.delete(&ids).await?;
            Ok(())
        }
        NoteCommand::RemoveEmpty => {
            notes.remove_empty().await?;
            Ok(())
        }
        NoteCommand::Tags { ids, add, remove } => {
            if let Some(tags) = add {
                notes.add_tags(&ids, &tags).await?;
            }
            if let Some(tags) = remove {
                notes.remove_tags(&ids, &tags).await?;
            }
            Ok(())
        }
    }
}

fn build_store(args: StoreArgs) -> Result<StoreMedia, Box<dyn Error>> {
    let media = match (args.data, args.path, args.url) {
        (Some(data), None, None) => StoreMedia::from_base64(args.filename, data),
        (None, Some(path), None) => StoreMedia::from_path(args.filename, path),
        (None, None, Some(url)) => StoreMedia::from_url(args.filename, url),
        _ => return Err("exactly one of --data, --path or --url is required".into()),
    };
    Ok(if args.replace {
        media.delete_existing(true)
    } else {
        media
    })
}

async fn media(client: &AnkiClient, cmd: MediaCommand) -> CliResult {
    let media = client.media();
    match cmd {
        MediaCommand::List { pattern } => print_json(&media.list(&pattern).await?),
        MediaCommand::Store(args) => print_json(&media.store(&build_store(args)?).await?),
        MediaCommand::Retrieve { filename } => match media.retrieve(&filename).await? {
            Some(data) => print_json(&data),
            None => Err(format!("no media file named {filename}").into()),
        },
        MediaCommand::Delete { filename } => {
            media.delete(&filename).await?;
            Ok(())
        }
        MediaCommand::Dir => print_json(&media.directory().await?),
    }
}
