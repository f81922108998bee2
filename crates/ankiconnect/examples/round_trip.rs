//! Example: create a deck, add notes, look them up and clean up.
//!
//! Needs Anki running with AnkiConnect.
//!
//! Run with: cargo run -p ankiconnect --example round_trip

use ankiconnect::{AnkiClient, ClientBuilder, NoteInput};

#[tokio::main]
async fn main() -> ankiconnect::Result<()> {
    let client: AnkiClient = ClientBuilder::from_env().build()?;

    let version = client.misc().ensure_supported().await?;
    println!("AnkiConnect v{version} at {}", client.url());

    let deck = "ankiconnect example";
    let deck_id = client.decks().create(deck).await?;
    println!("deck {deck} has id {deck_id}");

    let notes: Vec<NoteInput> = [("uno", "one"), ("dos", "two"), ("uno", "one")]
        .into_iter()
        .map(|(front, back)| {
            NoteInput::builder(deck, "Basic")
                .field("Front", front)
                .field("Back", back)
                .tag("example")
                .build()
        })
        .collect();

    // The repeated note comes back as None.
    let ids = client.notes().add_many(&notes).await?;
    println!("added: {ids:?}");

    let found = client.notes().find(&format!("\"deck:{deck}\"")).await?;
    for info in client.notes().info(&found).await? {
        println!(
            "{} -> {}",
            info.field("Front").unwrap_or_default(),
            info.field("Back").unwrap_or_default()
        );
    }

    client.decks().delete(&[deck], true).await?;
    println!("removed {deck}");
    Ok(())
}
