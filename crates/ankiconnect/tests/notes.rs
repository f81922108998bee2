//! Tests for note actions.

mod common;

use ankiconnect::{Error, MediaAttachment, NoteInput, NoteUpdate};
use common::{expect_action, expect_params, failure, ok, setup};
use serde_json::{Value, json};

fn basic_note(front: &str) -> NoteInput {
    NoteInput::builder("Default", "Basic")
        .field("Front", front)
        .field("Back", "back content")
        .tag("yomichan")
        .build()
}

#[tokio::test]
async fn test_find_notes() {
    let (server, client) = setup().await;
    expect_params(
        &server,
        "findNotes",
        json!({"query": "deck:current"}),
        ok([1483959289817i64, 1483959291695i64]),
    )
    .await;

    let ids = client.notes().find("deck:current").await.unwrap();
    assert_eq!(ids, vec![1483959289817, 1483959291695]);
}

#[tokio::test]
async fn test_notes_info() {
    let (server, client) = setup().await;
    expect_params(
        &server,
        "notesInfo",
        json!({"notes": [1502298033753i64]}),
        ok(json!([{
            "noteId": 1502298033753i64,
            "modelName": "Basic",
            "tags": ["tag", "another_tag"],
            "fields": {
                "Front": {"value": "front content", "order": 0},
                "Back": {"value": "back content", "order": 1}
            },
            "cards": [1498938915662i64]
        }])),
    )
    .await;

    let notes = client.notes().info(&[1502298033753]).await.unwrap();
    assert_eq!(notes.len(), 1);
    let note = &notes[0];
    assert_eq!(note.model_name, "Basic");
    assert_eq!(note.field("Front"), Some("front content"));
    assert_eq!(note.cards, vec![1498938915662]);
}

#[tokio::test]
async fn test_add_note() {
    let (server, client) = setup().await;
    expect_params(
        &server,
        "addNote",
        json!({"note": {
            "deckName": "Default",
            "modelName": "Basic",
            "fields": {"Front": "front content", "Back": "back content"},
            "options": {"allowDuplicate": false},
            "tags": ["yomichan"]
        }}),
        ok(1496198395707i64),
    )
    .await;

    let id = client.notes().add(&basic_note("front content")).await.unwrap();
    assert_eq!(id, 1496198395707);
}

#[tokio::test]
async fn test_add_duplicate_note_fails() {
    let (server, client) = setup().await;
    expect_action(
        &server,
        "addNote",
        failure("cannot create note because it is a duplicate"),
    )
    .await;

    let err = client.notes().add(&basic_note("dup")).await.unwrap_err();
    assert!(matches!(err, Error::AnkiConnect(msg) if msg.contains("duplicate")));
}

#[tokio::test]
async fn test_add_many_keeps_failed_slots() {
    let (server, client) = setup().await;
    expect_action(&server, "addNotes", ok(json!([1496198395707i64, null]))).await;

    let ids = client
        .notes()
        .add_many(&[basic_note("one"), basic_note("two")])
        .await
        .unwrap();
    assert_eq!(ids, vec![Some(1496198395707), None]);
}

#[tokio::test]
async fn test_can_add() {
    let (server, client) = setup().await;
    expect_action(&server, "canAddNotes", ok([true, false])).await;

    let flags = client
        .notes()
        .can_add(&[basic_note("a"), basic_note("b")])
        .await
        .unwrap();
    assert_eq!(flags, vec![true, false]);
}

#[tokio::test]
async fn test_update_fields_with_picture() {
    let (server, client) = setup().await;
    expect_params(
        &server,
        "updateNoteFields",
        json!({"note": {
            "id": 1514547547030i64,
            "fields": {"Front": "new front content"},
            "picture": [{
                "url": "https://example.com/cat.jpg",
                "filename": "cat.jpg",
                "fields": ["Back"]
            }]
        }}),
        ok(Value::Null),
    )
    .await;

    let update = NoteUpdate::new(1514547547030)
        .field("Front", "new front content")
        .picture(MediaAttachment::from_url("cat.jpg", "https://example.com/cat.jpg").field("Back"));
    client.notes().update_fields(&update).await.unwrap();
}

#[tokio::test]
async fn test_delete_notes() {
    let (server, client) = setup().await;
    expect_params(
        &server,
        "deleteNotes",
        json!({"notes": [1502298033753i64]}),
        ok(Value::Null),
    )
    .await;

    client.notes().delete(&[1502298033753]).await.unwrap();
}

#[tokio::test]
async fn test_remove_empty_notes() {
    let (server, client) = setup().await;
    expect_action(&server, "removeEmptyNotes", ok(Value::Null)).await;

    client.notes().remove_empty().await.unwrap();
}

#[tokio::test]
async fn test_add_and_remove_tags() {
    let (server, client) = setup().await;
    expect_params(
        &server,
        "addTags",
        json!({"notes": [1], "tags": "european-languages"}),
        ok(Value::Null),
    )
    .await;
    expect_params(
        &server,
        "removeTags",
        json!({"notes": [1], "tags": "stale"}),
        ok(Value::Null),
    )
    .await;

    client.notes().add_tags(&[1], "european-languages").await.unwrap();
    client.notes().remove_tags(&[1], "stale").await.unwrap();
}

#[tokio::test]
async fn test_all_tags() {
    let (server, client) = setup().await;
    expect_action(&server, "getTags", ok(["european-languages", "idioms"])).await;

    let tags = client.notes().all_tags().await.unwrap();
    assert_eq!(tags.len(), 2);
}
