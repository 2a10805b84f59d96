//! End-to-end session flows driven through command routing.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use swatchbook::models::AppConfig;
use swatchbook::services::{FixedExtractor, Level};
use swatchbook::{dispatch, Command, Outcome};

async fn run(session: &mut swatchbook::Session, line: &str) -> Outcome {
    let command = Command::parse_input(line).unwrap();
    dispatch(session, command).await
}

#[tokio::test]
async fn test_pick_harmony_save_load_flow() {
    let (mut session, _) = default_session();

    assert_done(run(&mut session, "color #ff0000").await);
    assert_done(run(&mut session, "harmony triadic").await);
    assert_palette(&session, &["#FF0000", "#00FF00", "#0000FF"]);

    let message = assert_done(run(&mut session, "save Primaries").await);
    assert_eq!(message, "Saved \"Primaries\" (3 colors)");
    assert_notification(&session, Level::Info, "Saved \"Primaries\"");

    // Changing the working palette leaves the snapshot alone
    assert_done(run(&mut session, "remove 0").await);
    assert_palette(&session, &["#00FF00", "#0000FF"]);

    assert_done(run(&mut session, "load 2").await);
    assert_palette(&session, &["#FF0000", "#00FF00", "#0000FF"]);
    assert_eq!(session.current_color(), color("#FF0000"));
}

#[tokio::test]
async fn test_shortcuts_drive_session() {
    let (mut session, clipboard) = default_session();

    assert_done(run(&mut session, "r").await);
    let random = session.current_color();

    assert_done(run(&mut session, "a").await);
    assert_eq!(session.palette().last(), Some(&random));

    assert_done(run(&mut session, "c").await);
    assert_eq!(clipboard.contents().await, Some(random.to_hex()));

    assert_done(run(&mut session, "6").await);
    assert_eq!(session.palette().len(), 5);
    assert_eq!(session.palette()[2], random);

    assert_eq!(run(&mut session, "q").await, Outcome::Quit);
}

#[tokio::test]
async fn test_invalid_entry_keeps_state_and_notifies() {
    let (mut session, _) = default_session();

    let message = assert_failed(run(&mut session, "color rgb(1,2,3)").await);
    assert!(message.starts_with("Error: Invalid color"), "{message}");
    assert_eq!(session.current_color(), color(colors::BLUE));
    assert_eq!(session.notifier().active().unwrap().level, Level::Error);
}

#[tokio::test]
async fn test_capacity_from_config() {
    let config = AppConfig::from_yaml(SMALL_CONFIG).unwrap();
    let (mut session, _) = session_with(&config);

    assert_done(run(&mut session, "color #123456").await);
    assert_done(run(&mut session, "add").await);
    assert_palette(&session, &["#000000", "#FFFFFF", "#123456"]);

    assert_done(run(&mut session, "color #654321").await);
    let message = assert_failed(run(&mut session, "add").await);
    assert_eq!(message, "Error: Palette is full (3 colors)");
    assert_palette(&session, &["#000000", "#FFFFFF", "#123456"]);
}

#[tokio::test]
async fn test_extracted_palette_replaces_working_palette() {
    let config = AppConfig::from_yaml(SMALL_CONFIG).unwrap();
    let (mut session, _) = session_with(&config);
    let extractor = FixedExtractor::new(
        ["#0ea5e9", "#0284c7", "#0369a1", "#075985", "#0c4a6e", "#082f49"],
        config.extraction.count,
    );

    let first = session.extract(&extractor, b"image bytes").await.unwrap();
    assert_eq!(first, Some(color("#0EA5E9")));
    assert_palette(&session, &["#0EA5E9", "#0284C7", "#0369A1", "#075985"]);
    assert_eq!(session.current_color(), color("#0EA5E9"));
}

#[tokio::test]
async fn test_rejected_extraction_keeps_palette() {
    let (mut session, _) = default_session();

    let message = assert_failed(run(&mut session, "extract #111111,#zzzzzz").await);
    assert!(message.contains("Invalid color"), "{message}");
    assert_palette(
        &session,
        &[
            colors::BLUE,
            colors::RED,
            colors::GREEN,
            colors::AMBER,
            colors::VIOLET,
        ],
    );
}

#[tokio::test]
async fn test_delete_saved_palette() {
    let (mut session, _) = default_session();

    let message = assert_done(run(&mut session, "delete 0").await);
    assert_eq!(message, "Deleted \"Ocean Blues\"");
    assert_notification(&session, Level::Info, "Deleted \"Ocean Blues\"");

    let message = assert_failed(run(&mut session, "delete 1").await);
    assert_eq!(message, "Error: Index 1 out of range (length 1)");
}

#[tokio::test]
async fn test_notification_expires_after_timeout() {
    let config = AppConfig::from_yaml(SMALL_CONFIG).unwrap();
    let (mut session, _) = session_with(&config);

    assert_done(run(&mut session, "copy").await);
    let deadline = session.notifier().deadline().unwrap();

    assert!(session
        .notifier_mut()
        .dismiss_expired(deadline - std::time::Duration::from_millis(1))
        .is_none());
    let dismissed = session.notifier_mut().dismiss_expired(deadline).unwrap();
    assert_eq!(dismissed.message, "Copied #000000");
    assert!(session.notifier().active().is_none());
}

#[tokio::test]
async fn test_saving_emptied_palette_is_rejected() {
    let (mut session, _) = default_session();
    for _ in 0..5 {
        assert_done(run(&mut session, "remove 0").await);
    }

    let message = assert_failed(run(&mut session, "save Nothing").await);
    assert_eq!(message, "Error: Palette has no colors");
    assert_eq!(session.saved().len(), 2);
}
