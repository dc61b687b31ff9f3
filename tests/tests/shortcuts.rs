mod common;
use anyhow::Result;
use bookplay::ui::ShortcutError;
use bookplay::viewmodel::testing::audiobook;
use bookplay::{Action, ControllerError, EngineEvent, Subject, TransportConfig};
use common::*;
use std::io::Write;

#[test]
fn test_default_shortcuts() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let controller = player.controller()?;
    player.playback.apply(EngineEvent::BookLoaded(Some(audiobook())));

    for key in ["space", "Right", "Left", "Down", "plus", "KP_Add", "minus", "equal", "Page_Down"] {
        assert!(controller.handle_accelerator(key), "{key} should be bound");
    }
    assert!(!controller.handle_accelerator("Escape"));

    assert_eq!(
        player.engine.commands(),
        [
            "play_pause",
            "seek 30",
            "seek 0",
            "volume 0.9",
            "speed 1.1",
            "speed 1.2",
            "speed 1.1",
            "speed 1",
            "previous_chapter",
        ]
    );
    Ok(())
}

#[test]
fn test_register_creates_every_action() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let controller = player.controller()?;
    let window = RecordingWindow::default();
    controller.register_shortcuts(&window);

    let actions = window.0.into_inner().unwrap();
    let names: Vec<&str> = actions.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, Action::ALL.map(|action| action.name()));
    assert_eq!(actions[9], ("next_chapter".to_string(), vec!["Page_Up".to_string(), "<primary>Right".to_string()]));
    Ok(())
}

#[test]
fn test_overrides_from_config_file() -> Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    write!(file, r#"{{ "rewind_seconds": 10, "shortcuts": {{ "seek_rewind": ["j"], "speed_reset": [] }} }}"#)?;
    let config = TransportConfig::load(file.path())?;

    let player = Player::new(config);
    let controller = player.controller()?;
    player.playback.apply(EngineEvent::BookLoaded(Some(audiobook())));
    player.playback.set_relative_position(45.0)?;

    assert!(controller.handle_accelerator("j"));
    assert!(!controller.handle_accelerator("Left"));
    assert!(!controller.handle_accelerator("equal"));
    assert_eq!(player.playback.position(), 35.0);
    assert_eq!(controller.shortcuts().accelerators(Action::SeekRewind), ["j"]);
    Ok(())
}

#[test]
fn test_bad_overrides_fail_construction() {
    let config = TransportConfig::from_json(r#"{ "shortcuts": { "rewind": ["j"] } }"#).unwrap();
    let player = Player::new(config);
    assert_eq!(player.controller().err(), Some(ControllerError::Shortcut(ShortcutError::UnknownAction("rewind".to_string()))));

    let config = TransportConfig::from_json(r#"{ "shortcuts": { "volume_up": ["space"] } }"#).unwrap();
    let player = Player::new(config);
    match player.controller() {
        Err(ControllerError::Shortcut(ShortcutError::Conflict { accelerator, first, second })) => {
            assert_eq!(accelerator, "space");
            assert_eq!((first, second), (Action::PlayPause, Action::VolumeUp));
        }
        other => panic!("expected a shortcut conflict, got {:?}", other.err()),
    }
    // nothing was bound by the failed constructions
    assert_eq!(player.playback.binder().listener_count(bookplay::PlaybackProperty::Book), 0);
}
