mod common;
use anyhow::Result;
use bookplay::viewmodel::testing::audiobook;
use bookplay::{Chapter, EngineEvent, Subject, TransportConfig, WidgetEvent};
use common::*;

#[test]
fn test_view_follows_view_model() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let _controller = player.controller()?;
    assert_eq!(player.view.take(), ["media_info false", "revealed true", "volume 1"]);

    player.artwork.insert(audiobook().id, "file:///covers/7.png");
    player.playback.apply(EngineEvent::BookLoaded(Some(audiobook())));
    assert_eq!(
        player.view.take(),
        [
            "cover file:///covers/7.png",
            "title The Left Hand of Darkness",
            "subtitle Chapter 1",
            "media_info true",
            "play_icon Start",
            "seek_length 1200",
            "seek_position 0",
        ]
    );

    player.playback.apply(EngineEvent::PlayingChanged(true));
    player.playback.apply(EngineEvent::PositionChanged(42.5));
    assert_eq!(player.view.take(), ["play_icon Pause", "seek_position 42.5"]);

    player.playback.apply(EngineEvent::ChapterChanged(Chapter::new("Chapter 2", 900.0)));
    assert_eq!(
        player.view.take(),
        [
            "cover file:///covers/7.png",
            "title The Left Hand of Darkness",
            "subtitle Chapter 2",
            "media_info true",
            "seek_length 900",
            "seek_position 0",
        ]
    );

    // unloading hides the media information and leaves the seek bar alone
    player.playback.apply(EngineEvent::BookLoaded(None));
    assert_eq!(player.view.take(), ["media_info false", "play_icon Start"]);
    Ok(())
}

#[test]
fn test_widget_events_reach_engine() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let controller = player.controller()?;
    player.playback.apply(EngineEvent::BookLoaded(Some(audiobook())));

    controller.handle(WidgetEvent::PlayClicked);
    controller.handle(WidgetEvent::SeekPositionChanged(600.0));
    controller.handle(WidgetEvent::SeekBarRewind);
    controller.handle(WidgetEvent::NextClicked);
    controller.handle(WidgetEvent::VolumeChanged(0.5));
    controller.handle(WidgetEvent::CoverClicked);
    controller.handle(WidgetEvent::TimerClicked);

    assert_eq!(player.engine.commands(), ["play_pause", "seek 600", "seek 570", "seek 600", "volume 0.5"]);
    assert_eq!(player.navigator.opened(), vec![audiobook().id]);
    assert_eq!(player.timer.presented(), 1);
    assert!(player.playback.playing());
    assert_eq!(player.playback.position(), 600.0);
    Ok(())
}

#[test]
fn test_engine_failure_is_not_committed() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let controller = player.controller()?;
    player.playback.apply(EngineEvent::BookLoaded(Some(audiobook())));
    player.view.take();

    player.engine.fail_next();
    controller.handle(WidgetEvent::PlayClicked);
    assert!(!player.playback.playing());
    assert_eq!(player.view.take(), [] as [&str; 0]);

    // the next command goes through
    controller.handle(WidgetEvent::PlayClicked);
    assert_eq!(player.view.take(), ["play_icon Pause"]);
    Ok(())
}

#[test]
fn test_dropped_controller_is_not_called_back() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let controller = player.controller()?;
    assert_eq!(controller.binding_count(), 6);
    assert_eq!(player.playback.binder().listener_count(bookplay::PlaybackProperty::Volume), 1);

    drop(controller);
    player.view.take();

    player.playback.set_volume(0.2)?;
    player.playback.set_lock_ui(true);
    player.playback.apply(EngineEvent::BookLoaded(Some(audiobook())));
    assert_eq!(player.view.take(), [] as [&str; 0]);
    assert_eq!(player.playback.binder().listener_count(bookplay::PlaybackProperty::Volume), 0);
    Ok(())
}

#[test]
fn test_two_controllers_share_view_models() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let first = player.controller()?;
    let second = player.controller()?;
    player.view.take();

    second.handle(WidgetEvent::VolumeChanged(0.7));
    // both controllers push to the same recording view, in binding order
    assert_eq!(player.view.take(), ["volume 0.7", "volume 0.7"]);

    drop(first);
    player.playback.set_lock_ui(true);
    assert_eq!(player.view.take(), ["revealed false"]);
    Ok(())
}
