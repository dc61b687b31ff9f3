mod common;
use anyhow::Result;
use bookplay::viewmodel::testing::audiobook;
use bookplay::{EngineEvent, PlaybackProperty, Subject, TransportConfig};
use common::*;
use std::sync::Arc;
use tokio::sync::mpsc;

/// Engine reports arrive on a background task and are committed on the view-model,
/// which pushes them through the controller to the view.
#[tokio::test]
async fn test_engine_reports_reach_view() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let _controller = player.controller()?;
    player.view.take();

    let (tx, mut rx) = mpsc::unbounded_channel();
    let playback = player.playback.clone();
    let applier = tokio::spawn(async move {
        while let Some(event) = rx.recv().await {
            playback.apply(event);
        }
    });

    tx.send(EngineEvent::BookLoaded(Some(audiobook())))?;
    tx.send(EngineEvent::PlayingChanged(true))?;
    tx.send(EngineEvent::PositionChanged(12.0))?;
    tx.send(EngineEvent::VolumeChanged(0.4))?;
    drop(tx);
    applier.await?;

    let updates = player.view.take();
    assert_eq!(
        updates[updates.len() - 3..],
        ["play_icon Pause".to_string(), "seek_position 12".to_string(), "volume 0.4".to_string()]
    );
    assert!(player.playback.playing());
    Ok(())
}

/// A channel listener observes every property change of the view-model in commit order
#[tokio::test]
async fn test_channel_observer_sees_commit_order() -> Result<()> {
    let player = Player::new(TransportConfig::default());
    let (tx, mut rx) = mpsc::unbounded_channel();
    let _guard = player.playback.binder().bind_all(tx);

    let playback = Arc::clone(&player.playback);
    tokio::task::spawn_blocking(move || {
        playback.apply(EngineEvent::BookLoaded(Some(audiobook())));
        playback.set_lock_ui(true);
    })
    .await?;

    let mut seen = Vec::new();
    while let Ok(property) = rx.try_recv() {
        seen.push(property);
    }
    assert_eq!(
        seen,
        [PlaybackProperty::Book, PlaybackProperty::Playing, PlaybackProperty::Length, PlaybackProperty::Position, PlaybackProperty::LockUi]
    );
    Ok(())
}
