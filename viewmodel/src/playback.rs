use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard};

use bookplay_signals::{properties, Binder, Subject};
use tracing::{debug, instrument};

use crate::config::TransportConfig;
use crate::error::{finite, ConfigError, EngineError};
use crate::model::{Book, Chapter};
use crate::services::{BookNavigator, EngineEvent, PlaybackEngine};

properties! {
    /// Observable properties of [`PlaybackControlViewModel`]
    pub enum PlaybackProperty for "PlaybackControlViewModel" {
        Book => "book",
        Playing => "playing",
        Length => "length",
        Position => "position",
        LockUi => "lock_ui",
        Volume => "volume",
    }
}

/// Snapshot of everything the transport bar displays
#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackState {
    pub book: Option<Book>,
    pub playing: bool,
    /// Length of the current chapter in seconds, zero without a book
    pub length: f64,
    /// Position within the current chapter in seconds
    pub position: f64,
    pub lock_ui: bool,
    pub volume: f64,
}

impl Default for PlaybackState {
    fn default() -> Self { Self { book: None, playing: false, length: 0.0, position: 0.0, lock_ui: false, volume: 1.0 } }
}

/// View-model behind the transport bar: what is loaded, whether it plays, where, how loud.
///
/// Commands go to the [`PlaybackEngine`] first and are committed only once it accepts them.
/// Every committed assignment notifies the property's bindings after the state lock is released,
/// so listeners can read the new value (or issue further commands) from inside the callback.
pub struct PlaybackControlViewModel {
    state: RwLock<PlaybackState>,
    binder: Binder<PlaybackProperty>,
    engine: Arc<dyn PlaybackEngine>,
    navigator: Arc<dyn BookNavigator>,
    config: TransportConfig,
}

impl Subject for PlaybackControlViewModel {
    type Property = PlaybackProperty;
    fn binder(&self) -> &Binder<PlaybackProperty> { &self.binder }
}

impl std::fmt::Debug for PlaybackControlViewModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackControlViewModel").field("state", &*self.read()).field("binder", &self.binder).finish()
    }
}

impl PlaybackControlViewModel {
    /// Fails if `config` does not pass [`TransportConfig::validate`]
    pub fn new(
        engine: Arc<dyn PlaybackEngine>,
        navigator: Arc<dyn BookNavigator>,
        config: TransportConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { state: RwLock::new(PlaybackState::default()), binder: Binder::new(), engine, navigator, config })
    }

    fn read(&self) -> RwLockReadGuard<'_, PlaybackState> { self.state.read().unwrap_or_else(PoisonError::into_inner) }

    /// Apply `f` to the state, release the lock, then notify `changed` in order
    fn commit<R>(&self, changed: &[PlaybackProperty], f: impl FnOnce(&mut PlaybackState) -> R) -> R {
        let result = {
            let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut state)
        };
        for property in changed {
            self.binder.notify(*property);
        }
        result
    }

    pub fn state(&self) -> PlaybackState { self.read().clone() }

    pub fn book(&self) -> Option<Book> { self.read().book.clone() }

    pub fn playing(&self) -> bool { self.read().playing }

    pub fn length(&self) -> f64 { self.read().length }

    pub fn position(&self) -> f64 { self.read().position }

    /// Position within the current chapter, or `None` when no book is loaded
    pub fn relative_position(&self) -> Option<f64> {
        let state = self.read();
        state.book.as_ref().map(|_| state.position)
    }

    pub fn lock_ui(&self) -> bool { self.read().lock_ui }

    pub fn volume(&self) -> f64 { self.read().volume }

    pub fn config(&self) -> &TransportConfig { &self.config }

    /// Seek within the current chapter. Clamped to the chapter; ignored without a book.
    #[instrument(level = "debug", skip(self))]
    pub fn set_relative_position(&self, position: f64) -> Result<(), EngineError> {
        let position = finite("seek", position)?;
        let (has_book, length) = {
            let state = self.read();
            (state.book.is_some(), state.length)
        };
        if !has_book {
            debug!("no book loaded, ignoring seek");
            return Ok(());
        }
        let position = position.clamp(0.0, length.max(0.0));
        self.engine.seek(position)?;
        self.commit(&[PlaybackProperty::Position], |state| state.position = position);
        Ok(())
    }

    /// Set the volume, clamped to `0.0..=1.0`
    #[instrument(level = "debug", skip(self))]
    pub fn set_volume(&self, volume: f64) -> Result<(), EngineError> {
        let volume = finite("set_volume", volume)?.clamp(0.0, 1.0);
        self.engine.set_volume(volume)?;
        self.commit(&[PlaybackProperty::Volume], |state| state.volume = volume);
        Ok(())
    }

    pub fn volume_up(&self) -> Result<(), EngineError> { self.set_volume(self.volume() + self.config.volume_step) }

    pub fn volume_down(&self) -> Result<(), EngineError> { self.set_volume(self.volume() - self.config.volume_step) }

    #[instrument(level = "debug", skip(self))]
    pub fn play_pause(&self) -> Result<(), EngineError> {
        if self.read().book.is_none() {
            debug!("no book loaded, nothing to play");
            return Ok(());
        }
        self.engine.play_pause()?;
        self.commit(&[PlaybackProperty::Playing], |state| state.playing = !state.playing);
        Ok(())
    }

    pub fn rewind(&self) -> Result<(), EngineError> { self.set_relative_position(self.position() - self.config.rewind_seconds) }

    pub fn forward(&self) -> Result<(), EngineError> { self.set_relative_position(self.position() + self.config.forward_seconds) }

    /// Chapter changes are committed when the engine reports them through [`Self::apply`]
    pub fn next_chapter(&self) -> Result<(), EngineError> {
        if self.read().book.is_none() {
            return Ok(());
        }
        self.engine.next_chapter()
    }

    pub fn previous_chapter(&self) -> Result<(), EngineError> {
        if self.read().book.is_none() {
            return Ok(());
        }
        self.engine.previous_chapter()
    }

    pub fn open_book_detail(&self) {
        // clone out so the navigator runs without the state lock held
        let book = self.book();
        match book {
            Some(book) => self.navigator.open_book_detail(&book),
            None => debug!("no book loaded, not opening book detail"),
        }
    }

    /// Lock the transport bar, e.g. while the library is being rebuilt
    pub fn set_lock_ui(&self, lock_ui: bool) { self.commit(&[PlaybackProperty::LockUi], |state| state.lock_ui = lock_ui); }

    /// Commit state reported by the engine
    #[instrument(level = "trace", skip(self))]
    pub fn apply(&self, event: EngineEvent) {
        match event {
            EngineEvent::BookLoaded(book) => {
                let changed =
                    [PlaybackProperty::Book, PlaybackProperty::Playing, PlaybackProperty::Length, PlaybackProperty::Position];
                self.commit(&changed, |state| {
                    state.length = book.as_ref().map_or(0.0, |book| book.current_chapter.length);
                    state.playing = state.playing && book.is_some();
                    state.book = book;
                    state.position = 0.0;
                });
            }
            EngineEvent::ChapterChanged(chapter) => self.change_chapter(chapter),
            EngineEvent::PlayingChanged(playing) => self.commit(&[PlaybackProperty::Playing], |state| state.playing = playing),
            EngineEvent::PositionChanged(value) | EngineEvent::VolumeChanged(value) if !value.is_finite() => {
                debug!(value, "engine reported a non-finite value, ignoring");
            }
            EngineEvent::PositionChanged(position) => {
                self.commit(&[PlaybackProperty::Position], |state| state.position = position.clamp(0.0, state.length.max(0.0)))
            }
            EngineEvent::VolumeChanged(volume) => self.commit(&[PlaybackProperty::Volume], |state| state.volume = volume.clamp(0.0, 1.0)),
        }
    }

    fn change_chapter(&self, chapter: Chapter) {
        if self.read().book.is_none() {
            debug!(chapter = %chapter.name, "chapter change without a book, ignoring");
            return;
        }
        self.commit(&[PlaybackProperty::Book, PlaybackProperty::Length, PlaybackProperty::Position], |state| {
            state.length = chapter.length;
            state.position = 0.0;
            if let Some(book) = state.book.as_mut() {
                book.current_chapter = chapter;
            }
        });
    }
}
