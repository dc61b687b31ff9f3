//! # Bookplay
//!
//! Observable view-models for an audiobook player's transport bar, and the controller
//! that binds them to the bar's widgets.
//!
//! ## Crates
//!
//! - [`signals`]: the property binder. Subjects declare their properties with
//!   [`properties!`], listeners bind by name and are released when their guard drops.
//! - [`viewmodel`]: [`PlaybackControlViewModel`] and [`PlaybackSpeedViewModel`], the
//!   host service traits they command, and the JSON transport configuration.
//! - [`ui`]: [`MediaController`], which keeps a [`TransportView`] in sync and forwards
//!   widget events and keyboard shortcuts.
//!
//! ## Example
//!
//! ```rust
//! # use bookplay::{BookNavigator, Book, EngineError, PlaybackControlViewModel, PlaybackEngine, Subject, TransportConfig};
//! # use std::sync::{Arc, Mutex};
//! # struct Silent;
//! # impl PlaybackEngine for Silent {
//! #     fn play_pause(&self) -> Result<(), EngineError> { Ok(()) }
//! #     fn seek(&self, _: f64) -> Result<(), EngineError> { Ok(()) }
//! #     fn next_chapter(&self) -> Result<(), EngineError> { Ok(()) }
//! #     fn previous_chapter(&self) -> Result<(), EngineError> { Ok(()) }
//! #     fn set_volume(&self, _: f64) -> Result<(), EngineError> { Ok(()) }
//! #     fn set_speed(&self, _: f64) -> Result<(), EngineError> { Ok(()) }
//! # }
//! # struct Nowhere;
//! # impl BookNavigator for Nowhere { fn open_book_detail(&self, _: &Book) {} }
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let playback = Arc::new(PlaybackControlViewModel::new(Arc::new(Silent), Arc::new(Nowhere), TransportConfig::default())?);
//!
//! let seen = Arc::new(Mutex::new(Vec::new()));
//! let guard = {
//!     let (seen, weak) = (seen.clone(), Arc::downgrade(&playback));
//!     playback.bind_to("volume", move || {
//!         if let Some(playback) = weak.upgrade() {
//!             seen.lock().unwrap().push(playback.volume());
//!         }
//!     })?
//! };
//!
//! playback.set_volume(0.4)?;
//! drop(guard);
//! playback.set_volume(0.6)?;
//! assert_eq!(*seen.lock().unwrap(), vec![0.4]);
//!
//! // names are checked when binding
//! assert!(playback.bind_to("loudness", || {}).is_err());
//! # Ok(())
//! # }
//! ```

pub use bookplay_signals as signals;
pub use bookplay_ui as ui;
pub use bookplay_viewmodel as viewmodel;

pub use bookplay_signals::{properties, BindError, Binder, BindingGuard, BindingSet, IntoListener, Listener, Property, Subject};
pub use bookplay_ui::{Action, ControllerError, MediaController, ShortcutMap, TransportView, WidgetEvent};
pub use bookplay_viewmodel::{
    Book, BookNavigator, Chapter, ConfigError, EngineError, EngineEvent, PlaybackControlViewModel, PlaybackEngine,
    PlaybackProperty, PlaybackSpeedViewModel, SpeedProperty, TransportConfig,
};
