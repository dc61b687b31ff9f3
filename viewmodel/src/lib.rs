//! Playback view-models for the bookplay transport bar.
//!
//! [`PlaybackControlViewModel`] and [`PlaybackSpeedViewModel`] are the observable subjects;
//! UI code binds to their properties through [`bookplay_signals::Subject`] and drives them
//! with commands. Audio output, navigation and artwork are host services behind the traits
//! in [`services`].

pub mod config;
pub mod error;
pub mod model;
pub mod playback;
pub mod services;
pub mod speed;

#[cfg(any(test, feature = "test-helpers"))]
pub mod testing;

pub use config::{SpeedConfig, TransportConfig};
pub use error::{ConfigError, EngineError};
pub use model::{Book, Chapter};
pub use playback::{PlaybackControlViewModel, PlaybackProperty, PlaybackState};
pub use services::{Artwork, ArtworkCache, BookNavigator, EngineEvent, PlaybackEngine};
pub use speed::{PlaybackSpeedViewModel, SpeedProperty};

pub use bookplay_signals as signals;

// Initialize tracing for tests
#[cfg(test)]
#[ctor::ctor]
fn init_tracing() { tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).with_test_writer().init(); }
