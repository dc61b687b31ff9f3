//! Collaborators the view-models drive but do not implement.
//!
//! Audio output, navigation and artwork decoding live in the host application;
//! the view-models only see these traits.

use crate::error::EngineError;
use crate::model::{Book, Chapter};

/// The audio backend.
///
/// Commands return once the backend has accepted them. State the backend changes on its
/// own (chapter transitions, position ticks) comes back through [`EngineEvent`]s.
pub trait PlaybackEngine: Send + Sync {
    fn play_pause(&self) -> Result<(), EngineError>;

    /// Seek to `position` seconds within the current chapter
    fn seek(&self, position: f64) -> Result<(), EngineError>;

    fn next_chapter(&self) -> Result<(), EngineError>;

    fn previous_chapter(&self) -> Result<(), EngineError>;

    /// Volume in `0.0..=1.0`
    fn set_volume(&self, volume: f64) -> Result<(), EngineError>;

    /// Playback rate, 1.0 is normal speed
    fn set_speed(&self, speed: f64) -> Result<(), EngineError>;
}

/// State changes reported by the backend
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// A book was loaded, or unloaded with `None`
    BookLoaded(Option<Book>),
    ChapterChanged(Chapter),
    PlayingChanged(bool),
    /// Position in seconds within the current chapter
    PositionChanged(f64),
    VolumeChanged(f64),
}

/// Navigation into the rest of the application
pub trait BookNavigator: Send + Sync {
    fn open_book_detail(&self, book: &Book);
}

/// A decoded cover, ready for display. Opaque to the transport bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub uri: String,
    pub size: u32,
}

/// Cover lookup. Decoding and caching are the implementor's concern.
pub trait ArtworkCache: Send + Sync {
    /// A cover for `book` at `size` logical pixels, or `None` if the book has no artwork
    fn cover(&self, book: &Book, scale_factor: u32, size: u32) -> Option<Artwork>;
}
