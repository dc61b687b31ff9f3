//! In-memory collaborators for tests. Enabled with the `test-helpers` feature.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use crate::error::EngineError;
use crate::model::{Book, Chapter};
use crate::services::{Artwork, ArtworkCache, BookNavigator, PlaybackEngine};

/// A book with a 20 minute first chapter
pub fn audiobook() -> Book { Book::new(7, "The Left Hand of Darkness", "Ursula K. Le Guin", Chapter::new("Chapter 1", 1200.0)) }

/// Records every command it accepts as a short string, e.g. `"seek 70"`
#[derive(Default)]
pub struct FakeEngine {
    commands: Mutex<Vec<String>>,
    fail_next: AtomicBool,
}

impl FakeEngine {
    pub fn commands(&self) -> Vec<String> { self.commands.lock().unwrap().clone() }

    /// Reject the next command with [`EngineError::Rejected`]
    pub fn fail_next(&self) { self.fail_next.store(true, Ordering::SeqCst); }

    fn record(&self, command: &'static str, entry: String) -> Result<(), EngineError> {
        if self.fail_next.swap(false, Ordering::SeqCst) {
            return Err(EngineError::Rejected { command, reason: "fake failure".to_string() });
        }
        self.commands.lock().unwrap().push(entry);
        Ok(())
    }
}

impl PlaybackEngine for FakeEngine {
    fn play_pause(&self) -> Result<(), EngineError> { self.record("play_pause", "play_pause".to_string()) }

    fn seek(&self, position: f64) -> Result<(), EngineError> { self.record("seek", format!("seek {position}")) }

    fn next_chapter(&self) -> Result<(), EngineError> { self.record("next_chapter", "next_chapter".to_string()) }

    fn previous_chapter(&self) -> Result<(), EngineError> { self.record("previous_chapter", "previous_chapter".to_string()) }

    fn set_volume(&self, volume: f64) -> Result<(), EngineError> { self.record("set_volume", format!("volume {volume}")) }

    fn set_speed(&self, speed: f64) -> Result<(), EngineError> { self.record("set_speed", format!("speed {speed}")) }
}

#[derive(Default)]
pub struct RecordingNavigator {
    opened: Mutex<Vec<u64>>,
}

impl RecordingNavigator {
    /// Ids of the books whose detail page was opened
    pub fn opened(&self) -> Vec<u64> { self.opened.lock().unwrap().clone() }
}

impl BookNavigator for RecordingNavigator {
    fn open_book_detail(&self, book: &Book) { self.opened.lock().unwrap().push(book.id); }
}

/// Artwork keyed by book id; books without an entry have no cover
#[derive(Default)]
pub struct MapArtworkCache {
    covers: Mutex<HashMap<u64, String>>,
}

impl MapArtworkCache {
    pub fn insert(&self, book_id: u64, uri: impl Into<String>) { self.covers.lock().unwrap().insert(book_id, uri.into()); }
}

impl ArtworkCache for MapArtworkCache {
    fn cover(&self, book: &Book, scale_factor: u32, size: u32) -> Option<Artwork> {
        self.covers.lock().unwrap().get(&book.id).map(|uri| Artwork { uri: uri.clone(), size: size * scale_factor })
    }
}
