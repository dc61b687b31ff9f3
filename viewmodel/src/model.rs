use serde::{Deserialize, Serialize};

/// A chapter of an audiobook. Length is in seconds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chapter {
    pub name: String,
    pub length: f64,
}

/// The audiobook currently loaded in the player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: u64,
    pub name: String,
    pub author: String,
    pub current_chapter: Chapter,
}

impl Chapter {
    pub fn new(name: impl Into<String>, length: f64) -> Self { Self { name: name.into(), length } }
}

impl Book {
    pub fn new(id: u64, name: impl Into<String>, author: impl Into<String>, current_chapter: Chapter) -> Self {
        Self { id, name: name.into(), author: author.into(), current_chapter }
    }
}
