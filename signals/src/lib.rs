/*!
Observable property bindings for bookplay

A subject (typically a view-model) declares a closed set of properties and owns a
[`Binder`]. Observers (typically UI controllers) bind callbacks to those properties
and get a synchronous call every time the subject commits a new value.

# Design requirements:
- Property names are validated when binding, so typos fail at startup rather than silently never firing
- Callbacks take no arguments; observers re-read whatever state they need from the subject
- Each binding is a guard; dropping it unbinds, and a guard never keeps the subject alive
- Notification order is registration order, once per change, with no deduplication
- One panicking callback must not stop the others from running

# Basic usage

```rust
use bookplay_signals::*;
use std::sync::{Arc, RwLock};

properties! {
    pub enum DeckProperty for "Deck" {
        Volume => "volume",
    }
}

struct Deck {
    volume: RwLock<f64>,
    binder: Binder<DeckProperty>,
}

impl Subject for Deck {
    type Property = DeckProperty;
    fn binder(&self) -> &Binder<DeckProperty> { &self.binder }
}

impl Deck {
    fn set_volume(&self, volume: f64) {
        *self.volume.write().unwrap() = volume;
        self.binder.notify(DeckProperty::Volume);
    }
}

let deck = Arc::new(Deck { volume: RwLock::new(0.5), binder: Binder::new() });
let _guard = {
    let reader = deck.clone();
    deck.bind_to("volume", move || println!("volume: {}", reader.volume.read().unwrap())).unwrap()
};
assert!(deck.bind_to("volumme", || {}).is_err());

deck.set_volume(0.8);
// Should print:
// volume: 0.8
```
*/

mod binder;
mod binding_set;
mod context;
mod error;
mod listener;
mod property;
mod subject;

pub use binder::*;
pub use binding_set::*;
pub use context::MAX_NOTIFY_DEPTH;
pub use error::*;
pub use listener::*;
pub use property::*;
pub use subject::*;
