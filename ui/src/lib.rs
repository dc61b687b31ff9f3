//! Toolkit-agnostic controller for the bookplay transport bar.
//!
//! The host toolkit implements [`TransportView`] for its widgets and feeds widget signals
//! into [`MediaController::handle`]. The controller binds to the playback view-models and
//! keeps the view in sync until it is dropped.

pub mod controller;
pub mod error;
pub mod events;
pub mod shortcuts;
pub mod view;

pub use controller::MediaController;
pub use error::{ControllerError, ShortcutError};
pub use events::WidgetEvent;
pub use shortcuts::{Action, ActionRegistrar, ShortcutMap};
pub use view::{CoverImage, PlayIcon, SleepTimerPresenter, TransportView, FALLBACK_COVER_ICON, VOLUME_ICONS};

#[cfg(test)]
#[ctor::ctor]
fn init_tracing() { tracing_subscriber::fmt().with_max_level(tracing::Level::DEBUG).with_test_writer().init(); }
