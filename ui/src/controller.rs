use std::sync::{Arc, Mutex, PoisonError, Weak};

use bookplay_signals::{BindingSet, Subject};
use bookplay_viewmodel::{ArtworkCache, Book, EngineError, PlaybackControlViewModel, PlaybackSpeedViewModel};
use tracing::{debug, warn};

use crate::error::ControllerError;
use crate::events::WidgetEvent;
use crate::shortcuts::{Action, ActionRegistrar, ShortcutMap};
use crate::view::{CoverImage, PlayIcon, SleepTimerPresenter, TransportView, FALLBACK_COVER_ICON, VOLUME_ICONS};

/// Binds the transport bar widgets to the playback view-models.
///
/// View-model changes are pushed to the [`TransportView`]; widget events and shortcuts are
/// forwarded to the view-models. Bindings are released when the controller is dropped, and
/// the bound callbacks only hold a weak reference, so a dropped controller is never called back.
#[derive(Clone)]
pub struct MediaController(Arc<Inner>);

struct Inner {
    view: Arc<dyn TransportView>,
    playback: Arc<PlaybackControlViewModel>,
    speed: Arc<PlaybackSpeedViewModel>,
    artwork: Arc<dyn ArtworkCache>,
    sleep_timer: Arc<dyn SleepTimerPresenter>,
    shortcuts: ShortcutMap,
    cover_size: u32,
    bindings: Mutex<BindingSet>,
}

type Handler = fn(&Inner);

// property name -> handler; names are validated by the view-model at bind time
const PLAYBACK_BINDINGS: [(&str, Handler); 6] = [
    ("book", Inner::on_book_changed),
    ("playing", Inner::on_play_changed),
    ("length", Inner::on_length_changed),
    ("position", Inner::on_position_changed),
    ("lock_ui", Inner::on_lock_ui_changed),
    ("volume", Inner::on_volume_changed),
];

impl MediaController {
    /// Shortcut overrides and the cover size come from the playback view-model's
    /// [`TransportConfig`](bookplay_viewmodel::TransportConfig).
    pub fn new(
        view: Arc<dyn TransportView>,
        playback: Arc<PlaybackControlViewModel>,
        speed: Arc<PlaybackSpeedViewModel>,
        artwork: Arc<dyn ArtworkCache>,
        sleep_timer: Arc<dyn SleepTimerPresenter>,
    ) -> Result<Self, ControllerError> {
        let config = playback.config();
        let shortcuts = ShortcutMap::with_overrides(&config.shortcuts)?;
        let cover_size = config.cover_size;
        let inner = Arc::new(Inner {
            view,
            playback,
            speed,
            artwork,
            sleep_timer,
            shortcuts,
            cover_size,
            bindings: Mutex::new(BindingSet::new()),
        });

        inner.view.set_volume_icons(&VOLUME_ICONS);

        let mut bindings = BindingSet::new();
        for (name, handler) in PLAYBACK_BINDINGS {
            let weak: Weak<Inner> = Arc::downgrade(&inner);
            bindings.push(inner.playback.bind_to(name, move || {
                if let Some(inner) = weak.upgrade() {
                    handler(&inner);
                }
            })?);
        }
        debug!(bindings = bindings.len(), "media controller bound");
        *inner.bindings.lock().unwrap_or_else(PoisonError::into_inner) = bindings;

        // the play icon is left as the view created it until the first change
        inner.on_book_changed();
        inner.on_lock_ui_changed();
        inner.on_length_changed();
        inner.on_position_changed();
        inner.on_volume_changed();

        Ok(Self(inner))
    }

    /// Forward a widget event to the view-models
    pub fn handle(&self, event: WidgetEvent) {
        let playback = &self.0.playback;
        let result = match event {
            WidgetEvent::PlayClicked => playback.play_pause(),
            WidgetEvent::PreviousClicked | WidgetEvent::SeekBarRewind => playback.rewind(),
            WidgetEvent::NextClicked | WidgetEvent::SeekBarForward => playback.forward(),
            WidgetEvent::VolumeChanged(volume) => playback.set_volume(volume),
            WidgetEvent::SeekPositionChanged(position) => playback.set_relative_position(position),
            WidgetEvent::CoverClicked => {
                playback.open_book_detail();
                Ok(())
            }
            WidgetEvent::TimerClicked => {
                self.0.sleep_timer.present();
                Ok(())
            }
        };
        report(event, result);
    }

    /// Run a shortcut action
    pub fn activate(&self, action: Action) {
        let Inner { playback, speed, .. } = &*self.0;
        let result = match action {
            Action::PlayPause => playback.play_pause(),
            Action::SeekRewind => playback.rewind(),
            Action::SeekForward => playback.forward(),
            Action::VolumeUp => playback.volume_up(),
            Action::VolumeDown => playback.volume_down(),
            Action::SpeedUp => speed.speed_up(),
            Action::SpeedDown => speed.speed_down(),
            Action::SpeedReset => speed.speed_reset(),
            Action::PrevChapter => playback.previous_chapter(),
            Action::NextChapter => playback.next_chapter(),
        };
        report(action, result);
    }

    /// Run the action registered under `name`. Returns false for unknown names.
    pub fn activate_named(&self, name: &str) -> bool {
        match Action::from_name(name) {
            Some(action) => {
                self.activate(action);
                true
            }
            None => false,
        }
    }

    /// Run the action bound to a key press. Returns false if no action is bound to it.
    pub fn handle_accelerator(&self, accelerator: &str) -> bool {
        match self.0.shortcuts.resolve(accelerator) {
            Some(action) => {
                self.activate(action);
                true
            }
            None => false,
        }
    }

    /// Create the transport actions and their accelerators on the host window
    pub fn register_shortcuts(&self, registrar: &dyn ActionRegistrar) { self.0.shortcuts.register(registrar); }

    pub fn shortcuts(&self) -> &ShortcutMap { &self.0.shortcuts }

    /// Number of live view-model bindings held by this controller
    pub fn binding_count(&self) -> usize { self.0.bindings.lock().unwrap_or_else(PoisonError::into_inner).len() }
}

fn report(source: impl std::fmt::Debug, result: Result<(), EngineError>) {
    if let Err(err) = result {
        warn!(?source, %err, "transport command failed");
    }
}

impl Inner {
    fn on_book_changed(&self) {
        let book = self.playback.book();
        if let Some(book) = &book {
            self.set_book(book);
        }
        self.view.set_media_info_visible(book.is_some());
    }

    fn set_book(&self, book: &Book) {
        let cover = match self.artwork.cover(book, self.view.scale_factor(), self.cover_size) {
            Some(artwork) => CoverImage::Artwork(artwork),
            None => CoverImage::Icon { name: FALLBACK_COVER_ICON, pixel_size: self.cover_size },
        };
        self.view.set_cover(cover);
        self.view.set_title(&book.name);
        self.view.set_subtitle(&book.current_chapter.name);
    }

    fn on_play_changed(&self) {
        let icon = if self.playback.playing() { PlayIcon::Pause } else { PlayIcon::Start };
        self.view.set_play_icon(icon);
    }

    fn on_position_changed(&self) {
        if let Some(position) = self.playback.relative_position() {
            self.view.set_seek_position(position);
        }
    }

    fn on_length_changed(&self) {
        let length = self.playback.length();
        if length > 0.0 {
            self.view.set_seek_length(length);
        }
    }

    fn on_lock_ui_changed(&self) { self.view.set_revealed(!self.playback.lock_ui()); }

    fn on_volume_changed(&self) { self.view.set_volume(self.playback.volume()); }
}
