use tracing::Level;

use bookplay::ui::{ActionRegistrar, CoverImage, PlayIcon, SleepTimerPresenter, TransportView};
use bookplay::viewmodel::testing::{FakeEngine, MapArtworkCache, RecordingNavigator};
use bookplay::{ControllerError, MediaController, PlaybackControlViewModel, PlaybackSpeedViewModel, TransportConfig};
use std::sync::{Arc, Mutex};

// Initialize tracing for tests
#[ctor::ctor]
fn init_tracing() { tracing_subscriber::fmt().with_max_level(Level::INFO).with_test_writer().init(); }

/// Transport bar that records every widget update as a short string, e.g. `"volume 0.5"`
#[derive(Default)]
pub struct RecordingView(Mutex<Vec<String>>);

#[allow(unused)]
impl RecordingView {
    /// Drain the updates recorded so far
    pub fn take(&self) -> Vec<String> { std::mem::take(&mut *self.0.lock().unwrap()) }

    fn push(&self, entry: String) { self.0.lock().unwrap().push(entry); }
}

impl TransportView for RecordingView {
    fn set_play_icon(&self, icon: PlayIcon) { self.push(format!("play_icon {icon:?}")); }
    fn set_seek_position(&self, position: f64) { self.push(format!("seek_position {position}")); }
    fn set_seek_length(&self, length: f64) { self.push(format!("seek_length {length}")); }
    fn set_volume(&self, volume: f64) { self.push(format!("volume {volume}")); }
    fn set_volume_icons(&self, _icons: &[&'static str]) {}
    fn set_title(&self, title: &str) { self.push(format!("title {title}")); }
    fn set_subtitle(&self, subtitle: &str) { self.push(format!("subtitle {subtitle}")); }
    fn set_cover(&self, cover: CoverImage) {
        match cover {
            CoverImage::Artwork(artwork) => self.push(format!("cover {}", artwork.uri)),
            CoverImage::Icon { name, .. } => self.push(format!("cover {name}")),
        }
    }
    fn set_media_info_visible(&self, visible: bool) { self.push(format!("media_info {visible}")); }
    fn set_revealed(&self, revealed: bool) { self.push(format!("revealed {revealed}")); }
}

#[derive(Default)]
pub struct CountingTimer(Mutex<usize>);

#[allow(unused)]
impl CountingTimer {
    pub fn presented(&self) -> usize { *self.0.lock().unwrap() }
}

impl SleepTimerPresenter for CountingTimer {
    fn present(&self) { *self.0.lock().unwrap() += 1; }
}

/// Host window recording the actions created on it
#[derive(Default)]
pub struct RecordingWindow(pub Mutex<Vec<(String, Vec<String>)>>);

impl ActionRegistrar for RecordingWindow {
    fn create_action(&self, name: &str, accelerators: &[String]) { self.0.lock().unwrap().push((name.to_string(), accelerators.to_vec())); }
}

/// Everything a media controller needs, backed by in-memory fakes
#[allow(unused)]
pub struct Player {
    pub config: TransportConfig,
    pub view: Arc<RecordingView>,
    pub engine: Arc<FakeEngine>,
    pub navigator: Arc<RecordingNavigator>,
    pub artwork: Arc<MapArtworkCache>,
    pub timer: Arc<CountingTimer>,
    pub playback: Arc<PlaybackControlViewModel>,
    pub speed: Arc<PlaybackSpeedViewModel>,
}

#[allow(unused)]
impl Player {
    pub fn new(config: TransportConfig) -> Self {
        let engine = Arc::new(FakeEngine::default());
        let navigator = Arc::new(RecordingNavigator::default());
        Self {
            view: Arc::new(RecordingView::default()),
            playback: Arc::new(PlaybackControlViewModel::new(engine.clone(), navigator.clone(), config.clone()).unwrap()),
            speed: Arc::new(PlaybackSpeedViewModel::new(engine.clone(), config.speed.clone()).unwrap()),
            artwork: Arc::new(MapArtworkCache::default()),
            timer: Arc::new(CountingTimer::default()),
            engine,
            navigator,
            config,
        }
    }

    pub fn controller(&self) -> Result<MediaController, ControllerError> {
        MediaController::new(
            self.view.clone(),
            self.playback.clone(),
            self.speed.clone(),
            self.artwork.clone(),
            self.timer.clone(),
        )
    }
}
