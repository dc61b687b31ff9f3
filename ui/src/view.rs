use bookplay_viewmodel::Artwork;

/// Icon shown on the cover slot when the book has no artwork
pub const FALLBACK_COVER_ICON: &str = "book-open-variant-symbolic";

/// Volume button icons in the order scale buttons expect: muted, high, then the
/// remaining levels from low to high
pub const VOLUME_ICONS: [&str; 4] =
    ["audio-volume-muted-symbolic", "audio-volume-high-symbolic", "audio-volume-low-symbolic", "audio-volume-medium-symbolic"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    /// Shown while playing
    Pause,
    /// Shown while paused or stopped
    Start,
}

impl PlayIcon {
    pub fn icon_name(&self) -> &'static str {
        match self {
            PlayIcon::Pause => "media-playback-pause-symbolic",
            PlayIcon::Start => "media-playback-start-symbolic",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverImage {
    Artwork(Artwork),
    Icon { name: &'static str, pixel_size: u32 },
}

/// The transport bar widgets, implemented by the host toolkit.
///
/// Called synchronously from view-model notifications, on whichever thread
/// changed the view-model.
pub trait TransportView: Send + Sync {
    fn set_play_icon(&self, icon: PlayIcon);

    /// Seek bar position in seconds within the chapter
    fn set_seek_position(&self, position: f64);

    /// Seek bar length in seconds
    fn set_seek_length(&self, length: f64);

    fn set_volume(&self, volume: f64);

    fn set_volume_icons(&self, icons: &[&'static str]);

    /// Title label text and tooltip
    fn set_title(&self, title: &str);

    /// Subtitle label text and tooltip
    fn set_subtitle(&self, subtitle: &str);

    fn set_cover(&self, cover: CoverImage);

    /// Show or hide title, subtitle, cover and seek bar together
    fn set_media_info_visible(&self, visible: bool);

    /// Reveal or hide the whole transport bar
    fn set_revealed(&self, revealed: bool);

    /// Device pixels per logical pixel
    fn scale_factor(&self) -> u32 { 1 }
}

/// Presents the sleep timer popover
pub trait SleepTimerPresenter: Send + Sync {
    fn present(&self);
}
