/// Signals emitted by the transport bar widgets
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WidgetEvent {
    PlayClicked,
    PreviousClicked,
    NextClicked,
    /// The volume button moved to this value
    VolumeChanged(f64),
    /// The seek bar was dragged to this position in seconds
    SeekPositionChanged(f64),
    /// The seek bar's own rewind gesture
    SeekBarRewind,
    /// The seek bar's own forward gesture
    SeekBarForward,
    CoverClicked,
    TimerClicked,
}
