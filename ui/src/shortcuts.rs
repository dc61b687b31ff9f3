use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::ShortcutError;

/// Keyboard-triggerable transport actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Action {
    PlayPause,
    SeekRewind,
    SeekForward,
    VolumeUp,
    VolumeDown,
    SpeedUp,
    SpeedDown,
    SpeedReset,
    PrevChapter,
    NextChapter,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::PlayPause,
        Action::SeekRewind,
        Action::SeekForward,
        Action::VolumeUp,
        Action::VolumeDown,
        Action::SpeedUp,
        Action::SpeedDown,
        Action::SpeedReset,
        Action::PrevChapter,
        Action::NextChapter,
    ];

    /// Action name as registered with the host window
    pub fn name(&self) -> &'static str {
        match self {
            Action::PlayPause => "play_pause",
            Action::SeekRewind => "seek_rewind",
            Action::SeekForward => "seek_forward",
            Action::VolumeUp => "volume_up",
            Action::VolumeDown => "volume_down",
            Action::SpeedUp => "speed_up",
            Action::SpeedDown => "speed_down",
            Action::SpeedReset => "speed_reset",
            Action::PrevChapter => "prev_chapter",
            Action::NextChapter => "next_chapter",
        }
    }

    pub fn from_name(name: &str) -> Option<Action> { Action::ALL.into_iter().find(|action| action.name() == name) }

    pub fn default_accelerators(&self) -> &'static [&'static str] {
        match self {
            Action::PlayPause => &["space"],
            Action::SeekRewind => &["Left"],
            Action::SeekForward => &["Right"],
            Action::VolumeUp => &["Up"],
            Action::VolumeDown => &["Down"],
            Action::SpeedUp => &["plus", "KP_Add", "<primary>Up"],
            Action::SpeedDown => &["minus", "KP_Subtract", "<primary>Down"],
            Action::SpeedReset => &["equal"],
            Action::PrevChapter => &["Page_Down", "<primary>Left"],
            Action::NextChapter => &["Page_Up", "<primary>Right"],
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str(self.name()) }
}

/// Host window that owns application actions and their accelerators
pub trait ActionRegistrar {
    fn create_action(&self, name: &str, accelerators: &[String]);
}

/// Accelerators for every action, defaults overlaid with configured overrides
#[derive(Debug, Clone, PartialEq)]
pub struct ShortcutMap {
    accelerators: BTreeMap<Action, Vec<String>>,
    by_accelerator: HashMap<String, Action>,
}

impl Default for ShortcutMap {
    fn default() -> Self {
        let accelerators = default_accelerators();
        let by_accelerator =
            accelerators.iter().flat_map(|(action, keys)| keys.iter().map(move |key| (key.clone(), *action))).collect();
        Self { accelerators, by_accelerator }
    }
}

fn default_accelerators() -> BTreeMap<Action, Vec<String>> {
    Action::ALL.into_iter().map(|action| (action, action.default_accelerators().iter().map(|key| key.to_string()).collect())).collect()
}

impl ShortcutMap {
    /// Replace the accelerators of each named action. An empty list disables the action's shortcuts.
    pub fn with_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Result<Self, ShortcutError> {
        let mut accelerators = default_accelerators();
        for (name, keys) in overrides {
            let action = Action::from_name(name).ok_or_else(|| ShortcutError::UnknownAction(name.clone()))?;
            debug!(%action, ?keys, "overriding shortcut");
            accelerators.insert(action, keys.clone());
        }

        let mut by_accelerator = HashMap::new();
        for (action, keys) in &accelerators {
            for key in keys {
                if let Some(existing) = by_accelerator.insert(key.clone(), *action) {
                    return Err(ShortcutError::Conflict { accelerator: key.clone(), first: existing, second: *action });
                }
            }
        }

        Ok(Self { accelerators, by_accelerator })
    }

    pub fn accelerators(&self, action: Action) -> &[String] { self.accelerators.get(&action).map(Vec::as_slice).unwrap_or(&[]) }

    /// The action bound to an accelerator string, e.g. `"<primary>Up"`
    pub fn resolve(&self, accelerator: &str) -> Option<Action> { self.by_accelerator.get(accelerator).copied() }

    /// Create every action on the host window, with its accelerators
    pub fn register(&self, registrar: &dyn ActionRegistrar) {
        for (action, keys) in &self.accelerators {
            registrar.create_action(action.name(), keys);
        }
    }
}
