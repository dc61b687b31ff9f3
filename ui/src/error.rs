use bookplay_signals::BindError;
use thiserror::Error;

use crate::shortcuts::Action;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShortcutError {
    #[error("no action named {0:?}")]
    UnknownAction(String),

    #[error("accelerator {accelerator:?} bound to both {first} and {second}")]
    Conflict { accelerator: String, first: Action, second: Action },
}

/// Error constructing a [`crate::MediaController`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ControllerError {
    #[error(transparent)]
    Bind(#[from] BindError),

    #[error(transparent)]
    Shortcut(#[from] ShortcutError),
}
