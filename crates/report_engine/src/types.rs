use std::fmt;

use report_core::{MountId, Summary};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    SummaryLoaded {
        mount_id: MountId,
        result: Result<Summary, LoadError>,
    },
}

/// Failure of a summary load. `Display` is the text shown to the operator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct LoadError {
    pub kind: LoadErrorKind,
    pub message: String,
}

impl LoadError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: LoadErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self {
            kind: LoadErrorKind::Parse,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// The document could not be retrieved.
    Transport,
    /// The document was retrieved but is not a valid summary.
    Parse,
}

impl fmt::Display for LoadErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErrorKind::Transport => write!(f, "transport error"),
            LoadErrorKind::Parse => write!(f, "parse error"),
        }
    }
}
