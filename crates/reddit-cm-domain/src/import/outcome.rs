use reddit_cm_core::PlatformError;
use serde::Serialize;
use std::fmt;

pub const MISSING_NAME: &str = "missing name";

/// Why a community could not be joined.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum FailureReason {
    PrivateOrRestricted,
    NotFound,
    Banned,
    Unknown(String),
}

impl FailureReason {
    /// Maps a platform error onto a reason.
    ///
    /// Typed refusals map directly. Anything else is classified from its
    /// message, case-insensitively, checking in order for
    /// "private"/"forbidden", then "not found"/"404", then "banned".
    pub fn classify(error: &PlatformError) -> Self {
        match error {
            PlatformError::Forbidden(_) => Self::PrivateOrRestricted,
            PlatformError::NotFound(_) => Self::NotFound,
            PlatformError::Banned(_) => Self::Banned,
            other => Self::from_message(&other.to_string()),
        }
    }

    pub fn from_message(message: &str) -> Self {
        let lowered = message.to_lowercase();
        if lowered.contains("private") || lowered.contains("forbidden") {
            Self::PrivateOrRestricted
        } else if lowered.contains("not found") || lowered.contains("404") {
            Self::NotFound
        } else if lowered.contains("banned") {
            Self::Banned
        } else {
            Self::Unknown(message.to_string())
        }
    }
}

impl fmt::Display for FailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PrivateOrRestricted => write!(f, "Private/Restricted community"),
            Self::NotFound => write!(f, "Community not found"),
            Self::Banned => write!(f, "Banned from community"),
            Self::Unknown(message) => write!(f, "Unknown error: {}", message),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", content = "reason", rename_all = "snake_case")]
pub enum ImportOutcome {
    /// Joined, or would have been joined in a dry run.
    Joined,
    AlreadyJoined,
    Failed(FailureReason),
    Skipped(String),
}

impl ImportOutcome {
    pub fn missing_name() -> Self {
        Self::Skipped(MISSING_NAME.to_string())
    }
}

/// Outcome for one input record, in input position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordOutcome {
    pub index: usize,
    pub name: Option<String>,
    pub outcome: ImportOutcome,
}
