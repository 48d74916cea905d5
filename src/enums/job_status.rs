use std::fmt;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Queued,
    Cloning,
    Parsing,
    Analyzing,
    Done,
    Error,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Done | Self::Error)
    }

    /// Forward edges of the job state machine. `Error` is reachable from every
    /// non-terminal state; nothing leaves a terminal state.
    pub fn can_transition_to(&self, next: JobStatus) -> bool {
        match (self, next) {
            (Self::Done | Self::Error, _) => false,
            (_, Self::Error) => true,
            (Self::Queued, Self::Cloning)
            | (Self::Cloning, Self::Parsing)
            | (Self::Parsing, Self::Analyzing)
            | (Self::Analyzing, Self::Done) => true,
            _ => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Queued => "queued",
            Self::Cloning => "cloning",
            Self::Parsing => "parsing",
            Self::Analyzing => "analyzing",
            Self::Done => "done",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
