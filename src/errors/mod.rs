use thiserror::Error;
use crate::enums::job_status::JobStatus;

#[derive(Debug, Clone, Error)]
pub enum RepoAnalyzerError {
    // Configuration errors
    #[error("Configuration Error: {message}")]
    ConfigurationError {
        message: String,
        field: Option<String>,
        suggestion: Option<String>,
    },

    #[error("No API keys configured. Set GEMINI_API_KEY or one of the per-analysis GEMINI_API_KEY_* variables (see /api-status)")]
    NoCredentialsConfigured,

    // Repository errors
    #[error("Failed to clone '{repository}': {reason}")]
    CloneFailed {
        repository: String,
        reason: String,
    },

    #[error("Failed to parse repository at '{path}': {reason}")]
    ParseFailed {
        path: String,
        reason: String,
    },

    // Job errors
    #[error("Job not found: {job_id}")]
    UnknownJob {
        job_id: String,
    },

    #[error("Analysis type not found: {kind}")]
    UnknownKind {
        kind: String,
    },

    #[error("Summary not available: job {job_id} is {status}")]
    JobNotReady {
        job_id: String,
        status: JobStatus,
    },

    #[error("Job {job_id} cannot move from {from} to {to}")]
    InvalidTransition {
        job_id: String,
        from: JobStatus,
        to: JobStatus,
    },

    #[error("Job {job_id} is already {status}")]
    JobTerminal {
        job_id: String,
        status: JobStatus,
    },

    #[error("Job {job_id} cannot finish with {missing} analysis result(s) missing")]
    IncompleteResults {
        job_id: String,
        missing: usize,
    },

    // Validation errors
    #[error("Validation error for field '{field}': value '{value}' violates constraint '{constraint}'")]
    ValidationError {
        field: String,
        value: String,
        constraint: String,
    },

    // System errors
    #[error("System error during {operation}: {reason}")]
    SystemError {
        operation: String,
        reason: String,
    },
}

impl RepoAnalyzerError {
    pub fn config_error(message: &str, field: Option<&str>, suggestion: Option<&str>) -> Self {
        Self::ConfigurationError {
            message: message.to_string(),
            field: field.map(|s| s.to_string()),
            suggestion: suggestion.map(|s| s.to_string()),
        }
    }

    pub fn clone_failed(repository: &str, reason: &str) -> Self {
        Self::CloneFailed {
            repository: repository.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn parse_failed(path: &str, reason: &str) -> Self {
        Self::ParseFailed {
            path: path.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unknown_job(job_id: &str) -> Self {
        Self::UnknownJob {
            job_id: job_id.to_string(),
        }
    }

    pub fn validation_error(field: &str, value: &str, constraint: &str) -> Self {
        Self::ValidationError {
            field: field.to_string(),
            value: value.to_string(),
            constraint: constraint.to_string(),
        }
    }

    pub fn system_error(operation: &str, reason: &str) -> Self {
        Self::SystemError {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Stable machine-readable tag, surfaced in API error bodies.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::ConfigurationError { .. } => "CONFIGURATION_ERROR",
            Self::NoCredentialsConfigured => "NO_CREDENTIALS",
            Self::CloneFailed { .. } => "CLONE_FAILED",
            Self::ParseFailed { .. } => "PARSE_FAILED",
            Self::UnknownJob { .. } => "UNKNOWN_JOB",
            Self::UnknownKind { .. } => "UNKNOWN_KIND",
            Self::JobNotReady { .. } => "JOB_NOT_READY",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::JobTerminal { .. } => "JOB_TERMINAL",
            Self::IncompleteResults { .. } => "INCOMPLETE_RESULTS",
            Self::ValidationError { .. } => "VALIDATION_ERROR",
            Self::SystemError { .. } => "SYSTEM_ERROR",
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Self::NoCredentialsConfigured => 400,
            Self::UnknownJob { .. } | Self::UnknownKind { .. } | Self::JobNotReady { .. } => 404,
            Self::ValidationError { .. } => 422,
            Self::InvalidTransition { .. } | Self::JobTerminal { .. } => 409,
            Self::ConfigurationError { .. }
            | Self::CloneFailed { .. }
            | Self::ParseFailed { .. }
            | Self::IncompleteResults { .. }
            | Self::SystemError { .. } => 500,
        }
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

/// Result type alias for repo-analyzer operations
pub type RepoAnalyzerResult<T> = Result<T, RepoAnalyzerError>;

impl From<std::io::Error> for RepoAnalyzerError {
    fn from(error: std::io::Error) -> Self {
        Self::SystemError {
            operation: "I/O operation".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for RepoAnalyzerError {
    fn from(error: serde_json::Error) -> Self {
        Self::SystemError {
            operation: "JSON serialization".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<toml::de::Error> for RepoAnalyzerError {
    fn from(error: toml::de::Error) -> Self {
        Self::ConfigurationError {
            message: error.message().to_string(),
            field: None,
            suggestion: Some("Check the TOML syntax of your config file".to_string()),
        }
    }
}

impl From<reqwest::Error> for RepoAnalyzerError {
    fn from(error: reqwest::Error) -> Self {
        Self::SystemError {
            operation: "HTTP request".to_string(),
            reason: error.to_string(),
        }
    }
}

impl From<tokio::task::JoinError> for RepoAnalyzerError {
    fn from(error: tokio::task::JoinError) -> Self {
        Self::SystemError {
            operation: "background task".to_string(),
            reason: error.to_string(),
        }
    }
}
