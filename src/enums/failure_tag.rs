use std::fmt;
use serde::{Deserialize, Serialize};

/// Why an analysis fell back to a placeholder payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureTag {
    NoCredential,
    QuotaExceeded,
    ApiFailed,
}

impl FailureTag {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NoCredential => "NO_CREDENTIAL",
            Self::QuotaExceeded => "QUOTA_EXCEEDED",
            Self::ApiFailed => "API_FAILED",
        }
    }

    pub fn error_message(&self) -> &'static str {
        match self {
            Self::NoCredential => "No API key configured. Please set up your Gemini API keys in the .env file.",
            Self::QuotaExceeded => "API quota exceeded. Please check your Gemini API billing and quota limits.",
            Self::ApiFailed => "API analysis failed due to technical issues.",
        }
    }

    pub fn remediation(&self) -> &'static str {
        match self {
            Self::NoCredential => "Configure API keys in .env file",
            Self::QuotaExceeded => "Upgrade your Gemini API plan or wait for quota reset",
            Self::ApiFailed => "Check your internet connection and API key validity",
        }
    }
}

impl fmt::Display for FailureTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
