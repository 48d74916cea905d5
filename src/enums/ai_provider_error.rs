use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    #[error("Gemini API Error: {message}")]
    ApiError {
        status: Option<u16>,
        message: String,
    },
    #[error("Network Error: {0}")]
    NetworkError(String),
    #[error("Serialization Error: {0}")]
    SerializationError(String),
    #[error("Authentication Error: {0}")]
    AuthenticationError(String),
    #[error("Malformed Response: {0}")]
    MalformedResponse(String),
}

impl AiProviderError {
    pub fn api(status: u16, message: &str) -> Self {
        Self::ApiError {
            status: Some(status),
            message: format!("HTTP {}: {}", status, message),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => *status,
            _ => None,
        }
    }

    /// Rate/usage limit failures are signalled by HTTP 429 or by the provider
    /// mentioning "quota" anywhere in its error text.
    pub fn is_quota(&self) -> bool {
        if self.status() == Some(429) {
            return true;
        }
        let text = self.to_string();
        text.contains("429") || text.to_lowercase().contains("quota")
    }
}
