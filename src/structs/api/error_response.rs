use serde::Serialize;
use crate::errors::RepoAnalyzerError;

#[derive(Serialize, Debug, Clone)]
pub struct ErrorResponse {
    pub detail: String,
    pub tag: String,
}

impl From<&RepoAnalyzerError> for ErrorResponse {
    fn from(error: &RepoAnalyzerError) -> Self {
        Self {
            detail: error.to_string(),
            tag: error.tag().to_string(),
        }
    }
}
