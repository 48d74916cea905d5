use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::errors::RepoAnalyzerError;

/// The five analysis categories every job fans out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnalysisKind {
    #[serde(rename = "architecture_flow")]
    Architecture,
    #[serde(rename = "mind_map")]
    MindMap,
    #[serde(rename = "code_quality")]
    CodeQuality,
    #[serde(rename = "security")]
    Security,
    #[serde(rename = "performance")]
    Performance,
}

impl AnalysisKind {
    pub const ALL: [AnalysisKind; 5] = [
        AnalysisKind::Architecture,
        AnalysisKind::MindMap,
        AnalysisKind::CodeQuality,
        AnalysisKind::Security,
        AnalysisKind::Performance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Architecture => "architecture_flow",
            Self::MindMap => "mind_map",
            Self::CodeQuality => "code_quality",
            Self::Security => "security",
            Self::Performance => "performance",
        }
    }

    /// Environment variable holding the credential dedicated to this kind.
    pub fn credential_env(&self) -> &'static str {
        match self {
            Self::Architecture => "GEMINI_API_KEY_ARCHITECTURE",
            Self::MindMap => "GEMINI_API_KEY_MINDMAP",
            Self::CodeQuality => "GEMINI_API_KEY_QUALITY",
            Self::Security => "GEMINI_API_KEY_SECURITY",
            Self::Performance => "GEMINI_API_KEY_PERFORMANCE",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Architecture => "architecture",
            Self::MindMap => "mind map",
            Self::CodeQuality => "code quality",
            Self::Security => "security",
            Self::Performance => "performance",
        }
    }
}

impl fmt::Display for AnalysisKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnalysisKind {
    type Err = RepoAnalyzerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| RepoAnalyzerError::UnknownKind { kind: s.to_string() })
    }
}
