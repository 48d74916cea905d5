use std::collections::HashMap;
use std::fmt;
use crate::config::constants::{DEFAULT_API_KEY_ENV, KEY_PREVIEW_CHARS};
use crate::enums::analysis_kind::AnalysisKind;
use crate::helpers::prompt_generator::truncate_chars;

/// One API key slot per analysis kind plus a shared default slot.
#[derive(Clone, Default)]
pub struct CredentialStore {
    per_kind: HashMap<AnalysisKind, String>,
    default: Option<String>,
}

impl CredentialStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let per_kind = AnalysisKind::ALL
            .into_iter()
            .filter_map(|kind| non_empty(lookup(kind.credential_env())).map(|key| (kind, key)))
            .collect();

        Self {
            per_kind,
            default: non_empty(lookup(DEFAULT_API_KEY_ENV)),
        }
    }

    pub fn with_default(mut self, key: &str) -> Self {
        self.default = non_empty(Some(key.to_string()));
        self
    }

    pub fn with_credential(mut self, kind: AnalysisKind, key: &str) -> Self {
        if let Some(key) = non_empty(Some(key.to_string())) {
            self.per_kind.insert(kind, key);
        }
        self
    }

    /// The kind's own key, else the default key.
    pub fn credential_for(&self, kind: AnalysisKind) -> Option<&str> {
        self.per_kind
            .get(&kind)
            .map(String::as_str)
            .or(self.default.as_deref())
    }

    pub fn has_dedicated(&self, kind: AnalysisKind) -> bool {
        self.per_kind.contains_key(&kind)
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }

    pub fn any_configured(&self) -> bool {
        self.default.is_some() || !self.per_kind.is_empty()
    }

    pub fn preview(&self, kind: Option<AnalysisKind>) -> String {
        let key = match kind {
            Some(kind) => self.per_kind.get(&kind).map(String::as_str),
            None => self.default.as_deref(),
        };
        match key {
            Some(key) => format!("{}...", truncate_chars(key, KEY_PREVIEW_CHARS)),
            None => "Not set".to_string(),
        }
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut kinds: Vec<_> = self.per_kind.keys().map(AnalysisKind::as_str).collect();
        kinds.sort_unstable();
        f.debug_struct("CredentialStore")
            .field("per_kind", &kinds)
            .field("default", &self.default.is_some())
            .finish()
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dedicated_key_wins_over_default() {
        let store = CredentialStore::new()
            .with_default("default-key")
            .with_credential(AnalysisKind::Security, "security-key");

        assert_eq!(store.credential_for(AnalysisKind::Security), Some("security-key"));
        assert_eq!(store.credential_for(AnalysisKind::MindMap), Some("default-key"));
    }

    #[test]
    fn empty_environment_values_count_as_absent() {
        let store = CredentialStore::from_lookup(|name| match name {
            "GEMINI_API_KEY" => Some("   ".to_string()),
            "GEMINI_API_KEY_QUALITY" => Some("quality-key".to_string()),
            _ => None,
        });

        assert!(!store.has_default());
        assert!(store.any_configured());
        assert_eq!(store.credential_for(AnalysisKind::CodeQuality), Some("quality-key"));
        assert_eq!(store.credential_for(AnalysisKind::Architecture), None);
    }

    #[test]
    fn previews_and_debug_never_expose_full_keys() {
        let store = CredentialStore::new().with_default("AIzaSyVerySecretValue");
        assert_eq!(store.preview(None), "AIzaSyVe...");
        assert_eq!(store.preview(Some(AnalysisKind::Security)), "Not set");
        assert!(!format!("{:?}", store).contains("Secret"));
    }
}
