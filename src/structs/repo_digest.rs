use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

/// Lightweight textual view of a cloned repository, shared by every prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoDigest {
    /// Relative paths, `/`-separated, sorted lexicographically.
    pub file_tree: Vec<String>,
    pub file_contents: BTreeMap<String, String>,
    pub readme: String,
}

impl RepoDigest {
    pub fn file_tree_text(&self) -> String {
        self.file_tree.join("\n")
    }
}
