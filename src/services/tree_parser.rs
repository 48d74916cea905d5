use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use crate::helpers::prompt_generator::truncate_chars;
use crate::structs::config::digest_config::DigestConfig;
use crate::structs::repo_digest::RepoDigest;

const SKIPPED_DIRS: [&str; 1] = [".git"];

/// Walks a checked-out repository and builds its [`RepoDigest`].
#[derive(Debug, Clone)]
pub struct TreeParser {
    extensions: HashSet<String>,
    max_file_chars: usize,
    max_readme_chars: usize,
}

struct ReadmeCandidate {
    depth: usize,
    path: String,
    content: String,
}

#[derive(Default)]
struct WalkState {
    file_tree: Vec<String>,
    file_contents: BTreeMap<String, String>,
    readme: Option<ReadmeCandidate>,
}

impl TreeParser {
    pub fn new(extensions: &[String], max_file_chars: usize, max_readme_chars: usize) -> Self {
        Self {
            extensions: extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_lowercase())
                .collect(),
            max_file_chars,
            max_readme_chars,
        }
    }

    pub fn from_config(config: &DigestConfig) -> Self {
        Self::new(&config.relevant_extensions, config.max_file_chars, config.max_readme_chars)
    }

    pub fn parse(&self, repo_path: &Path) -> RepoAnalyzerResult<RepoDigest> {
        if !repo_path.is_dir() {
            return Err(RepoAnalyzerError::parse_failed(
                &repo_path.display().to_string(),
                "not a directory",
            ));
        }

        let mut state = WalkState::default();
        self.collect_files(repo_path, "", &mut state)
            .map_err(|e| RepoAnalyzerError::parse_failed(&repo_path.display().to_string(), &e.to_string()))?;

        state.file_tree.sort();
        log::info!("📁 Parsed {} files ({} with content)", state.file_tree.len(), state.file_contents.len());

        Ok(RepoDigest {
            file_tree: state.file_tree,
            file_contents: state.file_contents,
            readme: state.readme.map(|readme| readme.content).unwrap_or_default(),
        })
    }

    /// Only the root directory must be readable; unreadable subdirectories are skipped.
    fn collect_files(&self, dir: &Path, prefix: &str, state: &mut WalkState) -> std::io::Result<()> {
        for entry in fs::read_dir(dir)?.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            let relative_path = if prefix.is_empty() { name.clone() } else { format!("{}/{}", prefix, name) };

            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            if file_type.is_dir() {
                if SKIPPED_DIRS.contains(&name.as_str()) {
                    continue;
                }
                if let Err(e) = self.collect_files(&entry.path(), &relative_path, state) {
                    log::warn!("⚠️ Skipping unreadable directory {}: {}", relative_path, e);
                }
                continue;
            }

            state.file_tree.push(relative_path.clone());

            // Symlinks are listed but never followed.
            if !file_type.is_file() {
                continue;
            }

            let wants_content = self.is_relevant(&name);
            let is_readme = name.to_lowercase().starts_with("readme");
            if !wants_content && !is_readme {
                continue;
            }

            let content = match fs::read_to_string(entry.path()) {
                Ok(content) => content,
                Err(e) => {
                    log::debug!("Skipping content of {}: {}", relative_path, e);
                    continue;
                }
            };

            if wants_content {
                state.file_contents.insert(relative_path.clone(), truncate_chars(&content, self.max_file_chars).to_string());
            }

            if is_readme {
                let depth = relative_path.matches('/').count();
                let better = match &state.readme {
                    None => true,
                    Some(current) => (depth, relative_path.as_str()) < (current.depth, current.path.as_str()),
                };
                if better {
                    state.readme = Some(ReadmeCandidate {
                        depth,
                        path: relative_path,
                        content: truncate_chars(&content, self.max_readme_chars).to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    fn is_relevant(&self, file_name: &str) -> bool {
        Path::new(file_name)
            .extension()
            .map(|ext| self.extensions.contains(&ext.to_string_lossy().to_lowercase()))
            .unwrap_or(false)
    }
}
