use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use dashmap::DashMap;
use tokio::process::Command;
use tokio::sync::Mutex;
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};

/// Shallow-clones repositories into a cache directory keyed by repository
/// name. A name that is already cached is reused as-is.
pub struct RepoCloner {
    cache_dir: PathBuf,
    git_binary: String,
    locks: DashMap<String, Arc<Mutex<()>>>,
}

impl RepoCloner {
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            git_binary: "git".to_string(),
            locks: DashMap::new(),
        }
    }

    pub fn with_git_binary(mut self, git_binary: &str) -> Self {
        self.git_binary = git_binary.to_string();
        self
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Last path segment of the URL without its extension, e.g.
    /// `https://github.com/acme/widget.git` → `widget`.
    pub fn repo_name(repo_url: &str) -> RepoAnalyzerResult<String> {
        let path = repo_url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim()
            .trim_end_matches('/');
        let segment = path.rsplit(['/', ':', '\\']).next().unwrap_or_default();

        let name = match segment.rfind('.') {
            Some(dot) if dot > 0 => &segment[..dot],
            _ => segment,
        };

        if name.is_empty() || name.chars().all(|c| c == '.') {
            return Err(RepoAnalyzerError::validation_error(
                "repo_url",
                repo_url,
                "must end in a repository name",
            ));
        }
        Ok(name.to_string())
    }

    pub async fn clone_repository(&self, repo_url: &str) -> RepoAnalyzerResult<PathBuf> {
        let name = Self::repo_name(repo_url)?;
        let repo_path = self.cache_dir.join(&name);

        // Clones of the same name wait for each other; the later one finds the cache filled.
        let lock = Arc::clone(self.locks.entry(name.clone()).or_default().value());
        let _guard = lock.lock().await;

        if tokio::fs::try_exists(&repo_path).await.unwrap_or(false) {
            log::info!("♻️ Reusing cached clone of {} at {}", name, repo_path.display());
            return Ok(repo_path);
        }

        tokio::fs::create_dir_all(&self.cache_dir).await?;
        log::info!("📥 Cloning {} into {}", repo_url, repo_path.display());

        let output = Command::new(&self.git_binary)
            .args(["clone", "--depth", "1", "--", repo_url])
            .arg(&repo_path)
            .output()
            .await
            .map_err(|e| RepoAnalyzerError::clone_failed(repo_url, &format!("failed to run {}: {}", self.git_binary, e)))?;

        if !output.status.success() {
            if let Err(e) = tokio::fs::remove_dir_all(&repo_path).await {
                if e.kind() != ErrorKind::NotFound {
                    log::warn!("⚠️ Could not remove partial clone at {}: {}", repo_path.display(), e);
                }
            }
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RepoAnalyzerError::clone_failed(repo_url, stderr.trim()));
        }

        log::info!("✅ Repository cloned successfully");
        Ok(repo_path)
    }
}
