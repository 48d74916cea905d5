use std::path::{Path, PathBuf};
use async_trait::async_trait;
use crate::errors::RepoAnalyzerResult;
use crate::structs::repo_digest::RepoDigest;

/// Clones a repository and condenses it into a [`RepoDigest`].
#[async_trait]
pub trait DigestProducer: Send + Sync {
    async fn clone_repository(&self, repo_url: &str) -> RepoAnalyzerResult<PathBuf>;

    async fn parse_repository(&self, repo_path: &Path) -> RepoAnalyzerResult<RepoDigest>;
}
