use std::path::{Path, PathBuf};
use async_trait::async_trait;
use crate::errors::RepoAnalyzerResult;
use crate::services::repo_cloner::RepoCloner;
use crate::services::tree_parser::TreeParser;
use crate::structs::config::digest_config::DigestConfig;
use crate::structs::repo_digest::RepoDigest;
use crate::traits::digest_producer::DigestProducer;

/// [`DigestProducer`] backed by `git clone` and a filesystem walk.
pub struct GitDigestProducer {
    cloner: RepoCloner,
    parser: TreeParser,
}

impl GitDigestProducer {
    pub fn new(cloner: RepoCloner, parser: TreeParser) -> Self {
        Self { cloner, parser }
    }

    pub fn from_config(config: &DigestConfig) -> Self {
        Self::new(RepoCloner::new(&config.cache_dir), TreeParser::from_config(config))
    }
}

#[async_trait]
impl DigestProducer for GitDigestProducer {
    async fn clone_repository(&self, repo_url: &str) -> RepoAnalyzerResult<PathBuf> {
        self.cloner.clone_repository(repo_url).await
    }

    async fn parse_repository(&self, repo_path: &Path) -> RepoAnalyzerResult<RepoDigest> {
        let parser = self.parser.clone();
        let repo_path = repo_path.to_path_buf();
        tokio::task::spawn_blocking(move || parser.parse(&repo_path)).await?
    }
}
