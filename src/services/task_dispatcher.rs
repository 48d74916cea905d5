use std::sync::Arc;
use futures::{Stream, StreamExt};
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::failure_tag::FailureTag;
use crate::helpers::prompt_generator::generate_prompt;
use crate::services::analysis_client::RemoteAnalysisClient;
use crate::services::fallback_table::FallbackTable;
use crate::services::named_task_set::NamedTaskSet;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::config::Config;
use crate::structs::repo_digest::RepoDigest;

/// Fans one digest out to every configured analysis kind.
pub struct TaskDispatcher {
    client: Arc<RemoteAnalysisClient>,
    kinds: Vec<AnalysisKind>,
    pool_width: usize,
    contents_chars: usize,
}

impl TaskDispatcher {
    pub fn new(client: Arc<RemoteAnalysisClient>, pool_width: usize, contents_chars: usize) -> Self {
        Self {
            client,
            kinds: AnalysisKind::ALL.to_vec(),
            pool_width,
            contents_chars,
        }
    }

    pub fn from_config(client: Arc<RemoteAnalysisClient>, config: &Config) -> Self {
        Self::new(client, config.analysis.worker_pool_size, config.digest.prompt_contents_chars)
    }

    pub fn with_kinds(mut self, kinds: &[AnalysisKind]) -> Self {
        self.kinds = kinds.to_vec();
        self
    }

    pub fn kinds(&self) -> &[AnalysisKind] {
        &self.kinds
    }

    pub fn client(&self) -> &RemoteAnalysisClient {
        &self.client
    }

    /// Starts every kind immediately and yields `(kind, result)` pairs as the
    /// calls finish. Each kind yields exactly once, panics included.
    pub fn dispatch_all(&self, digest: Arc<RepoDigest>) -> impl Stream<Item = (AnalysisKind, AnalysisResult)> + Send + 'static {
        log::info!("🚀 Dispatching {} analyses ({} at a time)", self.kinds.len(), self.pool_width);

        let mut tasks = NamedTaskSet::new(self.pool_width);
        for &kind in &self.kinds {
            let client = Arc::clone(&self.client);
            let digest = Arc::clone(&digest);
            let contents_chars = self.contents_chars;
            tasks.spawn(kind, async move {
                let prompt = generate_prompt(kind, &digest, contents_chars);
                client.analyze(kind, &prompt).await
            });
        }

        tasks.into_stream().map(|(kind, outcome)| match outcome {
            Ok(result) => (kind, result),
            Err(fault) => {
                log::error!("❌ {} analysis task crashed: {}", kind, fault);
                let detail = format!("Analysis failed: {}", fault);
                (kind, FallbackTable::result_for(kind, FailureTag::ApiFailed, &detail))
            }
        })
    }

    /// Single inline analysis, used by the synchronous quick-analysis path.
    pub async fn analyze_one(&self, kind: AnalysisKind, digest: &RepoDigest) -> AnalysisResult {
        let prompt = generate_prompt(kind, digest, self.contents_chars);
        self.client.analyze(kind, &prompt).await
    }
}
