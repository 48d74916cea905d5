use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use futures::{FutureExt, StreamExt};
use crate::config::constants::{PROGRESS_ANALYZING, PROGRESS_CLONING, PROGRESS_DONE, PROGRESS_PARSING};
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::job_mutation::JobMutation;
use crate::enums::job_status::JobStatus;
use crate::errors::RepoAnalyzerResult;
use crate::services::job_registry::JobRegistry;
use crate::services::named_task_set::panic_message;
use crate::services::task_dispatcher::TaskDispatcher;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::job_id::JobId;
use crate::traits::digest_producer::DigestProducer;

/// Drives a job from `queued` to `done` or `error`, writing every step
/// through the registry.
#[derive(Clone)]
pub struct JobLifecycleController {
    registry: Arc<JobRegistry>,
    producer: Arc<dyn DigestProducer>,
    dispatcher: Arc<TaskDispatcher>,
}

impl JobLifecycleController {
    pub fn new(registry: Arc<JobRegistry>, producer: Arc<dyn DigestProducer>, dispatcher: Arc<TaskDispatcher>) -> Self {
        Self {
            registry,
            producer,
            dispatcher,
        }
    }

    pub fn registry(&self) -> &Arc<JobRegistry> {
        &self.registry
    }

    /// Registers a job and starts it in the background. Returns once the job
    /// is visible as `queued`.
    pub fn submit(&self, repo_url: &str) -> JobId {
        let job_id = self.registry.create(repo_url);
        let controller = self.clone();
        let repo_url = repo_url.to_string();
        tokio::spawn(async move {
            controller.run(job_id, &repo_url).await;
        });
        job_id
    }

    /// Runs a registered job to a terminal state. Never panics or returns an
    /// error; failures land in the job's `error` field.
    pub async fn run(&self, job_id: JobId, repo_url: &str) {
        log::info!("🚀 Starting analysis for job {}", job_id);

        let outcome = AssertUnwindSafe(self.drive(job_id, repo_url)).catch_unwind().await;
        let failure = match outcome {
            Ok(Ok(())) => None,
            Ok(Err(e)) => Some(e.to_string()),
            Err(panic) => Some(format!("Job crashed: {}", panic_message(panic))),
        };

        match failure {
            None => log::info!("🎉 Job {} completed", job_id),
            Some(message) => {
                log::error!("❌ Job {} failed: {}", job_id, message);
                if let Err(e) = self.registry.update(&job_id, JobMutation::Fail(message)) {
                    log::warn!("⚠️ Could not record failure for job {}: {}", job_id, e);
                }
            }
        }
    }

    async fn drive(&self, job_id: JobId, repo_url: &str) -> RepoAnalyzerResult<()> {
        self.transition(&job_id, JobStatus::Cloning, PROGRESS_CLONING)?;
        let repo_path = self.producer.clone_repository(repo_url).await?;

        self.transition(&job_id, JobStatus::Parsing, PROGRESS_PARSING)?;
        let digest = Arc::new(self.producer.parse_repository(&repo_path).await?);

        self.transition(&job_id, JobStatus::Analyzing, PROGRESS_ANALYZING)?;
        let mut completions = Box::pin(self.dispatcher.dispatch_all(digest));
        while let Some((kind, result)) = completions.next().await {
            log::info!("📊 {} analysis finished for job {}", kind, job_id);
            self.registry.update(&job_id, JobMutation::Completion { kind, result })?;
        }

        self.transition(&job_id, JobStatus::Done, PROGRESS_DONE)
    }

    fn transition(&self, job_id: &JobId, status: JobStatus, progress: u8) -> RepoAnalyzerResult<()> {
        self.registry.update(job_id, JobMutation::Transition { status, progress })
    }

    /// Clone, parse and run a single kind inline, without registering a job.
    pub async fn analyze_inline(&self, repo_url: &str, kind: AnalysisKind) -> RepoAnalyzerResult<AnalysisResult> {
        let repo_path = self.producer.clone_repository(repo_url).await?;
        let digest = self.producer.parse_repository(&repo_path).await?;
        Ok(self.dispatcher.analyze_one(kind, &digest).await)
    }
}
