use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;
use crate::config::credentials::CredentialStore;
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::job_status::JobStatus;
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::analysis_client::RemoteAnalysisClient;
use crate::services::git_digest_producer::GitDigestProducer;
use crate::services::job_lifecycle::JobLifecycleController;
use crate::services::job_registry::JobRegistry;
use crate::services::retry_policy::RetryPolicy;
use crate::services::task_dispatcher::TaskDispatcher;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::api::api_status_response::ApiStatusResponse;
use crate::structs::api::create_job_response::CreateJobResponse;
use crate::structs::api::health_response::HealthResponse;
use crate::structs::api::job_status_response::JobStatusResponse;
use crate::structs::api::key_status::KeyStatus;
use crate::structs::api::summary_response::{Summary, SummaryResponse};
use crate::structs::config::config::Config;
use crate::structs::job::Job;
use crate::structs::job_id::JobId;

/// Synchronous request surface over the registry and lifecycle. Nothing here
/// mutates a job except `create_job`, which only registers one.
#[derive(Clone)]
pub struct JobFacade {
    lifecycle: JobLifecycleController,
    credentials: Arc<CredentialStore>,
    retention: Option<Duration>,
}

impl JobFacade {
    pub fn new(lifecycle: JobLifecycleController, credentials: Arc<CredentialStore>) -> Self {
        Self {
            lifecycle,
            credentials,
            retention: None,
        }
    }

    pub fn with_retention(mut self, retention: Option<Duration>) -> Self {
        self.retention = retention;
        self
    }

    /// Wires the production stack: Gemini transport, git-backed digests and a
    /// fresh registry.
    pub fn from_config(config: &Config, credentials: CredentialStore) -> RepoAnalyzerResult<Self> {
        let credentials = Arc::new(credentials);
        let transport = Arc::new(GeminiProvider::new(&config.analysis)?);
        let client = Arc::new(RemoteAnalysisClient::new(
            transport,
            Arc::clone(&credentials),
            RetryPolicy::from_config(&config.analysis),
        ));
        let lifecycle = JobLifecycleController::new(
            Arc::new(JobRegistry::new()),
            Arc::new(GitDigestProducer::from_config(&config.digest)),
            Arc::new(TaskDispatcher::from_config(client, config)),
        );
        let retention = config.jobs.retention_minutes.map(|minutes| Duration::from_secs(minutes.saturating_mul(60)));

        Ok(Self::new(lifecycle, credentials).with_retention(retention))
    }

    pub fn registry(&self) -> &Arc<JobRegistry> {
        self.lifecycle.registry()
    }

    pub fn health(&self) -> HealthResponse {
        HealthResponse {
            status: "healthy".to_string(),
            message: "RepoAnalyzer is running".to_string(),
        }
    }

    pub fn create_job(&self, repo_url: &str) -> RepoAnalyzerResult<CreateJobResponse> {
        let repo_url = Self::require_url(repo_url)?;

        if !self.credentials.any_configured() {
            return Err(RepoAnalyzerError::NoCredentialsConfigured);
        }

        if let Some(ttl) = self.retention {
            self.registry().evict_terminal_older_than(ttl);
        }

        let job_id = self.lifecycle.submit(repo_url);
        log::info!("📥 Queued job {} for {}", job_id, repo_url);

        Ok(CreateJobResponse {
            job_id,
            status: JobStatus::Queued,
        })
    }

    pub fn job_status(&self, job_id: &str) -> RepoAnalyzerResult<JobStatusResponse> {
        let job = self.find(job_id)?;
        Ok(JobStatusResponse::from(&job))
    }

    /// The full result map, or one kind's result when `analysis_type` is given.
    /// Only finished jobs have a summary.
    pub fn job_summary(&self, job_id: &str, analysis_type: Option<&str>) -> RepoAnalyzerResult<SummaryResponse> {
        let job = self.find(job_id)?;
        if job.status != JobStatus::Done {
            return Err(RepoAnalyzerError::JobNotReady {
                job_id: job_id.to_string(),
                status: job.status,
            });
        }

        let summary = match analysis_type.map(str::trim).filter(|name| !name.is_empty()) {
            None => Summary::All(job.results),
            Some(name) => {
                let kind: AnalysisKind = name.parse()?;
                Summary::Single(job.results.get(&kind).cloned().flatten())
            }
        };

        Ok(SummaryResponse { summary })
    }

    pub fn api_status(&self) -> ApiStatusResponse {
        let mut keys: BTreeMap<String, KeyStatus> = AnalysisKind::ALL
            .into_iter()
            .map(|kind| {
                let status = KeyStatus {
                    configured: self.credentials.has_dedicated(kind),
                    key_preview: self.credentials.preview(Some(kind)),
                };
                (kind.as_str().to_string(), status)
            })
            .collect();
        keys.insert("default".to_string(), KeyStatus {
            configured: self.credentials.has_default(),
            key_preview: self.credentials.preview(None),
        });

        let configured = self.credentials.any_configured();
        ApiStatusResponse {
            status: if configured { "configured" } else { "not_configured" }.to_string(),
            message: if configured {
                "API keys are configured".to_string()
            } else {
                "No API keys found. Please configure your .env file.".to_string()
            },
            keys,
            recommendation: if configured {
                "Ready to analyze repositories".to_string()
            } else {
                "Configure API keys in .env file".to_string()
            },
        }
    }

    /// Legacy synchronous path: architecture analysis only, no job record.
    pub async fn quick_analyze(&self, repo_url: &str) -> RepoAnalyzerResult<AnalysisResult> {
        let repo_url = Self::require_url(repo_url)?;
        self.lifecycle.analyze_inline(repo_url, AnalysisKind::Architecture).await
    }

    fn find(&self, job_id: &str) -> RepoAnalyzerResult<Job> {
        let id: JobId = job_id.trim().parse()?;
        self.registry()
            .get(&id)
            .ok_or_else(|| RepoAnalyzerError::unknown_job(job_id))
    }

    fn require_url(repo_url: &str) -> RepoAnalyzerResult<&str> {
        let repo_url = repo_url.trim();
        if repo_url.is_empty() {
            return Err(RepoAnalyzerError::validation_error("repo_url", repo_url, "must not be empty"));
        }
        Ok(repo_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use async_trait::async_trait;
    use serde_json::Map;
    use crate::enums::job_mutation::JobMutation;
    use crate::structs::repo_digest::RepoDigest;
    use crate::traits::digest_producer::DigestProducer;
    use crate::traits::llm_transport::MockLlmTransport;

    struct EmptyRepo;

    #[async_trait]
    impl DigestProducer for EmptyRepo {
        async fn clone_repository(&self, _repo_url: &str) -> RepoAnalyzerResult<PathBuf> {
            Ok(PathBuf::from("/tmp/empty"))
        }

        async fn parse_repository(&self, _repo_path: &Path) -> RepoAnalyzerResult<RepoDigest> {
            Ok(RepoDigest::default())
        }
    }

    fn facade(credentials: CredentialStore) -> JobFacade {
        let mut transport = MockLlmTransport::new();
        transport.expect_generate().returning(|_, _| Ok("{\"architecture_summary\": \"flat\"}".to_string()));
        let credentials = Arc::new(credentials);
        let client = RemoteAnalysisClient::new(Arc::new(transport), Arc::clone(&credentials), RetryPolicy::default());
        let lifecycle = JobLifecycleController::new(
            Arc::new(JobRegistry::new()),
            Arc::new(EmptyRepo),
            Arc::new(TaskDispatcher::new(Arc::new(client), 5, 3000)),
        );
        JobFacade::new(lifecycle, credentials)
    }

    fn finish(facade: &JobFacade) -> JobId {
        let registry = facade.registry();
        let id = registry.create("https://github.com/acme/widget");
        for (status, progress) in [(JobStatus::Cloning, 10), (JobStatus::Parsing, 20), (JobStatus::Analyzing, 30)] {
            registry.update(&id, JobMutation::Transition { status, progress }).unwrap();
        }
        for kind in AnalysisKind::ALL {
            registry.update(&id, JobMutation::Completion { kind, result: AnalysisResult::Success(Map::new()) }).unwrap();
        }
        registry.update(&id, JobMutation::Transition { status: JobStatus::Done, progress: 100 }).unwrap();
        id
    }

    #[tokio::test]
    async fn create_requires_some_credential() {
        let facade = facade(CredentialStore::new());
        let err = facade.create_job("https://github.com/acme/widget").unwrap_err();

        assert_eq!(err.status_code(), 400);
        assert!(facade.registry().is_empty());
    }

    #[tokio::test]
    async fn create_rejects_blank_urls() {
        let facade = facade(CredentialStore::new().with_default("key"));
        let err = facade.create_job("   ").unwrap_err();
        assert_eq!(err.status_code(), 422);
    }

    #[tokio::test]
    async fn create_returns_a_queued_job() {
        let facade = facade(CredentialStore::new().with_default("key"));
        let created = facade.create_job("https://github.com/acme/widget").unwrap();

        assert_eq!(created.status, JobStatus::Queued);
        assert!(facade.job_status(&created.job_id.to_string()).is_ok());
    }

    #[tokio::test]
    async fn status_of_unknown_or_malformed_ids_is_not_found() {
        let facade = facade(CredentialStore::new().with_default("key"));
        assert_eq!(facade.job_status(&JobId::new().to_string()).unwrap_err().status_code(), 404);
        assert_eq!(facade.job_status("not-a-uuid").unwrap_err().status_code(), 404);
    }

    #[tokio::test]
    async fn summary_waits_for_done() {
        let facade = facade(CredentialStore::new().with_default("key"));
        let id = facade.registry().create("https://github.com/acme/widget");

        let err = facade.job_summary(&id.to_string(), None).unwrap_err();
        assert_eq!(err.tag(), "JOB_NOT_READY");
    }

    #[tokio::test]
    async fn summary_returns_all_or_one_kind() {
        let facade = facade(CredentialStore::new().with_default("key"));
        let id = finish(&facade).to_string();

        match facade.job_summary(&id, None).unwrap().summary {
            Summary::All(results) => assert_eq!(results.len(), 5),
            Summary::Single(_) => panic!("expected every kind"),
        }
        match facade.job_summary(&id, Some("security")).unwrap().summary {
            Summary::Single(result) => assert!(result.is_some()),
            Summary::All(_) => panic!("expected one kind"),
        }
        assert_eq!(facade.job_summary(&id, Some("astrology")).unwrap_err().status_code(), 404);
    }

    #[tokio::test]
    async fn api_status_masks_keys() {
        let facade = facade(CredentialStore::new().with_credential(AnalysisKind::Security, "AIzaSySecretValue"));
        let status = facade.api_status();

        assert_eq!(status.status, "configured");
        assert_eq!(status.keys.len(), 6);
        assert_eq!(status.keys["security"].key_preview, "AIzaSySe...");
        assert!(!status.keys["default"].configured);
        assert_eq!(status.keys["mind_map"].key_preview, "Not set");
    }

    #[tokio::test]
    async fn quick_analyze_runs_architecture_only() {
        let facade = facade(CredentialStore::new().with_default("key"));
        let result = facade.quick_analyze("https://github.com/acme/widget").await.unwrap();

        assert_eq!(result.payload()["architecture_summary"], "flat");
        assert!(facade.registry().is_empty());
    }
}
