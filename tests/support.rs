use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use async_trait::async_trait;
use repo_analyzer::config::credentials::CredentialStore;
use repo_analyzer::enums::ai_provider_error::AiProviderError;
use repo_analyzer::enums::analysis_kind::AnalysisKind;
use repo_analyzer::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use repo_analyzer::services::analysis_client::RemoteAnalysisClient;
use repo_analyzer::services::job_facade::JobFacade;
use repo_analyzer::services::job_lifecycle::JobLifecycleController;
use repo_analyzer::services::job_registry::JobRegistry;
use repo_analyzer::services::retry_policy::RetryPolicy;
use repo_analyzer::services::task_dispatcher::TaskDispatcher;
use repo_analyzer::structs::repo_digest::RepoDigest;
use repo_analyzer::traits::digest_producer::DigestProducer;
use repo_analyzer::traits::llm_transport::LlmTransport;

pub const REPO_URL: &str = "https://github.com/acme/widget.git";

pub enum RepoBehavior {
    Ready,
    CloneFails(&'static str),
    ParseFails(&'static str),
}

/// Stands in for git and the filesystem walk.
pub struct FakeRepo {
    behavior: RepoBehavior,
}

impl FakeRepo {
    pub fn new(behavior: RepoBehavior) -> Self {
        Self { behavior }
    }

    pub fn digest() -> RepoDigest {
        RepoDigest {
            file_tree: vec!["README.md".to_string(), "src/main.rs".to_string()],
            file_contents: BTreeMap::from([("src/main.rs".to_string(), "fn main() {}".to_string())]),
            readme: "# widget".to_string(),
        }
    }
}

#[async_trait]
impl DigestProducer for FakeRepo {
    async fn clone_repository(&self, repo_url: &str) -> RepoAnalyzerResult<PathBuf> {
        match self.behavior {
            RepoBehavior::CloneFails(reason) => Err(RepoAnalyzerError::clone_failed(repo_url, reason)),
            _ => Ok(PathBuf::from("/tmp/repos/widget")),
        }
    }

    async fn parse_repository(&self, _repo_path: &Path) -> RepoAnalyzerResult<RepoDigest> {
        match self.behavior {
            RepoBehavior::ParseFails(reason) => Err(RepoAnalyzerError::system_error("parse repository", reason)),
            _ => Ok(Self::digest()),
        }
    }
}

#[derive(Clone, Copy)]
pub enum Reply {
    Succeed,
    Quota,
    ServerError,
    Panic,
}

/// Answers each prompt according to the kind it was built for and counts
/// calls per kind.
pub struct ScriptedTransport {
    replies: HashMap<AnalysisKind, Reply>,
    calls: HashMap<AnalysisKind, AtomicUsize>,
    latency: Duration,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            replies: HashMap::new(),
            calls: AnalysisKind::ALL.into_iter().map(|kind| (kind, AtomicUsize::new(0))).collect(),
            latency: Duration::ZERO,
        }
    }

    pub fn reply(mut self, kind: AnalysisKind, reply: Reply) -> Self {
        self.replies.insert(kind, reply);
        self
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    pub fn calls(&self, kind: AnalysisKind) -> usize {
        self.calls[&kind].load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        AnalysisKind::ALL.into_iter().map(|kind| self.calls(kind)).sum()
    }

    pub fn payload_key(kind: AnalysisKind) -> &'static str {
        match kind {
            AnalysisKind::Architecture => "architecture_summary",
            AnalysisKind::MindMap => "mind_map_overview",
            AnalysisKind::CodeQuality => "quality_overview",
            AnalysisKind::Security => "security_overview",
            AnalysisKind::Performance => "performance_overview",
        }
    }

    fn kind_of(prompt: &str) -> AnalysisKind {
        AnalysisKind::ALL
            .into_iter()
            .find(|kind| prompt.contains(&format!("\"{}\"", Self::payload_key(*kind))))
            .unwrap_or_else(|| panic!("unrecognised prompt: {prompt}"))
    }
}

#[async_trait]
impl LlmTransport for ScriptedTransport {
    async fn generate(&self, _credential: &str, prompt: &str) -> Result<String, AiProviderError> {
        let kind = Self::kind_of(prompt);
        self.calls[&kind].fetch_add(1, Ordering::SeqCst);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        match self.replies.get(&kind).copied().unwrap_or(Reply::Succeed) {
            Reply::Succeed => Ok(format!(
                "```json\n{{\"{}\": \"{} looks fine\"}}\n```",
                Self::payload_key(kind),
                kind
            )),
            Reply::Quota => Err(AiProviderError::api(429, "Resource has been exhausted (e.g. check quota).")),
            Reply::ServerError => Err(AiProviderError::api(500, "internal error")),
            Reply::Panic => panic!("transport exploded for {kind}"),
        }
    }
}

pub fn fast_retries() -> RetryPolicy {
    RetryPolicy::default()
        .with_max_attempts(3)
        .with_base_delay(Duration::from_millis(1))
}

pub struct Harness {
    pub facade: JobFacade,
    pub registry: Arc<JobRegistry>,
    pub transport: Arc<ScriptedTransport>,
}

impl Harness {
    pub fn new(repo: FakeRepo, transport: ScriptedTransport, credentials: CredentialStore) -> Self {
        let transport = Arc::new(transport);
        let credentials = Arc::new(credentials);
        let client = RemoteAnalysisClient::new(
            Arc::clone(&transport) as Arc<dyn LlmTransport>,
            Arc::clone(&credentials),
            fast_retries(),
        );
        let registry = Arc::new(JobRegistry::new());
        let lifecycle = JobLifecycleController::new(
            Arc::clone(&registry),
            Arc::new(repo),
            Arc::new(TaskDispatcher::new(Arc::new(client), 5, 3000)),
        );

        Self {
            facade: JobFacade::new(lifecycle, credentials),
            registry,
            transport,
        }
    }

    pub fn healthy() -> Self {
        Self::new(
            FakeRepo::new(RepoBehavior::Ready),
            ScriptedTransport::new(),
            CredentialStore::new().with_default("AIzaSyTestKey"),
        )
    }

    /// Polls the public status surface until the job is finished.
    pub async fn wait_for_terminal(&self, job_id: &str) {
        let wait = async {
            loop {
                let status = self.facade.job_status(job_id).expect("job should exist");
                if status.status.is_terminal() {
                    return;
                }
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        };
        tokio::time::timeout(Duration::from_secs(10), wait)
            .await
            .expect("job did not finish in time");
    }
}
