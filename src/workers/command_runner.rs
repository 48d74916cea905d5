use std::path::PathBuf;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::config::constants::sleep_duration_millis;
use crate::config::credentials::CredentialStore;
use crate::enums::analysis_kind::AnalysisKind;
use crate::enums::commands::Commands;
use crate::enums::job_status::JobStatus;
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use crate::logger::animated_logger::AnimatedLogger;
use crate::server::api_server::ApiServer;
use crate::services::job_facade::JobFacade;
use crate::structs::config::config::Config;

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> RepoAnalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command().await,
            Commands::Serve { host, port } => self.serve_command(host, port).await,
            Commands::Analyze { repo_url, analysis_type } => self.analyze_command(&repo_url, analysis_type.as_deref()).await,
            Commands::ApiStatus => self.api_status_command().await,
            Commands::Validate => self.validate_command().await,
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    async fn init_command(&self) -> RepoAnalyzerResult<()> {
        log::info!("🚀 Initializing repo-analyzer configuration...");

        match ConfigManager::create_sample_config(self.config_path.as_deref()) {
            Ok(path) => {
                log::info!("✅ Configuration file created at {}", path.display());
                log::info!("🔑 Put GEMINI_API_KEY (or per-analysis keys) in your environment or a .env file.");
                log::info!("🔧 Run 'repo-analyzer validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    async fn serve_command(&self, host: Option<String>, port: Option<u16>) -> RepoAnalyzerResult<()> {
        let mut config = self.load_valid_config()?;
        if let Some(host) = host {
            config.server.host = host;
        }
        if let Some(port) = port {
            config.server.port = port;
        }

        let credentials = CredentialStore::from_env();
        if !credentials.any_configured() {
            log::warn!("⚠️ No API keys configured; job submissions will be rejected until one is set.");
        }

        let facade = JobFacade::from_config(&config, credentials)?;
        let mut server = ApiServer::new(facade, config.server.clone());
        server.start().await?;

        log::info!("⏹️ Press Ctrl+C to stop the server");
        tokio::signal::ctrl_c().await?;

        server.shutdown().await
    }

    async fn analyze_command(&self, repo_url: &str, analysis_type: Option<&str>) -> RepoAnalyzerResult<()> {
        if let Some(name) = analysis_type {
            name.parse::<AnalysisKind>()?;
        }

        let config = self.load_valid_config()?;
        let facade = JobFacade::from_config(&config, CredentialStore::from_env())?;

        log::info!("🔍 Analyzing repository: {}", repo_url);
        let job_id = facade.create_job(repo_url)?.job_id.to_string();

        let mut logger = AnimatedLogger::new(format!("{} (0%)", JobStatus::Queued));
        logger.start();

        let status = loop {
            let status = facade.job_status(&job_id)?;
            logger.set_message(format!("{} ({}%)", status.status, status.progress));
            if status.status.is_terminal() {
                break status;
            }
            tokio::time::sleep(sleep_duration_millis(config.jobs.poll_interval_ms)).await;
        };

        if status.status == JobStatus::Error {
            let message = status.error.unwrap_or_else(|| "unknown error".to_string());
            logger.error(&format!("Analysis failed: {}", message)).await;
            return Err(RepoAnalyzerError::system_error("repository analysis", &message));
        }

        logger.stop("Analysis complete").await;

        let summary = facade.job_summary(&job_id, analysis_type)?;
        println!("{}", serde_json::to_string_pretty(&summary.summary)?);
        Ok(())
    }

    async fn api_status_command(&self) -> RepoAnalyzerResult<()> {
        let config = self.load_config()?;
        let facade = JobFacade::from_config(&config, CredentialStore::from_env())?;
        let status = facade.api_status();

        log::info!("🔑 API key status: {}", status.message);
        for (name, key) in &status.keys {
            let marker = if key.configured { "✅" } else { "❌" };
            log::info!("   {} {}: {}", marker, name, key.key_preview);
        }
        log::info!("💡 {}", status.recommendation);

        Ok(())
    }

    async fn validate_command(&self) -> RepoAnalyzerResult<()> {
        log::info!("🔍 Validating repo-analyzer configuration...");

        let config = self.load_valid_config()?;
        log::info!("✅ Configuration is valid");
        log::info!(
            "📊 Model {} with {} worker(s), {} attempt(s) per analysis",
            config.analysis.model,
            config.analysis.worker_pool_size,
            config.analysis.max_attempts,
        );

        if !CredentialStore::from_env().any_configured() {
            log::warn!("⚠️ No API keys found in the environment. Run 'repo-analyzer api-status' for details.");
        }

        Ok(())
    }

    fn load_config(&self) -> RepoAnalyzerResult<Config> {
        match ConfigManager::load(self.config_path.as_deref()) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'repo-analyzer init' to create a configuration file.");
                Err(e)
            }
        }
    }

    fn load_valid_config(&self) -> RepoAnalyzerResult<Config> {
        let config = self.load_config()?;

        if let Err(issues) = ConfigManager::validate_config(&config) {
            log::error!("❌ Issues found:");
            for issue in &issues {
                log::error!("   - {}", issue);
            }
            return Err(RepoAnalyzerError::config_error(
                &format!("{} configuration problem(s)", issues.len()),
                None,
                Some("Fix the issues above and run 'repo-analyzer validate'"),
            ));
        }

        Ok(config)
    }
}
