use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{RepoAnalyzerError, RepoAnalyzerResult};
use crate::structs::config::config::Config;

pub struct ConfigManager;

impl ConfigManager {

    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// An explicit path must exist; otherwise the home config is used when present,
    /// falling back to built-in defaults.
    pub fn load(path: Option<&Path>) -> RepoAnalyzerResult<Config> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No config file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> RepoAnalyzerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| RepoAnalyzerError::config_error(
            &format!("cannot read '{}': {}", path.display(), e),
            None,
            Some("Run 'repo-analyzer init' to create a configuration file"),
        ))?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> RepoAnalyzerResult<Config> {
        Ok(toml::from_str(content)?)
    }

    pub fn create_sample_config(path: Option<&Path>) -> RepoAnalyzerResult<PathBuf> {
        let sample_config = r#"# RepoAnalyzer configuration
#
# API keys are read from the environment (or a .env file):
#   GEMINI_API_KEY                 shared default key
#   GEMINI_API_KEY_ARCHITECTURE    architecture_flow analysis
#   GEMINI_API_KEY_MINDMAP         mind_map analysis
#   GEMINI_API_KEY_QUALITY         code_quality analysis
#   GEMINI_API_KEY_SECURITY        security analysis
#   GEMINI_API_KEY_PERFORMANCE     performance analysis

[server]
host = "0.0.0.0"
port = 8000
allowed_origins = ["*"]

[analysis]
model = "gemini-2.5-pro"
api_base_url = "https://generativelanguage.googleapis.com/v1beta"
# Attempts per analysis; quota errors never retry
max_attempts = 2
retry_base_delay_ms = 1000
# "linear" (base x attempt) or "exponential"
backoff = "linear"
# Concurrent analysis calls per job
worker_pool_size = 5
request_timeout_secs = 120
temperature = 0.4
max_output_tokens = 8192

[digest]
cache_dir = "cache"
relevant_extensions = ["py", "js", "md"]
max_file_chars = 2000
max_readme_chars = 4000
prompt_contents_chars = 3000

[jobs]
# Evict finished jobs after this many minutes (unset keeps them forever)
# retention_minutes = 1440
poll_interval_ms = 500
"#;
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| RepoAnalyzerError::config_error(
                "cannot determine home directory",
                None,
                Some("Pass --config <path>"),
            ))?,
        };

        if config_file_path.exists() {
            return Err(RepoAnalyzerError::config_error(
                &format!("'{}' already exists", config_file_path.display()),
                None,
                Some("Remove it first or pass a different --config path"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, sample_config)?;
        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.analysis.worker_pool_size == 0 {
            errors.push("analysis.worker_pool_size must be at least 1".to_string());
        }

        if config.analysis.max_attempts == 0 {
            errors.push("analysis.max_attempts is 0: every analysis will fall back without calling the API".to_string());
        }

        if config.analysis.api_base_url.trim().is_empty() {
            errors.push("analysis.api_base_url must not be empty".to_string());
        }

        if config.digest.cache_dir.trim().is_empty() {
            errors.push("digest.cache_dir must not be empty".to_string());
        }

        if config.digest.relevant_extensions.iter().any(|ext| ext.starts_with('.')) {
            errors.push("digest.relevant_extensions should be listed without the leading dot".to_string());
        }

        if config.jobs.retention_minutes == Some(0) {
            errors.push("jobs.retention_minutes must be greater than 0 when set".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

}
