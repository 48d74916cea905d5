use serde::{Deserialize, Serialize};
use crate::enums::backoff_strategy::BackoffStrategy;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AnalysisConfig {
    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    #[serde(default = "ConfigHelper::default_api_base_url")]
    pub api_base_url: String,

    #[serde(default = "ConfigHelper::default_max_attempts")]
    pub max_attempts: u32,

    #[serde(default = "ConfigHelper::default_retry_base_delay_ms")]
    pub retry_base_delay_ms: u64,

    #[serde(default)]
    pub backoff: BackoffStrategy,

    /// Concurrent analysis calls per job.
    #[serde(default = "ConfigHelper::default_worker_pool_size")]
    pub worker_pool_size: usize,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_temperature")]
    pub temperature: f64,

    #[serde(default = "ConfigHelper::default_max_output_tokens")]
    pub max_output_tokens: u32,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: ConfigHelper::default_model(),
            api_base_url: ConfigHelper::default_api_base_url(),
            max_attempts: ConfigHelper::default_max_attempts(),
            retry_base_delay_ms: ConfigHelper::default_retry_base_delay_ms(),
            backoff: BackoffStrategy::default(),
            worker_pool_size: ConfigHelper::default_worker_pool_size(),
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
            temperature: ConfigHelper::default_temperature(),
            max_output_tokens: ConfigHelper::default_max_output_tokens(),
        }
    }
}
