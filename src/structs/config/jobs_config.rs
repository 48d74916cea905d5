use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct JobsConfig {
    /// Terminal jobs older than this are evicted on the next create. Unset keeps
    /// every job for the life of the process.
    #[serde(default)]
    pub retention_minutes: Option<u64>,

    #[serde(default = "ConfigHelper::default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

impl Default for JobsConfig {
    fn default() -> Self {
        Self {
            retention_minutes: None,
            poll_interval_ms: ConfigHelper::default_poll_interval_ms(),
        }
    }
}
