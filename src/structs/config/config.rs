use serde::{Deserialize, Serialize};
use crate::structs::config::analysis_config::AnalysisConfig;
use crate::structs::config::digest_config::DigestConfig;
use crate::structs::config::jobs_config::JobsConfig;
use crate::structs::config::server_config::ServerConfig;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub digest: DigestConfig,

    #[serde(default)]
    pub jobs: JobsConfig,
}
