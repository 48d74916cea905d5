use serde::{Deserialize, Serialize};
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DigestConfig {
    #[serde(default = "ConfigHelper::default_cache_dir")]
    pub cache_dir: String,

    /// Extensions (without the dot) whose contents are captured.
    #[serde(default = "ConfigHelper::default_relevant_extensions")]
    pub relevant_extensions: Vec<String>,

    #[serde(default = "ConfigHelper::default_max_file_chars")]
    pub max_file_chars: usize,

    #[serde(default = "ConfigHelper::default_max_readme_chars")]
    pub max_readme_chars: usize,

    /// Cap on the serialized file contents embedded in each prompt.
    #[serde(default = "ConfigHelper::default_prompt_contents_chars")]
    pub prompt_contents_chars: usize,
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            cache_dir: ConfigHelper::default_cache_dir(),
            relevant_extensions: ConfigHelper::default_relevant_extensions(),
            max_file_chars: ConfigHelper::default_max_file_chars(),
            max_readme_chars: ConfigHelper::default_max_readme_chars(),
            prompt_contents_chars: ConfigHelper::default_prompt_contents_chars(),
        }
    }
}
