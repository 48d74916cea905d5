pub mod config_helper;
pub mod prompt_generator;
pub mod json_extractor;
