use std::time::Duration;

pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_PORT: u16 = 8000;
pub const SERVER_SHUTDOWN_GRACE_PERIOD_MS: u64 = 100;

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-pro";
pub const DEFAULT_API_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const KEY_PREVIEW_CHARS: usize = 8;

pub const CONFIG_DIR_NAME: &str = ".repo-analyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const PROGRESS_CLONING: u8 = 10;
pub const PROGRESS_PARSING: u8 = 20;
pub const PROGRESS_ANALYZING: u8 = 30;
pub const PROGRESS_COMPLETION_STEP: u8 = 14;
pub const PROGRESS_DONE: u8 = 100;

pub fn sleep_duration_millis(milliseconds: u64) -> Duration {
    Duration::from_millis(milliseconds)
}

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}
