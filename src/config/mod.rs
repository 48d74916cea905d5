pub mod constants;
pub mod config_manager;
pub mod credentials;
