use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BackoffStrategy {
    /// `base × attempt`
    #[default]
    Linear,
    /// `base × 2^(attempt - 1)`
    Exponential,
}
