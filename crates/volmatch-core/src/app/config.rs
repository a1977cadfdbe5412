//! MatchingConfig - 実行時設定
//!
//! 環境変数:
//! - `VOLMATCH_MIN_SCORE`: 結果に残す最低スコア（省略時 10）

use std::env;

use crate::matching::DEFAULT_MIN_SCORE;

pub const MIN_SCORE_ENV: &str = "VOLMATCH_MIN_SCORE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchingConfig {
    /// Candidates scoring below this are neither returned nor stored.
    pub min_score: u32,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} must be a non-negative integer, got {value:?}")]
    InvalidNumber { name: &'static str, value: String },
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

impl MatchingConfig {
    /// Load from the process environment; unset variables keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(value) = lookup(MIN_SCORE_ENV) {
            config.min_score =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidNumber {
                        name: MIN_SCORE_ENV,
                        value,
                    })?;
        }
        Ok(config)
    }
}
