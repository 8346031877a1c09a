use thiserror::Error;

/// Rejections raised by [`RotationConfig::validate`](crate::engine::config::RotationConfig::validate).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Squad size must be at least 1")]
    EmptySquad,

    #[error("Substitution interval must be at least 1 minute")]
    ZeroInterval,

    #[error("Policy sample size must be at least 1")]
    ZeroSampleSize,

    #[error("Policy gap '{name}' must be non-negative, found {value}")]
    NegativeGap { name: &'static str, value: f64 },

    #[error("Factor '{name}' must be finite and non-negative, found {value}")]
    InvalidFactor { name: &'static str, value: f64 },

    #[error("Invalid config document: {0}")]
    Parse(String),
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Parse(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
