use thiserror::Error;

/// Rejected construction-time configuration for the grid or the loading gate.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("loading gate needs at least one photo")]
    NoPhotos,
    #[error("grid spacing must be positive and finite, got {0}")]
    Spacing(f64),
    #[error("{name} must be finite and non-negative, got {value}")]
    Negative { name: &'static str, value: f64 },
    #[error("photo cycle interval must be non-zero")]
    ZeroInterval,
    #[error("fade delay ({fade_ms}ms) must be shorter than the cycle interval ({interval_ms}ms)")]
    FadeTooLong { fade_ms: u128, interval_ms: u128 },
}
