//! Configuration and construction errors.

use thiserror::Error;

/// Everything that can stop a simulation from being built.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Width or height is zero, negative, NaN or infinite.
    #[error("invalid plane dimensions {width} x {height}: both must be finite and positive")]
    InvalidDimensions { width: f64, height: f64 },

    /// Neither random nor explicit bodies were requested.
    #[error("no bodies to simulate: body_count is 0 and no explicit bodies are listed")]
    NoBodies,

    /// An explicitly listed body is malformed.
    #[error("invalid body #{index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    /// A force term is malformed.
    #[error("invalid force `{name}`: {reason}")]
    InvalidForce { name: &'static str, reason: String },

    /// Scenario file could not be read.
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),

    /// Scenario file is not valid YAML for this schema.
    #[error("failed to parse scenario: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
