//! Error types for gridswarm operations.
//!
//! Genome values and runtime state never produce errors; they are clamped.
//! Errors only come from building a swarm with an impossible grid, from
//! invalid configuration, or from the persistence layer.

use thiserror::Error;

/// Result type for gridswarm operations.
pub type Result<T> = std::result::Result<T, SwarmError>;

/// Errors that can occur during gridswarm operations.
#[derive(Debug, Clone, Error)]
pub enum SwarmError {
    /// Grid construction errors.
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),
    /// Raw genome parsing errors.
    #[error("Genome error: {0}")]
    Genome(#[from] GenomeError),
    /// Configuration errors.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    /// I/O errors (wrapped).
    #[error("I/O error: {0}")]
    Io(String),
    /// Serialization errors.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for SwarmError {
    fn from(e: std::io::Error) -> Self {
        SwarmError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for SwarmError {
    fn from(e: serde_json::Error) -> Self {
        SwarmError::Serialization(e.to_string())
    }
}

/// Grid-related errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// Width and height must both be positive.
    #[error("invalid grid dimensions {width}x{height} (both must be > 0)")]
    InvalidDimensions { width: i64, height: i64 },
}

/// Errors raised while turning a raw vector into a genome.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenomeError {
    #[error("expected {expected} genes, found {found}")]
    WrongLength { expected: usize, found: usize },
}

/// Configuration errors.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// Invalid value.
    #[error("invalid value for {field}: {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
    /// Out of range.
    #[error("{field} out of range: {value} (must be {min}-{max})")]
    OutOfRange {
        field: String,
        min: f64,
        max: f64,
        value: f64,
    },
}

// Convenience constructors
impl SwarmError {
    pub fn invalid_dimensions(width: i64, height: i64) -> Self {
        SwarmError::Grid(GridError::InvalidDimensions { width, height })
    }

    pub fn invalid_config(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SwarmError::Config(ConfigError::InvalidValue {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_error_converts_into_swarm_error() {
        let err: SwarmError = GridError::InvalidDimensions {
            width: 0,
            height: 3,
        }
        .into();
        assert!(matches!(err, SwarmError::Grid(_)));
        assert_eq!(
            err.to_string(),
            "Grid error: invalid grid dimensions 0x3 (both must be > 0)"
        );
    }

    #[test]
    fn io_error_is_wrapped_as_string() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: SwarmError = io.into();
        assert!(matches!(err, SwarmError::Io(ref msg) if msg == "gone"));
    }

    #[test]
    fn invalid_config_formats_field_and_reason() {
        let err = SwarmError::invalid_config("agent_count", "0", "need at least one agent");
        assert_eq!(
            err.to_string(),
            "Config error: invalid value for agent_count: 0 (need at least one agent)"
        );
    }
}
