//! Error types for the Chromatium simulation.
//!
//! Every failure is raised synchronously at the point of violation,
//! during construction or a breeding call. Nothing is deferred, retried,
//! or silently clamped.

use thiserror::Error;

/// Main error type for simulation construction and breeding operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// A color channel outside the `[0, 255]` range.
    #[error("color channel `{channel}` out of range: {value} (expected 0..=255)")]
    ChannelOutOfRange { channel: &'static str, value: i64 },

    /// A probability, size, or distance parameter outside its documented domain.
    #[error("parameter `{name}` out of range: {value} (expected {expected})")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        expected: &'static str,
    },

    /// An unrecognized color-inheritance method name.
    #[error("unsupported color method `{0}` (expected one of `discrete`, `mean`)")]
    UnsupportedMethod(String),
}

impl SimError {
    /// Creates an invalid-parameter error for a value expected in `[0, 1]`.
    #[must_use]
    pub fn unit_interval(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter {
            name,
            value,
            expected: "a value in [0, 1]",
        }
    }
}

/// Result type alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_error_display() {
        let err = SimError::ChannelOutOfRange {
            channel: "red",
            value: 300,
        };
        assert_eq!(
            err.to_string(),
            "color channel `red` out of range: 300 (expected 0..=255)"
        );
    }

    #[test]
    fn test_unit_interval_helper() {
        let err = SimError::unit_interval("chance_death", -0.1);
        assert!(err.to_string().contains("chance_death"));
        assert!(err.to_string().contains("[0, 1]"));
    }

    #[test]
    fn test_unsupported_method_display() {
        let err = SimError::UnsupportedMethod("rgb_avg".to_string());
        assert!(err.to_string().contains("rgb_avg"));
    }
}
