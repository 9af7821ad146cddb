//! Error types for the generator crate.
//!
//! This module provides structured error types for pattern parsing,
//! shape classification and tray layout.

use thiserror::Error;

/// Errors that can occur while generating trays and covers.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// The pattern text could not be parsed.
    #[error("Pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// The last row of a shape is further from the left edge than the right.
    #[error("Shape '{shape}' has an unsupported bottom row: left offset {offset} exceeds right offset {right_offset}")]
    UnsupportedHoldPosition {
        shape: String,
        offset: u32,
        right_offset: u32,
    },

    /// The shapes of a group do not fit the tray with enough clearance.
    #[error("Shape spacing is too small: {spacing:.3} mm (minimum {minimum} mm)")]
    InfeasibleSpacing { spacing: f64, minimum: f64 },

    /// A tray was requested for a group with no shapes.
    #[error("Pattern group is empty")]
    EmptyGroup,

    /// Invalid parameters were provided to a generator.
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Errors related to ASCII pattern parsing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern text has no name line.
    #[error("Pattern text is empty")]
    Empty,

    /// The pattern has a name but no grid rows.
    #[error("Pattern '{name}' has no rows")]
    MissingRows { name: String },

    /// A grid row is not of the form `.*X+.*`.
    #[error("Malformed row {row} '{line}': {reason}")]
    MalformedRow {
        row: usize,
        line: String,
        reason: String,
    },

    /// Rows of one pattern span a different number of cells.
    #[error("Pattern '{name}' row {row} spans {found} cells, expected {expected}")]
    RaggedRows {
        name: String,
        row: usize,
        found: u32,
        expected: u32,
    },
}

/// Result type alias for generator operations.
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Result type alias for pattern parsing.
pub type PatternResult<T> = Result<T, PatternError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error_display() {
        let err = GeneratorError::InfeasibleSpacing {
            spacing: 0.8,
            minimum: 1.4,
        };
        assert_eq!(
            err.to_string(),
            "Shape spacing is too small: 0.800 mm (minimum 1.4 mm)"
        );

        let err = GeneratorError::UnsupportedHoldPosition {
            shape: "J".to_string(),
            offset: 1,
            right_offset: 0,
        };
        assert_eq!(
            err.to_string(),
            "Shape 'J' has an unsupported bottom row: left offset 1 exceeds right offset 0"
        );
    }

    #[test]
    fn test_pattern_error_display() {
        let err = PatternError::MalformedRow {
            row: 2,
            line: "X.X".to_string(),
            reason: "filled cells must be contiguous".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Malformed row 2 'X.X': filled cells must be contiguous"
        );
    }

    #[test]
    fn test_error_conversion() {
        let err: GeneratorError = PatternError::Empty.into();
        assert!(matches!(err, GeneratorError::Pattern(PatternError::Empty)));
    }
}
