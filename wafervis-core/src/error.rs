//! Error types for grid construction and level-of-detail transitions

use thiserror::Error;

use crate::topology::IndexRange;
use crate::types::{DetailTier, Direction, UnitIndex};

/// Result type for controller operations
pub type LodResult<T> = Result<T, LodError>;

/// Rejected controller operations. A rejected operation leaves the
/// controller state and every presenter untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LodError {
    #[error("auto mode is not enabled")]
    Disabled,

    #[error("auto mode is already enabled")]
    AlreadyEnabled,

    #[error("a focus unit is required to enter {0}")]
    MissingFocus(DetailTier),

    #[error("unit {index} is outside the grid range {range}")]
    UnitOutOfRange { index: UnitIndex, range: IndexRange },

    #[error("cannot transition from {from} to {to}")]
    InvalidTransition { from: DetailTier, to: DetailTier },

    #[error("unit {from} has no {direction} neighbor")]
    NoNeighbor { from: UnitIndex, direction: Direction },
}

/// Errors raised while building a wafer grid
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("grid layout contains no units")]
    Empty,

    #[error("grid dimensions must be non-zero (got {columns}x{rows})")]
    ZeroDimension { columns: u32, rows: u32 },

    #[error("duplicate unit position ({x}, {y})")]
    DuplicatePosition { x: i32, y: i32 },

    #[error("row {y} starts at x={x_start} after it ends at x={x_end}")]
    InvalidRow { y: i32, x_start: i32, x_end: i32 },

    #[error("grid layout exceeds the addressable unit range")]
    TooLarge,
}

/// An unrecognized name for a direction, flag or layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct ParseNameError {
    pub kind: &'static str,
    pub value: String,
}

impl ParseNameError {
    pub fn new<S: Into<String>>(kind: &'static str, value: S) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = LodError::UnitOutOfRange {
            index: 20,
            range: IndexRange { min: 0, max: 15 },
        };
        assert_eq!(err.to_string(), "unit 20 is outside the grid range [0, 15]");

        let err = LodError::NoNeighbor {
            from: 3,
            direction: Direction::East,
        };
        assert_eq!(err.to_string(), "unit 3 has no east neighbor");

        let err = LodError::InvalidTransition {
            from: DetailTier::Overview,
            to: DetailTier::DetailTwo,
        };
        assert_eq!(err.to_string(), "cannot transition from overview to detail_two");
    }
}
