use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation failure for a single raw input slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum InputError {
    #[error("please enter a positive number")]
    NotPositive,

    #[error("angle must be less than 180 degrees")]
    AngleTooLarge,
}

/// Why a triangle specification could not be solved.
///
/// Every variant carries a human-readable message; errors are returned as
/// data and never panic. Each evaluation is independent and retryable by
/// changing the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SolveError {
    #[error("not enough information: enter at least 3 values, including at least one side")]
    Insufficient,

    #[error("the given values do not match any solvable configuration")]
    NoMatchingCase,

    #[error("invalid triangle: the sum of any two sides must be greater than the third")]
    TriangleInequality,

    #[error("invalid triangle: the angles do not sum to 180 degrees")]
    AngleSum,

    #[error("invalid triangle: no solution exists for the given values")]
    NoSsaSolution,
}
