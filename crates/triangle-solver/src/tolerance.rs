//! Tolerance and rounding constants shared across the solver.

/// Angle sums within this many degrees of 180 are accepted.
pub const ANGLE_SUM_TOL_DEG: f64 = 0.01;

/// Lengths closer than this are treated as equal. Shared by the
/// classification test and the SSA right-triangle branch.
pub const LENGTH_EQ_TOL: f64 = 1e-4;

/// Presentation values are rounded to this many decimal places.
pub const ROUND_DECIMALS: i32 = 4;
