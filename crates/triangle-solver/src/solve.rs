//! Solver entry points.

use tracing::debug;
use triangle_types::{SolvedTriangle, TriangleSpec};

use crate::classify::classify;
use crate::error::SolveError;
use crate::{metrics, resolve, validate};

/// True when the spec has at least three known values, including at least
/// one side. Callers use this to short-circuit before [`solve`].
pub fn has_enough_information(spec: &TriangleSpec) -> bool {
    let known_sides = spec.known_sides();
    known_sides + spec.known_angles() >= 3 && known_sides >= 1
}

/// Solve a partial triangle specification.
///
/// A pure function of the spec: identical inputs produce identical outputs,
/// and every failure is returned as a [`SolveError`] carrying a displayable
/// message. Angles are degrees throughout the public surface.
pub fn solve(spec: TriangleSpec) -> Result<SolvedTriangle, SolveError> {
    let case = classify(&spec)?;
    debug!(case = %case, "classified triangle spec");

    let (sides, angles) = resolve::resolve(&spec, case)?;
    validate::solved(&sides, &angles)?;

    let solved = metrics::derive(sides, angles, case);
    debug!(
        area = solved.area,
        perimeter = solved.perimeter,
        classification = %solved.classification,
        "triangle solved"
    );
    Ok(solved)
}
