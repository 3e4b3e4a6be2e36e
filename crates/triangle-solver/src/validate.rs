//! Triangle validity checks. Each check returns a typed error so callers
//! can surface the message and suppress the diagram.

use crate::error::SolveError;
use crate::tolerance::ANGLE_SUM_TOL_DEG;

/// Strict triangle inequality over all three side pairs.
pub fn triangle_inequality(sides: &[f64; 3]) -> Result<(), SolveError> {
    let [a, b, c] = *sides;
    if a + b <= c || a + c <= b || b + c <= a {
        return Err(SolveError::TriangleInequality);
    }
    Ok(())
}

/// Angle sum within tolerance of 180 degrees.
pub fn angle_sum(angles: &[f64; 3]) -> Result<(), SolveError> {
    let sum: f64 = angles.iter().sum();
    if !sum.is_finite() || (sum - 180.0).abs() > ANGLE_SUM_TOL_DEG {
        return Err(SolveError::AngleSum);
    }
    Ok(())
}

/// A derived angle must be strictly positive and finite.
pub fn positive_angle(degrees: f64) -> Result<(), SolveError> {
    if !degrees.is_finite() || degrees <= 0.0 {
        return Err(SolveError::AngleSum);
    }
    Ok(())
}

/// Whole-triangle invariant, run after every case: six finite positive
/// values, angle sum within tolerance, strict triangle inequality.
pub fn solved(sides: &[f64; 3], angles: &[f64; 3]) -> Result<(), SolveError> {
    if sides.iter().any(|s| !s.is_finite() || *s <= 0.0) {
        return Err(SolveError::TriangleInequality);
    }
    for angle in angles {
        positive_angle(*angle)?;
    }
    angle_sum(angles)?;
    triangle_inequality(sides)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inequality_rejects_degenerate() {
        assert_eq!(
            triangle_inequality(&[1.0, 2.0, 3.0]),
            Err(SolveError::TriangleInequality)
        );
        assert_eq!(
            triangle_inequality(&[1.0, 1.0, 5.0]),
            Err(SolveError::TriangleInequality)
        );
        assert_eq!(triangle_inequality(&[3.0, 4.0, 5.0]), Ok(()));
    }

    #[test]
    fn test_angle_sum_tolerance() {
        assert_eq!(angle_sum(&[60.0, 60.0, 60.0]), Ok(()));
        assert_eq!(angle_sum(&[60.0, 60.0, 60.005]), Ok(()));
        assert_eq!(angle_sum(&[60.0, 60.0, 61.0]), Err(SolveError::AngleSum));
        assert_eq!(
            angle_sum(&[f64::NAN, 60.0, 60.0]),
            Err(SolveError::AngleSum)
        );
    }

    #[test]
    fn test_positive_angle() {
        assert_eq!(positive_angle(0.1), Ok(()));
        assert_eq!(positive_angle(0.0), Err(SolveError::AngleSum));
        assert_eq!(positive_angle(-5.0), Err(SolveError::AngleSum));
        assert_eq!(positive_angle(f64::NAN), Err(SolveError::AngleSum));
    }

    #[test]
    fn test_solved_requires_all_invariants() {
        assert_eq!(solved(&[3.0, 4.0, 5.0], &[36.8699, 53.1301, 90.0]), Ok(()));
        // Negative angle sneaking through an exact 180 sum.
        assert_eq!(
            solved(&[3.0, 4.0, 5.0], &[-10.0, 100.0, 90.0]),
            Err(SolveError::AngleSum)
        );
        // NaN side.
        assert_eq!(
            solved(&[f64::NAN, 4.0, 5.0], &[60.0, 60.0, 60.0]),
            Err(SolveError::TriangleInequality)
        );
    }
}
