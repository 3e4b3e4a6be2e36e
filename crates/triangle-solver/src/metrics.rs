//! Derived measurements: area, perimeter, classification, and presentation
//! rounding. Only meaningful for triangles that passed validation.

use triangle_types::{Classification, SolveCase, SolvedTriangle};

use crate::tolerance::{LENGTH_EQ_TOL, ROUND_DECIMALS};

/// Area by Heron's formula. Produces NaN for sides violating the triangle
/// inequality, so it must only run after validation.
pub fn area(sides: &[f64; 3]) -> f64 {
    let s = perimeter(sides) / 2.0;
    (s * (s - sides[0]) * (s - sides[1]) * (s - sides[2])).sqrt()
}

pub fn perimeter(sides: &[f64; 3]) -> f64 {
    sides.iter().sum()
}

/// Classify by side equality within [`LENGTH_EQ_TOL`].
pub fn classify_sides(sides: &[f64; 3]) -> Classification {
    let [a, b, c] = *sides;
    let ab = (a - b).abs() < LENGTH_EQ_TOL;
    let bc = (b - c).abs() < LENGTH_EQ_TOL;
    let ac = (a - c).abs() < LENGTH_EQ_TOL;
    if ab && bc {
        Classification::Equilateral
    } else if ab || bc || ac {
        Classification::Isosceles
    } else {
        Classification::Scalene
    }
}

/// Round to [`ROUND_DECIMALS`] decimal places for presentation.
pub fn round_value(value: f64) -> f64 {
    let factor = 10f64.powi(ROUND_DECIMALS);
    (value * factor).round() / factor
}

/// Assemble the presentation result from full-precision resolved values.
pub fn derive(sides: [f64; 3], angles: [f64; 3], case: SolveCase) -> SolvedTriangle {
    let classification = classify_sides(&sides);
    SolvedTriangle {
        sides: sides.map(round_value),
        angles: angles.map(round_value),
        area: round_value(area(&sides)),
        perimeter: round_value(perimeter(&sides)),
        classification,
        case,
    }
}
