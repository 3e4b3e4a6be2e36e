//! Verification oracles — pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not
//! panics, so a scenario can collect all failures in one pass.

use triangle_types::{SolvedTriangle, Vertex};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}

/// Check that the three angles sum to 180° within 0.01.
pub fn check_angle_sum(solved: &SolvedTriangle) -> OracleVerdict {
    let sum: f64 = solved.angles.iter().sum();
    let detail = format!("α + β + γ = {}", sum);
    if (sum - 180.0).abs() <= 0.01 {
        OracleVerdict::pass("angle_sum", detail).with_value(sum)
    } else {
        OracleVerdict::fail("angle_sum", detail).with_value(sum)
    }
}

/// Check the strict triangle inequality on all three side pairs.
pub fn check_triangle_inequality(solved: &SolvedTriangle) -> OracleVerdict {
    let [a, b, c] = solved.sides;
    if a + b > c && a + c > b && b + c > a {
        OracleVerdict::pass(
            "triangle_inequality",
            format!("sides ({}, {}, {})", a, b, c),
        )
    } else {
        OracleVerdict::fail(
            "triangle_inequality",
            format!("violated for sides ({}, {}, {})", a, b, c),
        )
    }
}

/// Check Heron's area against (1/2)·a·b·sin(γ).
pub fn check_heron_consistency(solved: &SolvedTriangle) -> OracleVerdict {
    let gamma = solved.angle(Vertex::C).to_radians();
    let half_ab_sin = 0.5 * solved.side(Vertex::A) * solved.side(Vertex::B) * gamma.sin();
    let tol = 1e-3 * solved.area.max(1.0);
    let detail = format!("Heron {} vs (1/2)ab·sin γ {}", solved.area, half_ab_sin);
    if (solved.area - half_ab_sin).abs() <= tol {
        OracleVerdict::pass("heron_consistency", detail).with_value(solved.area)
    } else {
        OracleVerdict::fail("heron_consistency", detail).with_value(solved.area)
    }
}

/// Check that all three Law of Sines ratios agree.
pub fn check_law_of_sines(solved: &SolvedTriangle) -> OracleVerdict {
    let ratios: Vec<f64> = Vertex::ALL
        .iter()
        .map(|&v| solved.side(v) / solved.angle(v).to_radians().sin())
        .collect();
    let spread = (ratios[0] - ratios[1])
        .abs()
        .max((ratios[1] - ratios[2]).abs());
    let tol = 1e-3 * ratios[0].abs().max(1.0);
    let detail = format!("ratios {:?}", ratios);
    if spread <= tol {
        OracleVerdict::pass("law_of_sines", detail).with_value(spread)
    } else {
        OracleVerdict::fail("law_of_sines", detail).with_value(spread)
    }
}

/// Run every oracle against a solved triangle.
pub fn run_all(solved: &SolvedTriangle) -> Vec<OracleVerdict> {
    vec![
        check_angle_sum(solved),
        check_triangle_inequality(solved),
        check_heron_consistency(solved),
        check_law_of_sines(solved),
    ]
}
