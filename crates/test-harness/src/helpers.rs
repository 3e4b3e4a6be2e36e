//! Spec constructors for scenario tests, one per solvable configuration.

use triangle_types::{TriangleSpec, Vertex};

/// All three sides known.
pub fn sss(a: f64, b: f64, c: f64) -> TriangleSpec {
    TriangleSpec::from_sides(a, b, c)
}

/// Sides `a` and `b` with the included angle `γ` (degrees).
pub fn sas(a: f64, b: f64, gamma: f64) -> TriangleSpec {
    TriangleSpec::new()
        .with_side(Vertex::A, a)
        .with_side(Vertex::B, b)
        .with_angle(Vertex::C, gamma)
}

/// Angles `α` and `β` (degrees) with the included side `c`.
pub fn asa(alpha: f64, beta: f64, c: f64) -> TriangleSpec {
    TriangleSpec::new()
        .with_angle(Vertex::A, alpha)
        .with_angle(Vertex::B, beta)
        .with_side(Vertex::C, c)
}

/// Angles `α` and `β` (degrees) with side `a`, which sits under `α`.
pub fn aas(alpha: f64, beta: f64, a: f64) -> TriangleSpec {
    TriangleSpec::new()
        .with_angle(Vertex::A, alpha)
        .with_angle(Vertex::B, beta)
        .with_side(Vertex::A, a)
}

/// Sides `a` and `b` with angle `α` (degrees) opposite side `a`.
pub fn ssa(a: f64, b: f64, alpha: f64) -> TriangleSpec {
    TriangleSpec::new()
        .with_side(Vertex::A, a)
        .with_side(Vertex::B, b)
        .with_angle(Vertex::A, alpha)
}
