use serde::{Deserialize, Serialize};

use crate::vertex::Vertex;

/// A partial triangle specification: three optional side lengths and three
/// optional interior angles (degrees). Each slot is independently optional;
/// the spec is the sole input to the solver and is rebuilt fresh on every
/// evaluation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TriangleSpec {
    /// Side lengths `[a, b, c]`; side `a` is opposite vertex `A`.
    pub sides: [Option<f64>; 3],
    /// Interior angles `[α, β, γ]` in degrees; angle `α` is at vertex `A`.
    pub angles: [Option<f64>; 3],
}

impl TriangleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spec with all three sides known.
    pub fn from_sides(a: f64, b: f64, c: f64) -> Self {
        Self {
            sides: [Some(a), Some(b), Some(c)],
            angles: [None; 3],
        }
    }

    /// Set the side opposite `vertex`.
    pub fn with_side(mut self, vertex: Vertex, length: f64) -> Self {
        self.sides[vertex.index()] = Some(length);
        self
    }

    /// Set the angle at `vertex`, in degrees.
    pub fn with_angle(mut self, vertex: Vertex, degrees: f64) -> Self {
        self.angles[vertex.index()] = Some(degrees);
        self
    }

    /// The side opposite `vertex`, if known.
    pub fn side(&self, vertex: Vertex) -> Option<f64> {
        self.sides[vertex.index()]
    }

    /// The angle at `vertex` in degrees, if known.
    pub fn angle(&self, vertex: Vertex) -> Option<f64> {
        self.angles[vertex.index()]
    }

    pub fn known_sides(&self) -> usize {
        self.sides.iter().filter(|s| s.is_some()).count()
    }

    pub fn known_angles(&self) -> usize {
        self.angles.iter().filter(|a| a.is_some()).count()
    }
}
