use std::fmt;

use serde::{Deserialize, Serialize};

use crate::case::SolveCase;
use crate::vertex::Vertex;

/// Triangle classification by side equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Classification {
    Equilateral,
    Isosceles,
    Scalene,
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Classification::Equilateral => "Equilateral",
            Classification::Isosceles => "Isosceles",
            Classification::Scalene => "Scalene",
        };
        f.write_str(label)
    }
}

/// A fully resolved triangle with derived metrics.
///
/// All six values are positive; angles are degrees summing to 180 within
/// tolerance; sides satisfy the strict triangle inequality. Values are
/// rounded to presentation precision (4 decimal places).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolvedTriangle {
    /// Side lengths `[a, b, c]`.
    pub sides: [f64; 3],
    /// Interior angles `[α, β, γ]` in degrees.
    pub angles: [f64; 3],
    /// Area by Heron's formula.
    pub area: f64,
    /// Sum of the three sides.
    pub perimeter: f64,
    pub classification: Classification,
    /// The configuration that solved this spec.
    pub case: SolveCase,
}

impl SolvedTriangle {
    /// The side opposite `vertex`.
    pub fn side(&self, vertex: Vertex) -> f64 {
        self.sides[vertex.index()]
    }

    /// The angle at `vertex`, in degrees.
    pub fn angle(&self, vertex: Vertex) -> f64 {
        self.angles[vertex.index()]
    }
}
