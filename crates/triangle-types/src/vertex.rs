use std::fmt;

use serde::{Deserialize, Serialize};

/// A triangle vertex label. Side `a` is opposite vertex `A`, side `b`
/// opposite `B`, side `c` opposite `C`; the angle at a vertex shares its
/// index with the opposite side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vertex {
    A,
    B,
    C,
}

impl Vertex {
    /// All vertices in label order.
    pub const ALL: [Vertex; 3] = [Vertex::A, Vertex::B, Vertex::C];

    /// Slot index of this vertex in `[A, B, C]`-ordered triples.
    pub fn index(self) -> usize {
        match self {
            Vertex::A => 0,
            Vertex::B => 1,
            Vertex::C => 2,
        }
    }

    /// The two other vertices, in label order.
    pub fn others(self) -> (Vertex, Vertex) {
        match self {
            Vertex::A => (Vertex::B, Vertex::C),
            Vertex::B => (Vertex::A, Vertex::C),
            Vertex::C => (Vertex::A, Vertex::B),
        }
    }

    /// The vertex that is in neither position of a pair of distinct vertices.
    pub fn complement(a: Vertex, b: Vertex) -> Vertex {
        match (a, b) {
            (Vertex::A, Vertex::B) | (Vertex::B, Vertex::A) => Vertex::C,
            (Vertex::B, Vertex::C) | (Vertex::C, Vertex::B) => Vertex::A,
            (Vertex::A, Vertex::C) | (Vertex::C, Vertex::A) => Vertex::B,
            (Vertex::A, Vertex::A) | (Vertex::B, Vertex::B) | (Vertex::C, Vertex::C) => {
                panic!("complement of a degenerate vertex pair")
            }
        }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Vertex::A => "A",
            Vertex::B => "B",
            Vertex::C => "C",
        };
        f.write_str(label)
    }
}
