use std::fmt;

use serde::{Deserialize, Serialize};

use crate::vertex::Vertex;

/// Which solvable configuration a spec's known slots form, with the slots
/// that drove the match. Produced by the classifier, consumed by the
/// resolver, and carried on the solved result so callers can see which
/// rule applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SolveCase {
    /// All three sides known.
    Sss,
    /// Two sides and the angle between them.
    Sas {
        sides: (Vertex, Vertex),
        included: Vertex,
    },
    /// Two angles and the side between them.
    Asa {
        angles: (Vertex, Vertex),
        included: Vertex,
    },
    /// Two angles and a side under one of them.
    Aas {
        angles: (Vertex, Vertex),
        side: Vertex,
    },
    /// Two sides and the angle opposite one of them. Ambiguous in general;
    /// only the first solution branch is produced.
    Ssa {
        opposite: Vertex,
        adjacent: Vertex,
    },
}

impl SolveCase {
    pub fn name(&self) -> &'static str {
        match self {
            SolveCase::Sss => "SSS",
            SolveCase::Sas { .. } => "SAS",
            SolveCase::Asa { .. } => "ASA",
            SolveCase::Aas { .. } => "AAS",
            SolveCase::Ssa { .. } => "SSA",
        }
    }
}

impl fmt::Display for SolveCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
