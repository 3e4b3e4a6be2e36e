//! Structured text reports of solve outcomes.

use triangle_solver::SolveError;
use triangle_types::{SolvedTriangle, TriangleSpec, Vertex};

use crate::oracle::OracleVerdict;

/// A solve outcome with its input spec and any oracle results, formatted
/// as a text block.
pub struct SolveReport {
    pub spec: TriangleSpec,
    pub outcome: Result<SolvedTriangle, SolveError>,
    pub oracle_results: Vec<OracleVerdict>,
}

impl SolveReport {
    pub fn new(spec: TriangleSpec, outcome: Result<SolvedTriangle, SolveError>) -> Self {
        Self {
            spec,
            outcome,
            oracle_results: Vec::new(),
        }
    }

    pub fn with_oracles(mut self, oracle_results: Vec<OracleVerdict>) -> Self {
        self.oracle_results = oracle_results;
        self
    }

    /// Format the report as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str("=== Triangle Report ===\n\n");

        out.push_str("Given:\n");
        for v in Vertex::ALL {
            if let Some(side) = self.spec.side(v) {
                out.push_str(&format!("  side {} = {}\n", side_name(v), side));
            }
        }
        for v in Vertex::ALL {
            if let Some(angle) = self.spec.angle(v) {
                out.push_str(&format!("  angle {} = {}°\n", angle_name(v), angle));
            }
        }

        match &self.outcome {
            Ok(solved) => {
                out.push_str(&format!("\nSolved ({}):\n", solved.case));
                for v in Vertex::ALL {
                    out.push_str(&format!(
                        "  {} = {}  |  {} = {}°\n",
                        side_name(v),
                        solved.side(v),
                        angle_name(v),
                        solved.angle(v),
                    ));
                }
                out.push_str(&format!(
                    "\nArea: {}\nPerimeter: {}\nType: {}\n",
                    solved.area, solved.perimeter, solved.classification,
                ));
            }
            Err(error) => {
                out.push_str(&format!("\nNot solved: {}\n", error));
            }
        }

        if !self.oracle_results.is_empty() {
            let passed = self.oracle_results.iter().filter(|v| v.passed).count();
            out.push_str(&format!(
                "\nOracles ({}/{} passed):\n",
                passed,
                self.oracle_results.len(),
            ));
            for verdict in &self.oracle_results {
                let status = if verdict.passed { "PASS" } else { "FAIL" };
                out.push_str(&format!(
                    "  [{}] {}: {}\n",
                    status, verdict.oracle_name, verdict.detail,
                ));
            }
        }

        out
    }
}

fn side_name(v: Vertex) -> &'static str {
    match v {
        Vertex::A => "a",
        Vertex::B => "b",
        Vertex::C => "c",
    }
}

fn angle_name(v: Vertex) -> &'static str {
    match v {
        Vertex::A => "α",
        Vertex::B => "β",
        Vertex::C => "γ",
    }
}
