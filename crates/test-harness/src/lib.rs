//! Test harness for the triangle solver.
//!
//! Provides spec constructors for scenario tests, verification oracles
//! returning pass/fail verdicts, and structured text reports of solve
//! outcomes.
//!
//! # Key Components
//!
//! - [`helpers`] — spec constructors for each solvable configuration
//! - [`oracle`] — verification functions returning pass/fail verdicts
//! - [`report`] — structured text descriptions of solve outcomes

pub mod helpers;
pub mod oracle;
pub mod report;

pub use oracle::OracleVerdict;
pub use report::SolveReport;
