//! Diagram-layout geometry for solved triangles.
//!
//! Consumes a [`triangle_types::SolvedTriangle`] and produces the plain
//! coordinate data a renderer needs: vertex placement, a padded view box,
//! side and angle label anchors, angle-arc parameters, and a fit transform
//! into a target viewport.

pub mod diagram;
pub mod point;

pub use diagram::*;
pub use point::*;
