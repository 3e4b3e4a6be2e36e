//! Scaled 2D diagram geometry for a solved triangle.
//!
//! Everything here is plain data for a renderer: vertex coordinates, a
//! padded view box, label anchors, and angle-arc parameters. Drawing the
//! actual primitives is the renderer's job.

use std::f64::consts::{PI, TAU};

use serde::{Deserialize, Serialize};
use triangle_types::{SolvedTriangle, Vertex};

use crate::point::Point2;

/// Fraction of the larger span added as padding on every side.
const PADDING_RATIO: f64 = 0.2;
/// Side labels sit this fraction of the span off the side midpoint.
const SIDE_LABEL_OFFSET_RATIO: f64 = 0.03;
/// Angle arc radius as a fraction of the smaller span.
const ARC_RADIUS_RATIO: f64 = 0.06;
/// Angle labels sit on the bisector at this multiple of the arc radius.
const ANGLE_LABEL_RADIUS_FACTOR: f64 = 1.5;

/// The diagram's coordinate window: bounding box of the triangle plus
/// padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub min_x: f64,
    pub min_y: f64,
    pub width: f64,
    pub height: f64,
}

/// Anchor for one side's length label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SideLabel {
    /// The vertex this side is opposite to (side `a` ↔ vertex `A`).
    pub side: Vertex,
    pub anchor: Point2,
}

/// Arc marking one interior angle. `start_angle`/`end_angle` are ray angles
/// from the vertex in radians, normalized so the counter-clockwise sweep
/// from start to end is the interior angle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AngleArc {
    pub vertex: Vertex,
    pub center: Point2,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Anchor for the angle label, on the bisector outside the arc.
    pub label_anchor: Point2,
}

/// Complete diagram geometry for a solved triangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Diagram {
    /// Vertex positions `[A, B, C]`.
    pub vertices: [Point2; 3],
    pub view_box: ViewBox,
    pub side_labels: [SideLabel; 3],
    pub angle_arcs: [AngleArc; 3],
}

/// Uniform scale and centering offset mapping a view box into a target
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitTransform {
    pub scale: f64,
    pub offset: Point2,
}

impl FitTransform {
    pub fn apply(&self, p: Point2) -> Point2 {
        Point2::new(p.x * self.scale + self.offset.x, p.y * self.scale + self.offset.y)
    }
}

impl Diagram {
    /// Uniform scale plus centering offset that maps the view box into a
    /// `width` × `height` viewport.
    pub fn fit_to(&self, width: f64, height: f64) -> FitTransform {
        let scale = (width / self.view_box.width).min(height / self.view_box.height);
        let offset = Point2::new(
            (width - self.view_box.width * scale) / 2.0 - self.view_box.min_x * scale,
            (height - self.view_box.height * scale) / 2.0 - self.view_box.min_y * scale,
        );
        FitTransform { scale, offset }
    }
}

/// Compute diagram geometry for a solved triangle.
///
/// Vertex `A` sits at the origin, `B` at `(c, 0)`, and `C` at
/// `(b·cos α, b·sin α)`, so `C` is at distance `b` from `A` and `a` from
/// `B`.
pub fn layout(solved: &SolvedTriangle) -> Diagram {
    let b = solved.side(Vertex::B);
    let c = solved.side(Vertex::C);
    let alpha_rad = solved.angle(Vertex::A).to_radians();

    let vertices = [
        Point2::ORIGIN,
        Point2::new(c, 0.0),
        Point2::new(b * alpha_rad.cos(), b * alpha_rad.sin()),
    ];

    let view_box = padded_view_box(&vertices);
    let side_labels = [
        side_label(&vertices, Vertex::A, &view_box),
        side_label(&vertices, Vertex::B, &view_box),
        side_label(&vertices, Vertex::C, &view_box),
    ];
    let arc_radius = view_box.width.min(view_box.height) * ARC_RADIUS_RATIO;
    let angle_arcs = [
        angle_arc(&vertices, Vertex::A, arc_radius),
        angle_arc(&vertices, Vertex::B, arc_radius),
        angle_arc(&vertices, Vertex::C, arc_radius),
    ];

    Diagram {
        vertices,
        view_box,
        side_labels,
        angle_arcs,
    }
}

fn padded_view_box(vertices: &[Point2; 3]) -> ViewBox {
    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;
    for v in vertices {
        min_x = min_x.min(v.x);
        max_x = max_x.max(v.x);
        min_y = min_y.min(v.y);
        max_y = max_y.max(v.y);
    }

    let padding = (max_x - min_x).max(max_y - min_y) * PADDING_RATIO;
    ViewBox {
        min_x: min_x - padding,
        min_y: min_y - padding,
        width: (max_x - min_x) + 2.0 * padding,
        height: (max_y - min_y) + 2.0 * padding,
    }
}

/// Label anchor for the side opposite `side`: segment midpoint offset along
/// the segment normal.
fn side_label(vertices: &[Point2; 3], side: Vertex, view_box: &ViewBox) -> SideLabel {
    let (p, q) = side.others();
    let start = vertices[p.index()];
    let end = vertices[q.index()];
    let mid = start.midpoint(&end);

    let dx = end.x - start.x;
    let dy = end.y - start.y;
    let len = start.distance_to(&end);
    let anchor = Point2::new(
        mid.x - dy / len * (view_box.width * SIDE_LABEL_OFFSET_RATIO),
        mid.y + dx / len * (view_box.height * SIDE_LABEL_OFFSET_RATIO),
    );

    SideLabel { side, anchor }
}

fn angle_arc(vertices: &[Point2; 3], vertex: Vertex, radius: f64) -> AngleArc {
    let center = vertices[vertex.index()];
    let (p, q) = vertex.others();
    let mut start = ray_angle(center, vertices[p.index()]);
    let mut end = ray_angle(center, vertices[q.index()]);

    let mut sweep = end - start;
    if sweep < 0.0 {
        sweep += TAU;
    }
    if sweep > PI {
        std::mem::swap(&mut start, &mut end);
        sweep = TAU - sweep;
    }

    let mid = start + sweep / 2.0;
    let label_radius = radius * ANGLE_LABEL_RADIUS_FACTOR;
    let label_anchor = Point2::new(
        center.x + label_radius * mid.cos(),
        center.y + label_radius * mid.sin(),
    );

    AngleArc {
        vertex,
        center,
        radius,
        start_angle: start,
        end_angle: end,
        label_anchor,
    }
}

fn ray_angle(from: Point2, to: Point2) -> f64 {
    (to.y - from.y).atan2(to.x - from.x)
}
