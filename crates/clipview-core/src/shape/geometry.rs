//! Clip geometry built for a concrete surface size.

use kurbo::{BezPath, Circle, Point, Rect, RoundedRect, Shape as KurboShape};

/// Closed boundary that the image is filled into.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipGeometry {
    Circle(Circle),
    RoundedRect(RoundedRect),
    /// Apex, bottom-right, bottom-left.
    Triangle([Point; 3]),
    Custom(BezPath),
}

impl ClipGeometry {
    /// Convert to a path. Curves are flattened to `tolerance` where kurbo needs it.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            ClipGeometry::Circle(circle) => circle.to_path(tolerance),
            ClipGeometry::RoundedRect(rounded) => rounded.to_path(tolerance),
            ClipGeometry::Triangle([apex, right, left]) => {
                let mut path = BezPath::new();
                path.move_to(*apex);
                path.line_to(*right);
                path.line_to(*left);
                path.close_path();
                path
            }
            ClipGeometry::Custom(path) => path.clone(),
        }
    }

    /// Bounding box of the geometry.
    pub fn bounds(&self) -> Rect {
        match self {
            ClipGeometry::Circle(circle) => circle.bounding_box(),
            ClipGeometry::RoundedRect(rounded) => rounded.rect(),
            ClipGeometry::Triangle(points) => points
                .iter()
                .skip(1)
                .fold(Rect::from_points(points[0], points[0]), |rect, p| rect.union_pt(*p)),
            ClipGeometry::Custom(path) => path.bounding_box(),
        }
    }
}
