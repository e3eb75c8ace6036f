//! Clip shapes for the image view.

mod corners;
mod geometry;

pub use corners::CornerRadii;
pub use geometry::ClipGeometry;

use kurbo::{BezPath, Circle, Point, Rect, RoundedRect};
use serde::{Deserialize, Serialize};

/// Discriminant of the active clip shape.
///
/// The integer codes are the ones accepted by [`crate::ViewAttributes`];
/// code `0` means no shape is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    RoundedRect,
    Triangle,
    CustomPath,
}

impl ShapeKind {
    /// Integer code of this kind.
    pub fn code(self) -> i32 {
        match self {
            ShapeKind::Circle => 1,
            ShapeKind::RoundedRect => 2,
            ShapeKind::Triangle => 3,
            ShapeKind::CustomPath => 4,
        }
    }

    /// Look up a kind by integer code.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(ShapeKind::Circle),
            2 => Some(ShapeKind::RoundedRect),
            3 => Some(ShapeKind::Triangle),
            4 => Some(ShapeKind::CustomPath),
            _ => None,
        }
    }

    /// Get display name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Circle => "Circle",
            ShapeKind::RoundedRect => "Rounded Rectangle",
            ShapeKind::Triangle => "Triangle",
            ShapeKind::CustomPath => "Custom Path",
        }
    }
}

/// The shape an image is clipped to, together with its parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ClipShape {
    /// Largest circle centred in the surface.
    Circle,
    /// Surface rectangle with rounded corners.
    RoundedRect(CornerRadii),
    /// Apex at the top-centre, base along the bottom edge.
    Triangle,
    /// Caller-supplied closed path, used verbatim.
    CustomPath(BezPath),
}

impl ClipShape {
    /// Build a custom path shape, rejecting paths with nothing to draw.
    pub fn custom(path: BezPath) -> Option<Self> {
        if is_empty_path(&path) {
            None
        } else {
            Some(ClipShape::CustomPath(path))
        }
    }

    /// Get the kind of this shape.
    pub fn kind(&self) -> ShapeKind {
        match self {
            ClipShape::Circle => ShapeKind::Circle,
            ClipShape::RoundedRect(_) => ShapeKind::RoundedRect,
            ClipShape::Triangle => ShapeKind::Triangle,
            ClipShape::CustomPath(_) => ShapeKind::CustomPath,
        }
    }

    /// Build the clip geometry for a laid-out surface of `width` x `height` pixels.
    ///
    /// Halves are taken with integer division so odd sizes land on whole pixels.
    /// A custom path is returned unchanged whatever the surface size.
    pub fn geometry(&self, width: u32, height: u32) -> ClipGeometry {
        let w = width as f64;
        let h = height as f64;
        let half_width = (width / 2) as f64;
        let half_height = (height / 2) as f64;

        match self {
            ClipShape::Circle => {
                let radius = half_width.min(half_height);
                ClipGeometry::Circle(Circle::new(Point::new(half_width, half_height), radius))
            }
            ClipShape::RoundedRect(radii) => ClipGeometry::RoundedRect(RoundedRect::from_rect(
                Rect::new(0.0, 0.0, w, h),
                radii.resolve(),
            )),
            ClipShape::Triangle => ClipGeometry::Triangle([
                Point::new(half_width, 0.0),
                Point::new(w, h),
                Point::new(0.0, h),
            ]),
            ClipShape::CustomPath(path) => ClipGeometry::Custom(path.clone()),
        }
    }
}

/// A path is empty when it has no segments (a lone move-to draws nothing).
fn is_empty_path(path: &BezPath) -> bool {
    path.segments().next().is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_codes_round_trip() {
        for kind in [
            ShapeKind::Circle,
            ShapeKind::RoundedRect,
            ShapeKind::Triangle,
            ShapeKind::CustomPath,
        ] {
            assert_eq!(ShapeKind::from_code(kind.code()), Some(kind));
        }
        assert_eq!(ShapeKind::from_code(0), None);
        assert_eq!(ShapeKind::from_code(5), None);
    }

    #[test]
    fn test_circle_geometry() {
        for (w, h) in [(100, 60), (60, 100), (1, 1), (37, 81), (500, 500)] {
            let ClipGeometry::Circle(circle) = ClipShape::Circle.geometry(w, h) else {
                panic!("expected circle geometry");
            };
            assert!((circle.radius - (w.min(h) / 2) as f64).abs() < f64::EPSILON);
            assert!((circle.center.x - (w / 2) as f64).abs() < f64::EPSILON);
            assert!((circle.center.y - (h / 2) as f64).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_triangle_vertices() {
        let ClipGeometry::Triangle(points) = ClipShape::Triangle.geometry(100, 60) else {
            panic!("expected triangle geometry");
        };
        assert_eq!(points[0], Point::new(50.0, 0.0));
        assert_eq!(points[1], Point::new(100.0, 60.0));
        assert_eq!(points[2], Point::new(0.0, 60.0));
    }

    #[test]
    fn test_rounded_rect_per_corner() {
        let shape = ClipShape::RoundedRect(CornerRadii::per_corner(5.0, 10.0, 15.0, 20.0));
        let ClipGeometry::RoundedRect(rounded) = shape.geometry(200, 100) else {
            panic!("expected rounded rect geometry");
        };
        let radii = rounded.radii();
        assert!((radii.top_left - 5.0).abs() < f64::EPSILON);
        assert!((radii.top_right - 10.0).abs() < f64::EPSILON);
        assert!((radii.bottom_left - 15.0).abs() < f64::EPSILON);
        assert!((radii.bottom_right - 20.0).abs() < f64::EPSILON);
        assert_eq!(rounded.rect(), Rect::new(0.0, 0.0, 200.0, 100.0));
    }

    #[test]
    fn test_rounded_rect_uniform() {
        let shape = ClipShape::RoundedRect(CornerRadii::uniform(12.0));
        let ClipGeometry::RoundedRect(rounded) = shape.geometry(200, 100) else {
            panic!("expected rounded rect geometry");
        };
        let radii = rounded.radii();
        for r in [radii.top_left, radii.top_right, radii.bottom_left, radii.bottom_right] {
            assert!((r - 12.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_custom_rejects_empty() {
        assert!(ClipShape::custom(BezPath::new()).is_none());

        let mut lone_move = BezPath::new();
        lone_move.move_to((10.0, 10.0));
        assert!(ClipShape::custom(lone_move).is_none());

        let mut path = BezPath::new();
        path.move_to((0.0, 0.0));
        path.line_to((10.0, 0.0));
        path.line_to((10.0, 10.0));
        path.close_path();
        assert_eq!(ClipShape::custom(path).map(|s| s.kind()), Some(ShapeKind::CustomPath));
    }

    #[test]
    fn test_custom_path_not_regenerated() {
        let mut path = BezPath::new();
        path.move_to((1.0, 2.0));
        path.line_to((30.0, 4.0));
        path.line_to((5.0, 60.0));
        path.close_path();
        let shape = ClipShape::custom(path.clone()).unwrap();

        for (w, h) in [(10, 10), (400, 300)] {
            let ClipGeometry::Custom(out) = shape.geometry(w, h) else {
                panic!("expected custom geometry");
            };
            assert_eq!(out, path);
        }
    }
}
