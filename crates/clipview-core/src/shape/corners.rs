//! Corner radii for the rounded rectangle shape.

use kurbo::RoundedRectRadii;
use serde::{Deserialize, Serialize};

/// Corner radii, either one uniform radius or four independent ones.
///
/// A uniform radius greater than zero wins over the per-corner values.
/// Each radius applies equally to both axes of its corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CornerRadii {
    /// Radius applied to every corner when positive.
    #[serde(default)]
    pub uniform: f64,
    #[serde(default)]
    pub top_left: f64,
    #[serde(default)]
    pub top_right: f64,
    #[serde(default)]
    pub bottom_left: f64,
    #[serde(default)]
    pub bottom_right: f64,
}

impl CornerRadii {
    /// Same radius on every corner.
    pub fn uniform(radius: f64) -> Self {
        Self {
            uniform: radius,
            ..Self::default()
        }
    }

    /// Independent radius per corner.
    pub fn per_corner(top_left: f64, top_right: f64, bottom_left: f64, bottom_right: f64) -> Self {
        Self {
            uniform: 0.0,
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        }
    }

    /// Whether the uniform radius is in effect.
    pub fn is_uniform(&self) -> bool {
        self.uniform > 0.0
    }

    /// Resolve to the radii actually drawn.
    pub fn resolve(&self) -> RoundedRectRadii {
        if self.is_uniform() {
            RoundedRectRadii::from_single_radius(self.uniform)
        } else {
            // kurbo orders corners clockwise from the top-left
            RoundedRectRadii::new(
                self.top_left,
                self.top_right,
                self.bottom_right,
                self.bottom_left,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_overrides_corners() {
        let radii = CornerRadii {
            uniform: 8.0,
            top_left: 1.0,
            top_right: 2.0,
            bottom_left: 3.0,
            bottom_right: 4.0,
        };
        let resolved = radii.resolve();
        assert!((resolved.top_left - 8.0).abs() < f64::EPSILON);
        assert!((resolved.top_right - 8.0).abs() < f64::EPSILON);
        assert!((resolved.bottom_left - 8.0).abs() < f64::EPSILON);
        assert!((resolved.bottom_right - 8.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_uniform_uses_corners() {
        let resolved = CornerRadii::per_corner(1.0, 2.0, 3.0, 4.0).resolve();
        assert!((resolved.top_left - 1.0).abs() < f64::EPSILON);
        assert!((resolved.top_right - 2.0).abs() < f64::EPSILON);
        assert!((resolved.bottom_left - 3.0).abs() < f64::EPSILON);
        assert!((resolved.bottom_right - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_uniform_ignored() {
        let radii = CornerRadii {
            uniform: -5.0,
            ..CornerRadii::per_corner(6.0, 6.0, 6.0, 6.0)
        };
        assert!(!radii.is_uniform());
        assert!((radii.resolve().top_left - 6.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_deserialize_partial() {
        let radii: CornerRadii = serde_json::from_str(r#"{"top_left": 4.0}"#).unwrap();
        assert_eq!(radii, CornerRadii::per_corner(4.0, 0.0, 0.0, 0.0));
    }
}
