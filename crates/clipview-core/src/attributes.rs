//! Construction-time attributes of the image view.

use crate::shape::{ClipShape, CornerRadii, ShapeKind};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Attribute parsing errors.
#[derive(Debug, Error)]
pub enum AttributeError {
    #[error("Invalid attributes: {0}")]
    Parse(String),
}

/// Attribute set a view may be constructed with.
///
/// Every field has a default, so an empty JSON object is a valid attribute set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewAttributes {
    /// Smooth the clip edge.
    #[serde(default = "default_anti_alias")]
    pub anti_alias: bool,
    /// Flattening tolerance used when curves are converted to paths.
    #[serde(default = "default_path_tolerance")]
    pub path_tolerance: f64,
    /// Integer code of the initial shape (see [`ShapeKind::code`]); 0 for none.
    #[serde(default)]
    pub shape: i32,
    /// Uniform corner radius used when `shape` is a rounded rectangle.
    #[serde(default)]
    pub corner_radius: f64,
}

fn default_anti_alias() -> bool {
    true
}

fn default_path_tolerance() -> f64 {
    0.1
}

impl Default for ViewAttributes {
    fn default() -> Self {
        Self {
            anti_alias: default_anti_alias(),
            path_tolerance: default_path_tolerance(),
            shape: 0,
            corner_radius: 0.0,
        }
    }
}

impl ViewAttributes {
    /// Parse attributes from JSON.
    pub fn from_json(json: &str) -> Result<Self, AttributeError> {
        let attributes: Self =
            serde_json::from_str(json).map_err(|e| AttributeError::Parse(e.to_string()))?;
        if attributes.path_tolerance.is_nan() || attributes.path_tolerance <= 0.0 {
            return Err(AttributeError::Parse(format!(
                "path_tolerance must be positive, got {}",
                attributes.path_tolerance
            )));
        }
        Ok(attributes)
    }

    /// Serialize attributes to JSON.
    pub fn to_json(&self) -> Result<String, AttributeError> {
        serde_json::to_string_pretty(self).map_err(|e| AttributeError::Parse(e.to_string()))
    }

    /// The shape these attributes preselect, if any.
    ///
    /// A custom path cannot be expressed as an attribute and is ignored.
    pub fn initial_shape(&self) -> Option<ClipShape> {
        if self.shape == 0 {
            return None;
        }
        match ShapeKind::from_code(self.shape) {
            Some(ShapeKind::Circle) => Some(ClipShape::Circle),
            Some(ShapeKind::RoundedRect) => {
                Some(ClipShape::RoundedRect(CornerRadii::uniform(self.corner_radius)))
            }
            Some(ShapeKind::Triangle) => Some(ClipShape::Triangle),
            Some(ShapeKind::CustomPath) => {
                log::warn!("Ignoring custom path shape attribute: no path can be supplied here");
                None
            }
            None => {
                log::warn!("Ignoring unknown shape attribute code {}", self.shape);
                None
            }
        }
    }
}
