//! ClipView Core Library
//!
//! Platform-agnostic data structures and logic for the ClipView widget:
//! clip shapes and their geometry, decode sample-size math, view attributes
//! and the image decoding seam.

pub mod attributes;
pub mod sample;
pub mod shape;
pub mod source;

pub use attributes::{AttributeError, ViewAttributes};
pub use sample::{calculate_in_sample_size, scaled_dimension};
pub use shape::{ClipGeometry, ClipShape, CornerRadii, ShapeKind};
pub use source::{DecodeError, DecodeResult, DecodedImage, ImageDecoder, ImageFormat, ImageSize, ResourceId};
