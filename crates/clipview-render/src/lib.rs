//! ClipView Render Library
//!
//! Decoding, brushes, draw surfaces and the shape-clipped image view.
//! The default surface rasterises on the CPU with tiny-skia; a Vello scene
//! backend is available behind the `vello-renderer` feature.

mod brush;
mod decode;
mod surface;
mod view;

#[cfg(feature = "raster")]
mod raster;

#[cfg(feature = "vello-renderer")]
mod vello_impl;

pub use brush::TileBrush;
pub use decode::AssetDecoder;
pub use surface::{CommandRecorder, DrawCommand, DrawSurface, SurfaceError, SurfaceResult};
pub use view::{ClipImageView, RenderOutcome, SkipReason};

#[cfg(feature = "raster")]
pub use raster::PixmapSurface;
