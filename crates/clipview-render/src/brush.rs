//! Repeating image brush.

use clipview_core::source::{DecodedImage, ResourceId};
use peniko::{Extend, ImageBrush};
#[cfg(feature = "raster")]
use std::sync::Arc;

/// Image brush that tiles the decoded pixels in both axes from the surface origin.
#[derive(Debug, Clone)]
pub struct TileBrush {
    source: ResourceId,
    brush: ImageBrush,
    /// Premultiplied copy of the tile for the CPU rasteriser, built with the brush.
    #[cfg(feature = "raster")]
    raster_tile: Option<Arc<tiny_skia::Pixmap>>,
}

impl TileBrush {
    /// Wrap a decoded image. The pixel buffer is shared, not copied.
    pub fn from_image(image: &DecodedImage) -> Self {
        let brush = ImageBrush::new(image.image_data().clone())
            .with_x_extend(Extend::Repeat)
            .with_y_extend(Extend::Repeat);
        Self {
            source: image.source(),
            #[cfg(feature = "raster")]
            raster_tile: crate::raster::premultiplied_tile(
                image.width(),
                image.height(),
                image.pixels(),
            )
            .map(Arc::new),
            brush,
        }
    }

    /// Resource the brush samples from.
    pub fn source(&self) -> ResourceId {
        self.source
    }

    /// The underlying peniko brush.
    pub fn image_brush(&self) -> &ImageBrush {
        &self.brush
    }

    /// Straight-alpha RGBA8 pixels of one tile.
    pub fn pixels(&self) -> &[u8] {
        self.brush.image.data.data()
    }

    /// Tile size in pixels.
    pub fn tile_size(&self) -> (u32, u32) {
        (self.brush.image.width, self.brush.image.height)
    }

    /// Horizontal and vertical extend modes.
    pub fn extend(&self) -> (Extend, Extend) {
        (self.brush.sampler.x_extend, self.brush.sampler.y_extend)
    }

    /// Premultiplied tile for the CPU rasteriser, shared by every clone of the brush.
    #[cfg(feature = "raster")]
    pub(crate) fn raster_tile(&self) -> Option<&Arc<tiny_skia::Pixmap>> {
        self.raster_tile.as_ref()
    }
}
