//! CPU draw surface backed by tiny-skia.

use crate::brush::TileBrush;
use crate::surface::{DrawSurface, SurfaceError, SurfaceResult};
use kurbo::{BezPath, PathEl};
use std::path::Path;
use tiny_skia::{
    ColorU8, FillRule, FilterQuality, Paint, PathBuilder, Pattern, Pixmap, SpreadMode, Transform,
};

/// Draw surface that rasterises into an RGBA pixmap.
pub struct PixmapSurface {
    pixmap: Pixmap,
}

impl PixmapSurface {
    /// Create a transparent surface.
    pub fn new(width: u32, height: u32) -> SurfaceResult<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(SurfaceError::InvalidSize(width, height))?;
        Ok(Self { pixmap })
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Straight-alpha RGBA of one pixel.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        let color = self.pixmap.pixel(x, y)?.demultiply();
        Some([color.red(), color.green(), color.blue(), color.alpha()])
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixmap.fill(tiny_skia::Color::TRANSPARENT);
    }

    /// Encode the surface as PNG.
    pub fn encode_png(&self) -> SurfaceResult<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| SurfaceError::Encode(e.to_string()))
    }

    /// Write the surface to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> SurfaceResult<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| SurfaceError::Encode(e.to_string()))
    }
}

impl DrawSurface for PixmapSurface {
    fn fill_path(&mut self, path: &BezPath, brush: &TileBrush, anti_alias: bool) -> SurfaceResult<()> {
        let path = convert_path(path)
            .ok_or_else(|| SurfaceError::InvalidPath("path has no area".to_string()))?;
        let (width, height) = brush.tile_size();
        let tile = brush.raster_tile().ok_or_else(|| {
            SurfaceError::InvalidBrush(format!("no {}x{} raster tile", width, height))
        })?;

        let paint = Paint {
            shader: Pattern::new(
                tile.as_ref().as_ref(),
                SpreadMode::Repeat,
                FilterQuality::Nearest,
                1.0,
                Transform::identity(),
            ),
            anti_alias,
            ..Paint::default()
        };
        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }
}

/// Convert a kurbo path to a tiny-skia path.
fn convert_path(path: &BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for el in path.elements() {
        match *el {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(p1, p2) => {
                builder.quad_to(p1.x as f32, p1.y as f32, p2.x as f32, p2.y as f32)
            }
            PathEl::CurveTo(p1, p2, p3) => builder.cubic_to(
                p1.x as f32,
                p1.y as f32,
                p2.x as f32,
                p2.y as f32,
                p3.x as f32,
                p3.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

/// Premultiply straight-alpha RGBA8 pixels into a pattern pixmap.
///
/// Returns `None` for an empty size or a buffer that does not match it.
pub(crate) fn premultiplied_tile(width: u32, height: u32, pixels: &[u8]) -> Option<Pixmap> {
    let mut tile = Pixmap::new(width, height)?;
    if pixels.len() != tile.pixels().len() * 4 {
        log::warn!(
            "Tile pixel buffer is {} bytes, expected {} for {}x{}",
            pixels.len(),
            tile.pixels().len() * 4,
            width,
            height
        );
        return None;
    }
    for (dst, src) in tile.pixels_mut().iter_mut().zip(pixels.chunks_exact(4)) {
        *dst = ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Some(tile)
}
