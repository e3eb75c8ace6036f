//! Vello scene backend.

use crate::brush::TileBrush;
use crate::surface::{DrawSurface, SurfaceResult};
use kurbo::{Affine, BezPath};
use peniko::{Brush, Fill};
use vello::Scene;

/// Vello always anti-aliases, so the flag is ignored here.
impl DrawSurface for Scene {
    fn fill_path(&mut self, path: &BezPath, brush: &TileBrush, _anti_alias: bool) -> SurfaceResult<()> {
        let paint = Brush::Image(brush.image_brush().clone());
        self.fill(Fill::NonZero, Affine::IDENTITY, &paint, None, path);
        Ok(())
    }
}
