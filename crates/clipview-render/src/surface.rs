//! Draw surface abstraction.

use crate::brush::TileBrush;
use kurbo::BezPath;
use thiserror::Error;

/// Surface errors.
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Invalid surface size: {0}x{1}")]
    InvalidSize(u32, u32),
    #[error("Invalid path: {0}")]
    InvalidPath(String),
    #[error("Invalid brush: {0}")]
    InvalidBrush(String),
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Result type for surface operations.
pub type SurfaceResult<T> = Result<T, SurfaceError>;

/// Trait for drawing backends.
///
/// Implementations can rasterise directly, build a GPU scene, or just record.
pub trait DrawSurface {
    /// Fill the closed `path` with `brush`. Coordinates are surface pixels.
    fn fill_path(&mut self, path: &BezPath, brush: &TileBrush, anti_alias: bool) -> SurfaceResult<()>;
}

/// A recorded drawing operation.
#[derive(Debug, Clone)]
pub enum DrawCommand {
    FillPath {
        path: BezPath,
        brush: TileBrush,
        anti_alias: bool,
    },
}

/// Surface that records commands instead of drawing them.
#[derive(Debug, Default)]
pub struct CommandRecorder {
    commands: Vec<DrawCommand>,
}

impl CommandRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded commands in order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl DrawSurface for CommandRecorder {
    fn fill_path(&mut self, path: &BezPath, brush: &TileBrush, anti_alias: bool) -> SurfaceResult<()> {
        self.commands.push(DrawCommand::FillPath {
            path: path.clone(),
            brush: brush.clone(),
            anti_alias,
        });
        Ok(())
    }
}
