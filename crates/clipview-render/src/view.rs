//! Shape-clipped image view.
//!
//! The view holds the shape and image configuration set by the host, plus the
//! decoded image and brush it lazily builds on the first draw that knows the
//! surface size. Nothing here fails loudly: when the view cannot draw it reports
//! a [`SkipReason`] and leaves the surface untouched, and the next redraw retries.

use crate::brush::TileBrush;
use crate::surface::DrawSurface;
use clipview_core::attributes::ViewAttributes;
use clipview_core::sample::calculate_in_sample_size;
use clipview_core::shape::{ClipShape, CornerRadii};
use clipview_core::source::{DecodeResult, DecodedImage, ImageDecoder, ImageSize, ResourceId};
use kurbo::BezPath;

/// Why a render call drew nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// No shape has been selected.
    NoShape,
    /// No image source has been set.
    NoImageSource,
    /// The surface has a zero or negative dimension.
    NotLaidOut,
    /// The image could not be read or decoded.
    DecodeFailed,
    /// The surface rejected the fill.
    DrawFailed,
}

/// Result of a render call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderOutcome {
    Drawn,
    Skipped(SkipReason),
}

impl RenderOutcome {
    pub fn is_drawn(self) -> bool {
        matches!(self, RenderOutcome::Drawn)
    }
}

/// Image view that draws its image clipped to a shape.
pub struct ClipImageView<D: ImageDecoder> {
    decoder: D,
    attributes: ViewAttributes,
    shape: Option<ClipShape>,
    source: Option<ResourceId>,
    /// Native size of `source`, read on first draw.
    native_size: Option<ImageSize>,
    decoded: Option<DecodedImage>,
    brush: Option<TileBrush>,
    redraw_requested: bool,
}

impl<D: ImageDecoder> ClipImageView<D> {
    /// Create a view with default attributes.
    pub fn new(decoder: D) -> Self {
        Self::with_attributes(decoder, ViewAttributes::default())
    }

    /// Create a view from an attribute set.
    pub fn with_attributes(decoder: D, attributes: ViewAttributes) -> Self {
        let shape = attributes.initial_shape();
        Self {
            decoder,
            attributes,
            shape,
            source: None,
            native_size: None,
            decoded: None,
            brush: None,
            redraw_requested: false,
        }
    }

    /// Set the image to display.
    ///
    /// The previous decode is released right away; the new image is decoded on
    /// the next draw, once the surface size is known.
    pub fn set_image_source(&mut self, id: ResourceId) {
        self.release();
        self.native_size = None;
        self.source = Some(id);
        self.request_redraw();
    }

    /// Clip to the largest centred circle.
    pub fn select_circle(&mut self) {
        self.set_shape(ClipShape::Circle);
    }

    /// Clip to a rectangle with the same radius on every corner.
    pub fn select_rounded_rect(&mut self, radius: f64) {
        self.set_shape(ClipShape::RoundedRect(CornerRadii::uniform(radius)));
    }

    /// Clip to a rectangle with an independent radius per corner.
    pub fn select_rounded_corners(
        &mut self,
        top_left: f64,
        top_right: f64,
        bottom_left: f64,
        bottom_right: f64,
    ) {
        self.set_shape(ClipShape::RoundedRect(CornerRadii::per_corner(
            top_left,
            top_right,
            bottom_left,
            bottom_right,
        )));
    }

    /// Clip to a triangle with its apex at the top centre.
    pub fn select_triangle(&mut self) {
        self.set_shape(ClipShape::Triangle);
    }

    /// Clip to a caller-supplied closed path.
    ///
    /// An empty path is ignored and the current shape is kept; returns whether
    /// the path was accepted.
    pub fn select_custom_path(&mut self, path: BezPath) -> bool {
        match ClipShape::custom(path) {
            Some(shape) => {
                self.set_shape(shape);
                true
            }
            None => {
                log::debug!("Ignoring empty custom clip path");
                false
            }
        }
    }

    /// Select any shape. Empty custom paths are rejected as in [`Self::select_custom_path`].
    pub fn select_shape(&mut self, shape: ClipShape) -> bool {
        match shape {
            ClipShape::CustomPath(path) => self.select_custom_path(path),
            other => {
                self.set_shape(other);
                true
            }
        }
    }

    fn set_shape(&mut self, shape: ClipShape) {
        self.shape = Some(shape);
        self.request_redraw();
    }

    fn request_redraw(&mut self) {
        self.redraw_requested = true;
    }

    /// Draw the image clipped to the active shape on a `width` x `height` surface.
    pub fn render<S: DrawSurface + ?Sized>(
        &mut self,
        width: i32,
        height: i32,
        surface: &mut S,
    ) -> RenderOutcome {
        if self.shape.is_none() {
            return RenderOutcome::Skipped(SkipReason::NoShape);
        }
        let Some(source) = self.source else {
            return RenderOutcome::Skipped(SkipReason::NoImageSource);
        };
        if width <= 0 || height <= 0 {
            return RenderOutcome::Skipped(SkipReason::NotLaidOut);
        }
        let (width, height) = (width as u32, height as u32);

        if let Err(e) = self.prepare(source, width, height) {
            log::warn!("Skipping draw of image {}: {}", source, e);
            return RenderOutcome::Skipped(SkipReason::DecodeFailed);
        }
        let (Some(shape), Some(brush)) = (self.shape.as_ref(), self.brush.as_ref()) else {
            return RenderOutcome::Skipped(SkipReason::DecodeFailed);
        };

        let path = shape
            .geometry(width, height)
            .to_path(self.attributes.path_tolerance);
        match surface.fill_path(&path, brush, self.attributes.anti_alias) {
            Ok(()) => RenderOutcome::Drawn,
            Err(e) => {
                log::warn!("Failed to fill {} clip: {}", shape.kind().name(), e);
                RenderOutcome::Skipped(SkipReason::DrawFailed)
            }
        }
    }

    /// Make sure a decode and brush exist for `source` at the sample size this
    /// surface needs.
    fn prepare(&mut self, source: ResourceId, width: u32, height: u32) -> DecodeResult<()> {
        let native = match self.native_size {
            Some(size) => size,
            None => {
                let size = self.decoder.read_size(source)?;
                log::debug!("Image {} is {}x{}", source, size.width, size.height);
                self.native_size = Some(size);
                size
            }
        };

        let sample_size = calculate_in_sample_size(native.width, native.height, width, height);
        if let Some(decoded) = &self.decoded {
            if decoded.source() == source && decoded.sample_size() == sample_size {
                return Ok(());
            }
        }

        // Drop the superseded buffer before allocating its replacement.
        self.release();
        let decoded = self.decoder.decode(source, sample_size)?;
        log::debug!(
            "Decoded image {} at 1/{}: {}x{} ({} bytes)",
            source,
            sample_size,
            decoded.width(),
            decoded.height(),
            decoded.byte_len()
        );
        self.brush = Some(TileBrush::from_image(&decoded));
        self.decoded = Some(decoded);
        Ok(())
    }

    /// Release the decoded image and brush. They are rebuilt on the next draw.
    pub fn release(&mut self) {
        if let Some(old) = self.decoded.take() {
            log::debug!("Releasing decoded image {} ({} bytes)", old.source(), old.byte_len());
        }
        self.brush = None;
    }

    /// Return and clear the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn is_redraw_requested(&self) -> bool {
        self.redraw_requested
    }

    /// The active shape.
    pub fn shape(&self) -> Option<&ClipShape> {
        self.shape.as_ref()
    }

    /// The current image source.
    pub fn image_source(&self) -> Option<ResourceId> {
        self.source
    }

    /// The cached decode, if any.
    pub fn decoded_image(&self) -> Option<&DecodedImage> {
        self.decoded.as_ref()
    }

    /// The cached brush, if any.
    pub fn brush(&self) -> Option<&TileBrush> {
        self.brush.as_ref()
    }

    pub fn attributes(&self) -> &ViewAttributes {
        &self.attributes
    }

    pub fn decoder(&self) -> &D {
        &self.decoder
    }

    pub fn decoder_mut(&mut self) -> &mut D {
        &mut self.decoder
    }
}
