//! Image sources and the decoding seam.

use peniko::{Blob, ImageAlphaType, ImageData};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

/// Opaque handle of an image resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceId(pub u32);

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Decoding errors.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Image resource not found: {0}")]
    NotFound(ResourceId),
    #[error("Unsupported image format")]
    UnsupportedFormat,
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("{path}: extension says {extension:?} but content is {content:?}")]
    FormatMismatch {
        path: String,
        extension: ImageFormat,
        content: ImageFormat,
    },
}

/// Result type for decoding operations.
pub type DecodeResult<T> = Result<T, DecodeError>;

/// Native pixel dimensions of an undecoded image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageSize {
    pub width: u32,
    pub height: u32,
}

impl ImageSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Encoded image format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// PNG format.
    Png,
    /// JPEG format.
    Jpeg,
    /// WebP format.
    WebP,
}

impl ImageFormat {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            "webp" => Some(ImageFormat::WebP),
            _ => None,
        }
    }

    /// Detect format from magic bytes.
    pub fn from_magic_bytes(data: &[u8]) -> Option<Self> {
        if data.len() < 4 {
            return None;
        }

        // PNG: 89 50 4E 47
        if data.starts_with(&[0x89, 0x50, 0x4E, 0x47]) {
            return Some(ImageFormat::Png);
        }

        // JPEG: FF D8 FF
        if data.starts_with(&[0xFF, 0xD8, 0xFF]) {
            return Some(ImageFormat::Jpeg);
        }

        // WebP: RIFF....WEBP
        if data.len() >= 12 && &data[0..4] == b"RIFF" && &data[8..12] == b"WEBP" {
            return Some(ImageFormat::WebP);
        }

        None
    }
}

/// Pixels of an image decoded at a reduced resolution.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    source: ResourceId,
    sample_size: u32,
    image: ImageData,
}

impl DecodedImage {
    /// Wrap straight-alpha RGBA8 pixels.
    pub fn from_rgba(
        source: ResourceId,
        sample_size: u32,
        pixels: Vec<u8>,
        width: u32,
        height: u32,
    ) -> DecodeResult<Self> {
        let expected_len = width as usize * height as usize * 4;
        if pixels.len() != expected_len {
            return Err(DecodeError::Decode(format!(
                "Invalid pixel data length: expected {}, got {}",
                expected_len,
                pixels.len()
            )));
        }
        Ok(Self {
            source,
            sample_size,
            image: ImageData {
                data: Blob::new(Arc::new(pixels)),
                format: peniko::ImageFormat::Rgba8,
                alpha_type: ImageAlphaType::Alpha,
                width,
                height,
            },
        })
    }

    /// Resource this image was decoded from.
    pub fn source(&self) -> ResourceId {
        self.source
    }

    /// Sample size the image was decoded at.
    pub fn sample_size(&self) -> u32 {
        self.sample_size
    }

    pub fn width(&self) -> u32 {
        self.image.width
    }

    pub fn height(&self) -> u32 {
        self.image.height
    }

    /// Raw RGBA8 pixels, row-major, straight alpha.
    pub fn pixels(&self) -> &[u8] {
        self.image.data.data()
    }

    /// Size of the pixel buffer in bytes.
    pub fn byte_len(&self) -> usize {
        self.pixels().len()
    }

    /// The pixels as peniko image data.
    pub fn image_data(&self) -> &ImageData {
        &self.image
    }
}

/// Image decoding service the view calls into.
///
/// `read_size` must not decode pixels; `decode` reduces each dimension by
/// `sample_size` (a power of two).
pub trait ImageDecoder {
    /// Read the native dimensions of an image.
    fn read_size(&self, id: ResourceId) -> DecodeResult<ImageSize>;

    /// Decode an image at `1 / sample_size` of its native resolution.
    fn decode(&self, id: ResourceId, sample_size: u32) -> DecodeResult<DecodedImage>;
}
