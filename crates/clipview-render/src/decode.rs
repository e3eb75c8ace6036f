//! Image decoding backed by the `image` crate.

use clipview_core::sample::scaled_dimension;
use clipview_core::source::{
    DecodeError, DecodeResult, DecodedImage, ImageDecoder, ImageFormat, ImageSize, ResourceId,
};
use image::ImageReader;
use image::imageops::FilterType;
use std::collections::HashMap;
use std::fs;
use std::io::Cursor;
use std::path::Path;

/// In-memory registry of encoded images keyed by resource id.
#[derive(Debug, Default)]
pub struct AssetDecoder {
    assets: HashMap<ResourceId, Vec<u8>>,
}

impl AssetDecoder {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register encoded image bytes, replacing any previous entry.
    pub fn insert(&mut self, id: ResourceId, bytes: impl Into<Vec<u8>>) {
        self.assets.insert(id, bytes.into());
    }

    /// Read an image file from disk and register it.
    pub fn load_file(&mut self, id: ResourceId, path: impl AsRef<Path>) -> DecodeResult<()> {
        let path = path.as_ref();
        let bytes = fs::read(path)
            .map_err(|e| DecodeError::Io(format!("{}: {}", path.display(), e)))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(ImageFormat::from_extension);
        if let (Some(extension), Some(content)) = (extension, ImageFormat::from_magic_bytes(&bytes)) {
            if extension != content {
                return Err(DecodeError::FormatMismatch {
                    path: path.display().to_string(),
                    extension,
                    content,
                });
            }
        }
        log::debug!("Loaded {} ({} bytes) as resource {}", path.display(), bytes.len(), id);
        self.insert(id, bytes);
        Ok(())
    }

    /// Whether a resource is registered.
    pub fn contains(&self, id: ResourceId) -> bool {
        self.assets.contains_key(&id)
    }

    /// Unregister a resource, returning its bytes.
    pub fn remove(&mut self, id: ResourceId) -> Option<Vec<u8>> {
        self.assets.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    fn bytes(&self, id: ResourceId) -> DecodeResult<&[u8]> {
        let bytes = self.assets.get(&id).ok_or(DecodeError::NotFound(id))?;
        if ImageFormat::from_magic_bytes(bytes).is_none() {
            return Err(DecodeError::UnsupportedFormat);
        }
        Ok(bytes)
    }
}

impl ImageDecoder for AssetDecoder {
    fn read_size(&self, id: ResourceId) -> DecodeResult<ImageSize> {
        let bytes = self.bytes(id)?;
        let (width, height) = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DecodeError::Io(e.to_string()))?
            .into_dimensions()
            .map_err(|e| DecodeError::Decode(e.to_string()))?;
        Ok(ImageSize::new(width, height))
    }

    fn decode(&self, id: ResourceId, sample_size: u32) -> DecodeResult<DecodedImage> {
        let bytes = self.bytes(id)?;
        let mut decoded =
            image::load_from_memory(bytes).map_err(|e| DecodeError::Decode(e.to_string()))?;

        if sample_size > 1 {
            let width = scaled_dimension(decoded.width(), sample_size);
            let height = scaled_dimension(decoded.height(), sample_size);
            decoded = decoded.resize_exact(width, height, FilterType::Triangle);
        }

        let rgba = decoded.to_rgba8();
        let (width, height) = rgba.dimensions();
        DecodedImage::from_rgba(id, sample_size, rgba.into_raw(), width, height)
    }
}
