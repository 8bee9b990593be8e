//! Source image loading and handling.

use crate::error::{CombinatorError, Result};
use image::{imageops, RgbaImage};
use std::path::Path;

/// A decoded RGBA raster supplied for one face.
///
/// Always has non-zero dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceImage {
    image: RgbaImage,
}

impl SourceImage {
    /// Create a source image from RGBA data (4 bytes per pixel).
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(CombinatorError::InvalidImage(format!(
                "image has zero size ({}x{})",
                width, height
            )));
        }

        let expected = rgba_len(width, height)?;
        let actual = pixels.len();
        let image = RgbaImage::from_raw(width, height, pixels).ok_or_else(|| {
            CombinatorError::InvalidImage(format!(
                "expected {} bytes of RGBA data for {}x{}, got {}",
                expected, width, height, actual
            ))
        })?;

        Ok(Self { image })
    }

    /// Wrap an already decoded RGBA buffer.
    pub fn from_rgba(image: RgbaImage) -> Result<Self> {
        if image.width() == 0 || image.height() == 0 {
            return Err(CombinatorError::InvalidImage(format!(
                "image has zero size ({}x{})",
                image.width(),
                image.height()
            )));
        }
        Ok(Self { image })
    }

    /// Create a single-colour image.
    pub fn solid(width: u32, height: u32, color: [u8; 4]) -> Result<Self> {
        let pixels = color.iter().copied().cycle().take(rgba_len(width, height)?).collect();
        Self::new(width, height, pixels)
    }

    /// Decode an image from encoded bytes (PNG or JPEG).
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let decoded = image::load_from_memory(data).map_err(|source| CombinatorError::Decode {
            origin: "from memory".to_string(),
            source,
        })?;
        Self::from_rgba(decoded.to_rgba8())
    }

    /// Load and decode an image file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let decoded = image::open(path).map_err(|source| CombinatorError::Decode {
            origin: format!("{:?}", path),
            source,
        })?;
        log::debug!(
            "Loaded {:?} ({}x{})",
            path,
            decoded.width(),
            decoded.height()
        );
        Self::from_rgba(decoded.to_rgba8())
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Get a pixel at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> [u8; 4] {
        self.image.get_pixel(x, y).0
    }

    /// Check if this image has transparency.
    pub fn has_transparency(&self) -> bool {
        self.image.pixels().any(|pixel| pixel[3] < 255)
    }

    /// Borrow the underlying RGBA buffer.
    pub fn as_rgba(&self) -> &RgbaImage {
        &self.image
    }

    /// Resize to `size`x`size`, scaling both axes independently.
    pub fn resized(&self, size: u32, filter: imageops::FilterType) -> RgbaImage {
        imageops::resize(&self.image, size, size, filter)
    }
}

/// Byte length of an RGBA8 buffer, or `InvalidImage` if it cannot be addressed.
fn rgba_len(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| {
            CombinatorError::InvalidImage(format!("image is too large ({}x{})", width, height))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageEncoder;

    fn encode_png(width: u32, height: u32, pixels: &[u8]) -> Vec<u8> {
        let mut bytes = Vec::new();
        image::codecs::png::PngEncoder::new(std::io::Cursor::new(&mut bytes))
            .write_image(pixels, width, height, image::ExtendedColorType::Rgba8)
            .unwrap();
        bytes
    }

    #[test]
    fn test_get_pixel() {
        let img = SourceImage::new(
            2,
            2,
            vec![255, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 255, 255, 255, 255],
        )
        .unwrap();

        assert_eq!(img.get_pixel(0, 0), [255, 0, 0, 255]); // Red
        assert_eq!(img.get_pixel(1, 0), [0, 255, 0, 255]); // Green
        assert_eq!(img.get_pixel(0, 1), [0, 0, 255, 255]); // Blue
        assert_eq!(img.get_pixel(1, 1), [255, 255, 255, 255]); // White
    }

    #[test]
    fn test_rejects_zero_size() {
        let err = SourceImage::new(0, 4, Vec::new()).unwrap_err();
        assert!(matches!(err, CombinatorError::InvalidImage(_)));
        let err = SourceImage::from_rgba(RgbaImage::new(3, 0)).unwrap_err();
        assert!(matches!(err, CombinatorError::InvalidImage(_)));
    }

    #[test]
    fn test_rejects_short_buffer() {
        let err = SourceImage::new(2, 2, vec![0; 15]).unwrap_err();
        assert!(err.to_string().contains("expected 16 bytes"));
    }

    #[test]
    fn test_rejects_oversized_dimensions() {
        let err = SourceImage::new(u32::MAX, u32::MAX, Vec::new()).unwrap_err();
        assert!(matches!(err, CombinatorError::InvalidImage(_)));
        assert!(err.to_string().contains("too large"));

        let err = SourceImage::solid(u32::MAX, u32::MAX, [0, 0, 0, 255]).unwrap_err();
        assert!(matches!(err, CombinatorError::InvalidImage(_)));
    }

    #[test]
    fn test_has_transparency() {
        let opaque = SourceImage::solid(1, 1, [255, 0, 0, 255]).unwrap();
        assert!(!opaque.has_transparency());

        let transparent = SourceImage::solid(1, 1, [255, 0, 0, 128]).unwrap();
        assert!(transparent.has_transparency());
    }

    #[test]
    fn test_from_bytes_png() {
        let png = encode_png(1, 2, &[1, 2, 3, 4, 5, 6, 7, 8]);
        let img = SourceImage::from_bytes(&png).unwrap();
        assert_eq!((img.width(), img.height()), (1, 2));
        assert_eq!(img.get_pixel(0, 1), [5, 6, 7, 8]);
    }

    #[test]
    fn test_from_bytes_garbage() {
        let err = SourceImage::from_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, CombinatorError::Decode { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SourceImage::load(dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, CombinatorError::Decode { .. }));
    }

    #[test]
    fn test_resized_stretches() {
        let img = SourceImage::solid(64, 16, [9, 8, 7, 255]).unwrap();
        let tile = img.resized(129, imageops::FilterType::Nearest);
        assert_eq!(tile.dimensions(), (129, 129));
        assert!(tile.pixels().all(|p| p.0 == [9, 8, 7, 255]));
    }
}
