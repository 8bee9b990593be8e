//! Atlas compositor: resize-then-paste of face images into a fixed canvas.

use super::layout::{FaceLayout, CANVAS_SIZE, TILE_SIZE};
use crate::config::CompositorConfig;
use crate::error::{CombinatorError, Result};
use crate::source::SourceImage;
use crate::types::FaceId;
use image::{imageops, ImageEncoder, RgbaImage};
use std::fs::Permissions;
use std::io::Write;
use std::path::Path;

/// Mode given to newly created atlas files.
#[cfg(unix)]
const NEW_FILE_MODE: u32 = 0o644;

/// Builds one atlas image from per-face source images.
///
/// The canvas starts fully transparent and is only cleared by [`reset`].
/// Use a fresh compositor per export so no pixels leak between runs.
///
/// [`reset`]: AtlasCompositor::reset
#[derive(Debug)]
pub struct AtlasCompositor {
    config: CompositorConfig,
    canvas: RgbaImage,
    placed: [bool; 6],
}

impl Default for AtlasCompositor {
    fn default() -> Self {
        Self::new()
    }
}

impl AtlasCompositor {
    /// Create a compositor with the default configuration.
    pub fn new() -> Self {
        Self::with_config(CompositorConfig::default())
    }

    /// Create a compositor with custom configuration.
    pub fn with_config(config: CompositorConfig) -> Self {
        Self {
            config,
            canvas: RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE),
            placed: [false; 6],
        }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Resize `image` to the tile size and paste it over the face's tile.
    ///
    /// The paste replaces colour and alpha; nothing is blended. Placing the
    /// same face again overwrites the previous image.
    pub fn place(&mut self, face: FaceId, image: &SourceImage) {
        let tile = image.resized(TILE_SIZE, self.config.filter.filter_type());
        let (x, y) = FaceLayout::offset_of(face);
        imageops::replace(&mut self.canvas, &tile, x as i64, y as i64);
        self.placed[face.index()] = true;

        log::debug!(
            "Placed {} ({}x{} -> {}x{}) at ({}, {})",
            face,
            image.width(),
            image.height(),
            TILE_SIZE,
            TILE_SIZE,
            x,
            y
        );
    }

    /// Read back the tile region of a face.
    pub fn tile(&self, face: FaceId) -> RgbaImage {
        let (x, y) = FaceLayout::offset_of(face);
        imageops::crop_imm(&self.canvas, x, y, TILE_SIZE, TILE_SIZE).to_image()
    }

    /// Check whether a face has been placed since creation or the last reset.
    pub fn is_placed(&self, face: FaceId) -> bool {
        self.placed[face.index()]
    }

    /// Faces placed so far, in declaration order.
    pub fn placed_faces(&self) -> Vec<FaceId> {
        FaceId::ALL
            .iter()
            .copied()
            .filter(|face| self.is_placed(*face))
            .collect()
    }

    /// Clear the canvas back to fully transparent.
    pub fn reset(&mut self) {
        self.canvas = RgbaImage::new(CANVAS_SIZE, CANVAS_SIZE);
        self.placed = [false; 6];
    }

    /// Borrow the canvas.
    pub fn canvas(&self) -> &RgbaImage {
        &self.canvas
    }

    /// Consume the compositor, returning the canvas.
    pub fn into_image(self) -> RgbaImage {
        self.canvas
    }

    /// Encode the canvas as PNG bytes.
    pub fn to_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        let cursor = std::io::Cursor::new(&mut bytes);
        let encoder = image::codecs::png::PngEncoder::new(cursor);

        encoder
            .write_image(
                self.canvas.as_raw(),
                self.canvas.width(),
                self.canvas.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| CombinatorError::Encode(format!("Failed to encode PNG: {}", e)))?;

        Ok(bytes)
    }

    /// Write the canvas as a PNG file.
    ///
    /// The file is written to a temporary sibling and renamed into place, so
    /// the destination either receives the complete atlas or is left as it
    /// was. Completeness of the atlas is not checked here.
    pub fn export<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let png = self.to_png()?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut tmp = tempfile::Builder::new()
            .prefix(".atlas-")
            .suffix(".png.tmp")
            .tempfile_in(dir)?;
        tmp.write_all(&png)?;
        if let Some(permissions) = export_permissions(path) {
            tmp.as_file().set_permissions(permissions)?;
        }
        tmp.as_file().sync_all()?;
        tmp.persist(path).map_err(|e| e.error)?;

        log::info!("Exported atlas ({} bytes) to {:?}", png.len(), path);
        Ok(())
    }
}

/// Permissions the exported file should end up with.
///
/// An existing destination keeps its permissions; a new file gets the usual
/// world-readable mode instead of the temp file's owner-only one.
fn export_permissions(path: &Path) -> Option<Permissions> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_file() => Some(meta.permissions()),
        _ => default_permissions(),
    }
}

#[cfg(unix)]
fn default_permissions() -> Option<Permissions> {
    use std::os::unix::fs::PermissionsExt;
    Some(Permissions::from_mode(NEW_FILE_MODE))
}

#[cfg(not(unix))]
fn default_permissions() -> Option<Permissions> {
    None
}
