//! # Texture Combinator
//!
//! A Rust library for assembling Minecraft-style block texture atlases.
//!
//! ## Overview
//!
//! Six face images (front, left, top, right, bottom, back) are resized to
//! 129x129 tiles and pasted into a fixed 385x385 RGBA canvas, which is then
//! written out as a PNG. A uniform mode replicates the front image onto every
//! face.
//!
//! ## Quick Start
//!
//! ```ignore
//! use texture_combinator::{Combinator, FaceAssignment, FaceId};
//!
//! let mut assignment = FaceAssignment::new();
//! assignment.load_face(FaceId::Front, "stone.png")?;
//!
//! // Uniform mode: only the front face is required
//! Combinator::new().export(&assignment, true, "Texture.png")?;
//! ```
//!
//! ## Step by step
//!
//! The workflow is validate, place, export. Validation reports the first
//! missing face so the caller can show one actionable message:
//!
//! ```ignore
//! use texture_combinator::{validate, AtlasCompositor};
//!
//! let plan = match validate(&assignment, false) {
//!     Ok(plan) => plan,
//!     Err(e) => return Err(e.user_message()),
//! };
//!
//! let mut compositor = AtlasCompositor::new();
//! plan.apply(&mut compositor);
//! compositor.export("Texture.png")?;
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod source;
pub mod atlas;
pub mod assignment;
pub mod combinator;
pub mod manifest;

// Re-export main types for convenience
pub use error::{CombinatorError, Result};
pub use types::FaceId;
pub use config::{CompositorConfig, ResampleFilter};
pub use source::SourceImage;
pub use atlas::{AtlasCompositor, FaceLayout, TileRegion};
pub use assignment::{validate, FaceAssignment, ResolvedPlan};
pub use combinator::Combinator;
pub use manifest::AtlasManifest;

/// Load a source image from a file path.
pub fn load_source_image<P: AsRef<std::path::Path>>(path: P) -> Result<SourceImage> {
    SourceImage::load(path)
}

/// Decode a source image from bytes (for WASM compatibility).
pub fn load_source_image_from_bytes(data: &[u8]) -> Result<SourceImage> {
    SourceImage::from_bytes(data)
}

#[cfg(feature = "wasm")]
pub mod wasm;
