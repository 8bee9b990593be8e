//! Texture atlas compositing.
//!
//! This module holds the fixed face layout and the compositor that pastes
//! resized face images into it.

mod compositor;
pub mod layout;

pub use compositor::AtlasCompositor;
pub use layout::{FaceLayout, TileRegion};
