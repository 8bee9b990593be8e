//! JSON job descriptions.
//!
//! ```json
//! {
//!   "uniform": false,
//!   "filter": "nearest",
//!   "faces": { "front": "red.png", "back": "blue.png" },
//!   "output": "Texture.png"
//! }
//! ```

use crate::assignment::FaceAssignment;
use crate::config::{CompositorConfig, ResampleFilter};
use crate::error::Result;
use crate::types::FaceId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Faces, mode and output of one atlas export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtlasManifest {
    /// Replicate the front image onto every face.
    #[serde(default)]
    pub uniform: bool,
    #[serde(default)]
    pub filter: ResampleFilter,
    /// Image file per face. Relative paths resolve against the manifest's directory.
    #[serde(default)]
    pub faces: BTreeMap<FaceId, PathBuf>,
    /// Destination of the atlas.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
}

impl AtlasManifest {
    /// Parse a manifest from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a manifest file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Compositor settings requested by this manifest.
    pub fn config(&self) -> CompositorConfig {
        CompositorConfig::default().with_filter(self.filter)
    }

    /// Decode the listed face images; in uniform mode only Front is read.
    pub fn load_assignment<P: AsRef<Path>>(&self, base_dir: P) -> Result<FaceAssignment> {
        let base_dir = base_dir.as_ref();
        FaceAssignment::load_faces(
            self.faces.iter().map(|(face, path)| (*face, base_dir.join(path))),
            self.uniform,
        )
    }

    /// Output path resolved against `base_dir`, if one is set.
    pub fn output_path<P: AsRef<Path>>(&self, base_dir: P) -> Option<PathBuf> {
        self.output.as_ref().map(|output| base_dir.as_ref().join(output))
    }
}
