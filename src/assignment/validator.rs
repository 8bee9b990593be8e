//! Assignment validation.

use super::FaceAssignment;
use crate::atlas::AtlasCompositor;
use crate::error::{CombinatorError, Result};
use crate::source::SourceImage;
use crate::types::FaceId;

/// Ordered (face, image) pairs ready to be placed.
///
/// Entries follow [`FaceId::VALIDATION_ORDER`]. In uniform mode every entry
/// borrows the same Front image.
#[derive(Debug, Clone)]
pub struct ResolvedPlan<'a> {
    entries: Vec<(FaceId, &'a SourceImage)>,
    uniform: bool,
}

impl<'a> ResolvedPlan<'a> {
    pub fn iter(&self) -> impl Iterator<Item = (FaceId, &'a SourceImage)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this plan replicates the Front image onto every face.
    pub fn is_uniform(&self) -> bool {
        self.uniform
    }

    /// The image that will be placed on a face.
    pub fn image_for(&self, face: FaceId) -> Option<&'a SourceImage> {
        self.entries
            .iter()
            .find(|(f, _)| *f == face)
            .map(|(_, image)| *image)
    }

    /// Place every entry, in order.
    pub fn apply(&self, compositor: &mut AtlasCompositor) {
        for (face, image) in self.iter() {
            compositor.place(face, image);
        }
    }
}

/// Check an assignment and resolve which image goes on each face.
///
/// In uniform mode only Front must be assigned. Otherwise faces are checked
/// in validation order and the first missing one is reported.
pub fn validate(assignment: &FaceAssignment, uniform: bool) -> Result<ResolvedPlan<'_>> {
    let entries: Vec<(FaceId, &SourceImage)> = if uniform {
        let front = assignment
            .get(FaceId::Front)
            .ok_or(CombinatorError::MissingFace(FaceId::Front))?;
        FaceId::VALIDATION_ORDER
            .iter()
            .map(|face| (*face, front))
            .collect()
    } else {
        FaceId::VALIDATION_ORDER
            .iter()
            .map(|face| {
                assignment
                    .get(*face)
                    .map(|image| (*face, image))
                    .ok_or(CombinatorError::MissingFace(*face))
            })
            .collect::<Result<Vec<_>>>()?
    };

    log::debug!(
        "Resolved {} plan for {} faces",
        if uniform { "uniform" } else { "per-face" },
        FaceId::VALIDATION_ORDER.len()
    );

    Ok(ResolvedPlan { entries, uniform })
}
