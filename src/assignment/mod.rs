//! Face assignments and the validation gate in front of compositing.
//!
//! A [`FaceAssignment`] is what the UI layer builds as the user drops images
//! onto faces. [`validate`] turns it into a [`ResolvedPlan`] or reports the
//! first missing face.

mod validator;

pub use validator::{validate, ResolvedPlan};

use crate::error::{CombinatorError, Result};
use crate::source::SourceImage;
use crate::types::FaceId;
use std::path::Path;

/// Mapping of each face to an optional source image.
#[derive(Debug, Clone, Default)]
pub struct FaceAssignment {
    slots: [Option<SourceImage>; 6],
}

impl FaceAssignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign an image to a face, returning the image it replaces.
    pub fn assign(&mut self, face: FaceId, image: SourceImage) -> Option<SourceImage> {
        self.slots[face.index()].replace(image)
    }

    /// Builder-style [`assign`](Self::assign).
    pub fn with(mut self, face: FaceId, image: SourceImage) -> Self {
        self.assign(face, image);
        self
    }

    /// Remove the image assigned to a face.
    pub fn clear(&mut self, face: FaceId) -> Option<SourceImage> {
        self.slots[face.index()].take()
    }

    /// Get the image assigned to a face.
    pub fn get(&self, face: FaceId) -> Option<&SourceImage> {
        self.slots[face.index()].as_ref()
    }

    pub fn is_assigned(&self, face: FaceId) -> bool {
        self.slots[face.index()].is_some()
    }

    /// Number of faces with an image.
    pub fn assigned_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Faces without an image, in validation order.
    pub fn missing(&self) -> impl Iterator<Item = FaceId> + '_ {
        FaceId::VALIDATION_ORDER
            .iter()
            .copied()
            .filter(|face| !self.is_assigned(*face))
    }

    /// Decode an image file and assign it to a face.
    ///
    /// On failure the face keeps its current image and the error names the
    /// face that could not be loaded.
    pub fn load_face<P: AsRef<Path>>(&mut self, face: FaceId, path: P) -> Result<()> {
        let path = path.as_ref();
        let image = SourceImage::load(path).map_err(|e| match e {
            CombinatorError::Decode { source, .. } => CombinatorError::Decode {
                origin: format!("{:?} for the {} face", path, face),
                source,
            },
            other => other,
        })?;
        self.assign(face, image);
        Ok(())
    }

    /// Decode the image files for a set of faces.
    ///
    /// In uniform mode only the Front file is read, since no other face
    /// ends up in the atlas.
    pub fn load_faces<I, P>(faces: I, uniform: bool) -> Result<Self>
    where
        I: IntoIterator<Item = (FaceId, P)>,
        P: AsRef<Path>,
    {
        let mut assignment = Self::new();
        for (face, path) in faces {
            if uniform && face != FaceId::Front {
                log::debug!("Skipping {} face in uniform mode", face);
                continue;
            }
            assignment.load_face(face, path)?;
        }
        Ok(assignment)
    }
}
