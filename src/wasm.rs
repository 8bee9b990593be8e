//! WASM bindings for texture-combinator.
//!
//! This module provides JavaScript-friendly APIs for use in the browser.

use crate::{Combinator, FaceAssignment, FaceId, SourceImage};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn init() {
    // Set up better panic messages in the browser console
    console_error_panic_hook::set_once();
}

fn parse_face(face: &str) -> Result<FaceId, JsError> {
    face.parse::<FaceId>()
        .map_err(|e| JsError::new(&e.to_string()))
}

/// One atlas editing session: assign faces, then export.
#[wasm_bindgen]
#[derive(Default)]
pub struct AtlasSession {
    assignment: FaceAssignment,
    uniform: bool,
}

#[wasm_bindgen]
impl AtlasSession {
    #[wasm_bindgen(constructor)]
    pub fn new() -> AtlasSession {
        AtlasSession::default()
    }

    /// Decode an image file's bytes and assign it to a face.
    pub fn assign(&mut self, face: &str, data: &[u8]) -> Result<(), JsError> {
        let face = parse_face(face)?;
        let image = SourceImage::from_bytes(data).map_err(|e| JsError::new(&e.to_string()))?;
        self.assignment.assign(face, image);
        Ok(())
    }

    /// Remove the image from a face.
    pub fn clear(&mut self, face: &str) -> Result<(), JsError> {
        let face = parse_face(face)?;
        self.assignment.clear(face);
        Ok(())
    }

    /// Check whether a face has an image.
    pub fn is_assigned(&self, face: &str) -> Result<bool, JsError> {
        Ok(self.assignment.is_assigned(parse_face(face)?))
    }

    #[wasm_bindgen(getter)]
    pub fn uniform(&self) -> bool {
        self.uniform
    }

    /// Use the front image for every face.
    #[wasm_bindgen(setter)]
    pub fn set_uniform(&mut self, value: bool) {
        self.uniform = value;
    }

    /// Validate, composite and encode the atlas as PNG bytes.
    ///
    /// A missing face fails with the face-specific user message.
    pub fn export_png(&self) -> Result<Vec<u8>, JsError> {
        let compositor = Combinator::new()
            .compose(&self.assignment, self.uniform)
            .map_err(|e| JsError::new(&e.user_message()))?;
        compositor
            .to_png()
            .map_err(|e| JsError::new(&e.to_string()))
    }
}
