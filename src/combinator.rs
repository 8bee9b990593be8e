//! The validate, place and export workflow.

use crate::assignment::{validate, FaceAssignment};
use crate::atlas::AtlasCompositor;
use crate::config::CompositorConfig;
use crate::error::Result;
use std::path::Path;

/// Runs a whole export: validate the assignment, composite every face into a
/// fresh canvas, and optionally write the PNG.
#[derive(Debug, Clone, Default)]
pub struct Combinator {
    config: CompositorConfig,
}

impl Combinator {
    /// Create a combinator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a combinator with custom configuration.
    pub fn with_config(config: CompositorConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &CompositorConfig {
        &self.config
    }

    /// Validate and composite an assignment into a new compositor.
    pub fn compose(&self, assignment: &FaceAssignment, uniform: bool) -> Result<AtlasCompositor> {
        let plan = validate(assignment, uniform)?;

        let mut compositor = AtlasCompositor::with_config(self.config.clone());
        plan.apply(&mut compositor);
        Ok(compositor)
    }

    /// Validate, composite and write the atlas to `path`.
    ///
    /// Nothing is written when validation fails.
    pub fn export<P: AsRef<Path>>(
        &self,
        assignment: &FaceAssignment,
        uniform: bool,
        path: P,
    ) -> Result<AtlasCompositor> {
        let compositor = self.compose(assignment, uniform)?;
        compositor.export(path)?;
        Ok(compositor)
    }
}
