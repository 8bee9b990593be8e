//! Compositor configuration.

use image::imageops::FilterType;
use serde::{Deserialize, Serialize};

/// Resampling filter used when resizing a face to the tile size.
///
/// Both filters are deterministic: identical input bytes always produce
/// identical atlas bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResampleFilter {
    /// Nearest neighbour. Keeps pixel-art textures crisp.
    #[default]
    Nearest,
    /// Bilinear (triangle) interpolation.
    Bilinear,
}

impl ResampleFilter {
    /// The `image` crate filter this maps to.
    pub fn filter_type(self) -> FilterType {
        match self {
            ResampleFilter::Nearest => FilterType::Nearest,
            ResampleFilter::Bilinear => FilterType::Triangle,
        }
    }
}

/// Atlas compositor configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompositorConfig {
    /// Filter used to resize every face to the tile size.
    #[serde(default)]
    pub filter: ResampleFilter,
}

impl CompositorConfig {
    /// Create config with a specific resampling filter.
    pub fn with_filter(mut self, filter: ResampleFilter) -> Self {
        self.filter = filter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_nearest() {
        assert_eq!(CompositorConfig::default().filter, ResampleFilter::Nearest);
        assert_eq!(ResampleFilter::Nearest.filter_type(), FilterType::Nearest);
    }

    #[test]
    fn test_with_filter() {
        let config = CompositorConfig::default().with_filter(ResampleFilter::Bilinear);
        assert_eq!(config.filter.filter_type(), FilterType::Triangle);
    }

    #[test]
    fn test_deserialize_lowercase() {
        let config: CompositorConfig = serde_json::from_str(r#"{"filter":"bilinear"}"#).unwrap();
        assert_eq!(config.filter, ResampleFilter::Bilinear);
        let config: CompositorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.filter, ResampleFilter::Nearest);
    }
}
