//! Face identifiers for the six regions of a block texture atlas.

use crate::error::CombinatorError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The six faces of a block, following the cube unfold convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceId {
    Front,
    Left,
    Top,
    Right,
    Bottom,
    Back,
}

impl FaceId {
    /// All six faces in declaration order.
    pub const ALL: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Left,
        FaceId::Top,
        FaceId::Right,
        FaceId::Bottom,
        FaceId::Back,
    ];

    /// Order in which assignments are checked and plans are applied.
    pub const VALIDATION_ORDER: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Back,
        FaceId::Left,
        FaceId::Right,
        FaceId::Top,
        FaceId::Bottom,
    ];

    /// Position of this face in [`FaceId::ALL`].
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in manifests and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            FaceId::Front => "front",
            FaceId::Left => "left",
            FaceId::Top => "top",
            FaceId::Right => "right",
            FaceId::Bottom => "bottom",
            FaceId::Back => "back",
        }
    }
}

impl FromStr for FaceId {
    type Err = CombinatorError;

    /// Parse a face name (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "front" => Ok(FaceId::Front),
            "left" => Ok(FaceId::Left),
            "top" => Ok(FaceId::Top),
            "right" => Ok(FaceId::Right),
            "bottom" => Ok(FaceId::Bottom),
            "back" => Ok(FaceId::Back),
            _ => Err(CombinatorError::UnknownFace(s.to_string())),
        }
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceId::Front => write!(f, "Front"),
            FaceId::Left => write!(f, "Left"),
            FaceId::Top => write!(f, "Top"),
            FaceId::Right => write!(f, "Right"),
            FaceId::Bottom => write!(f, "Bottom"),
            FaceId::Back => write!(f, "Back"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("front".parse::<FaceId>().unwrap(), FaceId::Front);
        assert_eq!("BOTTOM".parse::<FaceId>().unwrap(), FaceId::Bottom);
        assert_eq!(" Back ".parse::<FaceId>().unwrap(), FaceId::Back);
    }

    #[test]
    fn test_parse_unknown_face() {
        let err = "side".parse::<FaceId>().unwrap_err();
        assert!(matches!(err, CombinatorError::UnknownFace(ref name) if name == "side"));
        assert!(err.to_string().contains("'front', 'left', 'top', 'right', 'bottom', 'back'"));
    }

    #[test]
    fn test_index_matches_all() {
        for (i, face) in FaceId::ALL.iter().enumerate() {
            assert_eq!(face.index(), i);
        }
    }

    #[test]
    fn test_validation_order_covers_every_face() {
        let mut sorted = FaceId::VALIDATION_ORDER;
        sorted.sort();
        assert_eq!(sorted, FaceId::ALL);
    }

    #[test]
    fn test_display_and_serde_names() {
        assert_eq!(FaceId::Right.to_string(), "Right");
        assert_eq!(serde_json::to_string(&FaceId::Right).unwrap(), "\"right\"");
        for face in FaceId::ALL {
            assert_eq!(face.name().parse::<FaceId>().unwrap(), face);
        }
    }
}
