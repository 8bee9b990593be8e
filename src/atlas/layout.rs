//! Fixed geometry of the block texture atlas.
//!
//! Faces are laid out in two columns of three rows on a 128 pixel pitch,
//! with every face resized to a 129 pixel tile. The extra pixel means
//! neighbouring tiles share a one pixel seam, and the 385 pixel canvas keeps
//! a one pixel margin past the last tile. This is the layout existing texture
//! sheets use and must be reproduced exactly.

use crate::types::FaceId;

/// Side length of one face tile in pixels.
pub const TILE_SIZE: u32 = 129;

/// Distance between the origins of neighbouring tiles.
pub const TILE_PITCH: u32 = 128;

/// Side length of the square atlas canvas in pixels.
pub const CANVAS_SIZE: u32 = 385;

/// Tile origins, indexed by [`FaceId::index`].
const OFFSETS: [(u32, u32); 6] = [
    (0, 0),     // Front
    (0, 128),   // Left
    (0, 256),   // Top
    (128, 0),   // Right
    (128, 128), // Bottom
    (128, 256), // Back
];

/// Every tile fits the canvas and no two tiles share a grid cell.
const fn layout_is_sound() -> bool {
    let mut i = 0;
    while i < OFFSETS.len() {
        let (x, y) = OFFSETS[i];
        if x + TILE_SIZE > CANVAS_SIZE || y + TILE_SIZE > CANVAS_SIZE {
            return false;
        }
        if x % TILE_PITCH != 0 || y % TILE_PITCH != 0 {
            return false;
        }

        let mut j = i + 1;
        while j < OFFSETS.len() {
            let (ox, oy) = OFFSETS[j];
            let cells_overlap = x < ox + TILE_PITCH
                && ox < x + TILE_PITCH
                && y < oy + TILE_PITCH
                && oy < y + TILE_PITCH;
            if cells_overlap {
                return false;
            }
            j += 1;
        }
        i += 1;
    }
    true
}

const _: () = assert!(layout_is_sound(), "face tiles must fit the canvas on disjoint grid cells");
const _: () = assert!(TILE_SIZE == TILE_PITCH + 1, "tiles overlap their neighbours by one seam pixel");

/// A square tile region within the atlas canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRegion {
    /// Left edge in canvas pixels.
    pub x: u32,
    /// Top edge in canvas pixels.
    pub y: u32,
    /// Side length in pixels.
    pub size: u32,
}

impl TileRegion {
    /// Check whether a canvas pixel lies inside this region.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.x + self.size && py >= self.y && py < self.y + self.size
    }
}

/// Canonical atlas geometry. Pure lookup, no state.
#[derive(Debug, Clone, Copy, Default)]
pub struct FaceLayout;

impl FaceLayout {
    /// Top-left corner of a face's tile.
    pub const fn offset_of(face: FaceId) -> (u32, u32) {
        OFFSETS[face.index()]
    }

    /// Side length every face is resized to.
    pub const fn tile_size() -> u32 {
        TILE_SIZE
    }

    /// Side length of the atlas canvas.
    pub const fn canvas_size() -> u32 {
        CANVAS_SIZE
    }

    /// Full tile region of a face.
    pub const fn region(face: FaceId) -> TileRegion {
        let (x, y) = Self::offset_of(face);
        TileRegion {
            x,
            y,
            size: TILE_SIZE,
        }
    }

    /// Grid cell of a face: its tile without the far seam row and column.
    ///
    /// Cells are pairwise disjoint; `layout_is_sound` checks this at compile
    /// time.
    pub const fn cell(face: FaceId) -> TileRegion {
        let (x, y) = Self::offset_of(face);
        TileRegion {
            x,
            y,
            size: TILE_PITCH,
        }
    }

    /// The face whose tile covers a canvas pixel, if any.
    ///
    /// Seam pixels belong to two tiles; the face that comes later in
    /// [`FaceId::VALIDATION_ORDER`] is returned since plans apply in that
    /// order and it is the one left visible.
    pub fn face_at(px: u32, py: u32) -> Option<FaceId> {
        FaceId::VALIDATION_ORDER
            .iter()
            .rev()
            .copied()
            .find(|face| Self::region(*face).contains(px, py))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_offsets() {
        assert_eq!(FaceLayout::offset_of(FaceId::Front), (0, 0));
        assert_eq!(FaceLayout::offset_of(FaceId::Left), (0, 128));
        assert_eq!(FaceLayout::offset_of(FaceId::Top), (0, 256));
        assert_eq!(FaceLayout::offset_of(FaceId::Right), (128, 0));
        assert_eq!(FaceLayout::offset_of(FaceId::Bottom), (128, 128));
        assert_eq!(FaceLayout::offset_of(FaceId::Back), (128, 256));
        assert_eq!(FaceLayout::tile_size(), 129);
        assert_eq!(FaceLayout::canvas_size(), 385);
    }

    #[test]
    fn test_offsets_are_unique() {
        for a in FaceId::ALL {
            for b in FaceId::ALL {
                if a != b {
                    assert_ne!(FaceLayout::offset_of(a), FaceLayout::offset_of(b));
                }
            }
        }
    }

    #[test]
    fn test_cells_do_not_overlap() {
        // Every pixel of a tile except its far seam row/column is owned by
        // exactly one face.
        for face in FaceId::ALL {
            let cell = FaceLayout::cell(face);
            for py in cell.y..cell.y + cell.size {
                for px in cell.x..cell.x + cell.size {
                    let owners = FaceId::ALL
                        .iter()
                        .filter(|f| FaceLayout::cell(**f).contains(px, py))
                        .count();
                    assert_eq!(owners, 1, "pixel ({px}, {py}) of {face}");
                }
            }
        }
    }

    #[test]
    fn test_cell_excludes_seam() {
        let cell = FaceLayout::cell(FaceId::Front);
        let tile = FaceLayout::region(FaceId::Front);
        assert!(tile.contains(TILE_PITCH, 0));
        assert!(!cell.contains(TILE_PITCH, 0));
        assert!(cell.contains(TILE_PITCH - 1, TILE_PITCH - 1));
    }

    #[test]
    fn test_tiles_fit_canvas() {
        for face in FaceId::ALL {
            let r = FaceLayout::region(face);
            assert!(r.x + r.size <= CANVAS_SIZE);
            assert!(r.y + r.size <= CANVAS_SIZE);
        }
    }

    #[test]
    fn test_face_at() {
        assert_eq!(FaceLayout::face_at(0, 0), Some(FaceId::Front));
        assert_eq!(FaceLayout::face_at(200, 300), Some(FaceId::Back));
        // Seam between Front and Right; Right is applied later.
        assert_eq!(FaceLayout::face_at(128, 10), Some(FaceId::Right));
        // Seam between Front and Left; Left is applied later.
        assert_eq!(FaceLayout::face_at(10, 128), Some(FaceId::Left));
        // Right-hand margin is never covered.
        assert_eq!(FaceLayout::face_at(300, 10), None);
        assert_eq!(FaceLayout::face_at(384, 384), None);
    }
}
