//! Shared types used throughout the library.

mod face;

pub use face::FaceId;
