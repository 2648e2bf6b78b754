//! Schema module - Raw Aseprite export types and the parsed atlas model.

pub mod aseprite;
mod atlas;
mod config;
mod film;
mod geometry;

pub use aseprite::{
    AsepriteFile, AsepriteFrame, AsepriteFrameTag, AsepriteKey, AsepriteMeta, AsepriteSlice,
};
pub use atlas::*;
pub use config::*;
pub use film::*;
pub use geometry::*;
