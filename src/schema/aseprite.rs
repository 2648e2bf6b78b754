//! Raw Aseprite JSON export types.
//!
//! These mirror the sprite sheet metadata written by
//! `aseprite --batch --sheet-pack --list-tags --list-slices` with
//! `--filename-format='{title}--{tag}--{frame}'` and
//! `--tagname-format='{title}--{tag}'`. Nothing here is validated; the
//! builder in [`crate::build`] is responsible for that.
//!
//! All numbers are integers and all geometry is in screen coordinates (top-left
//! origin) in pixels.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Rect, Wh};

/// Raw frame duration Aseprite writes for a frame that should pause forever.
pub const ASEPRITE_INFINITE: i64 = 0xFFFF;

/// Separator between a frame tag and a frame number in frame keys.
pub const FRAME_KEY_SEPARATOR: &str = "--";

/// Top-level Aseprite export.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsepriteFile {
    pub meta: AsepriteMeta,
    /// Every frame of every packed file, keyed by `"{tag}--{frame}"`.
    pub frames: BTreeMap<String, AsepriteFrame>,
}

impl AsepriteFile {
    /// Look up the frame for a tag and absolute frame number.
    pub fn frame(&self, tag: &str, frame_number: u32) -> Option<&AsepriteFrame> {
        self.frames.get(&frame_key(tag, frame_number))
    }
}

/// Build the frame map key for a tag and absolute frame number.
pub fn frame_key(tag: &str, frame_number: u32) -> String {
    format!("{tag}{FRAME_KEY_SEPARATOR}{frame_number}")
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsepriteMeta {
    /// E.g., `http://www.aseprite.org/`.
    #[serde(default)]
    pub app: String,
    /// E.g., `1.2.8.1`.
    pub version: String,
    /// Output image basename. E.g., `atlas.png`.
    pub image: String,
    /// E.g., `RGBA8888` or `I8`.
    pub format: String,
    pub size: Wh,
    /// E.g., `1`.
    #[serde(default)]
    pub scale: String,
    #[serde(default)]
    pub frame_tags: Vec<AsepriteFrameTag>,
    #[serde(default)]
    pub slices: Vec<AsepriteSlice>,
}

/// A named, directed run of frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsepriteFrameTag {
    pub name: String,
    /// Inclusive starting frame number.
    pub from: u32,
    /// Inclusive ending frame number.
    pub to: u32,
    /// One of `forward`, `reverse`, `pingpong`, or `pingpong_reverse`.
    pub direction: String,
    /// Stringified play count. Absent means loop forever, `"0"` never plays
    /// through.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repeat: Option<String>,
    /// Tag color. Written by newer Aseprite versions.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// A single packed frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AsepriteFrame {
    /// Bounds within the atlas including any inner padding.
    pub frame: Rect,
    #[serde(default)]
    pub rotated: bool,
    #[serde(default)]
    pub trimmed: bool,
    /// Bounds within the source file, excluding padding.
    pub sprite_source_size: Rect,
    pub source_size: Wh,
    /// Exposure in milliseconds. [`ASEPRITE_INFINITE`] pauses forever.
    pub duration: i64,
}

/// A named sub-rectangle animated by keys.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsepriteSlice {
    /// By convention, the tag of the film the slice belongs to.
    pub name: String,
    /// `#rrggbbaa`.
    #[serde(default)]
    pub color: String,
    pub keys: Vec<AsepriteKey>,
}

/// Slice bounds effective from `frame` (relative to the tag start) until the
/// next key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsepriteKey {
    pub frame: u32,
    pub bounds: Rect,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub center: Option<Rect>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pivot: Option<AsepriteXy>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AsepriteXy {
    pub x: i32,
    pub y: i32,
}
