//! The parsed atlas aggregate.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{CelId, Film, Rect, Wh};

/// Every film and the image metadata for one sprite sheet.
///
/// Built by [`crate::build::parse_atlas`]. The serialized form is the atlas
/// JSON consumed by renderers and round-trips through [`AtlasMeta::to_json`]
/// and [`AtlasMeta::from_json`] without loss.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtlasMeta {
    /// Aseprite version of the export. E.g., `1.2.8.1`.
    pub version: String,
    /// Atlas image basename. E.g., `atlas.png`.
    pub filename: String,
    /// Atlas image format. E.g., `RGBA8888` or `I8`.
    pub format: String,
    /// Atlas image dimensions.
    pub wh: Wh,
    #[serde(rename = "filmByID")]
    pub film_by_id: BTreeMap<String, Film>,
    /// Cel bounds indexed by [`CelId`] for fast source lookup.
    ///
    /// ```text
    /// 0 → frog idle cel 0
    /// 1 → frog idle cel 1
    /// 2 → cloud cel 0
    /// ```
    #[serde(rename = "celBoundsByID")]
    pub cel_bounds_by_id: Vec<Rect>,
}

impl AtlasMeta {
    pub fn film(&self, id: &str) -> Option<&Film> {
        self.film_by_id.get(id)
    }

    pub fn cel_bounds(&self, id: CelId) -> Option<&Rect> {
        self.cel_bounds_by_id.get(id.index())
    }

    /// Number of distinct cels in the atlas.
    pub fn cel_count(&self) -> usize {
        self.cel_bounds_by_id.len()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
