//! Atlas validation errors.

use crate::schema::{Millis, Playback};

/// Reasons an Aseprite export is rejected. Building stops at the first one.
#[derive(Debug, thiserror::Error)]
pub enum AtlasError {
    #[error("Malformed atlas JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate ID in atlas: \"{tag}\"")]
    DuplicateTag { tag: String },

    #[error("Unknown ID in atlas: \"{id}\"")]
    UnknownId { id: String },

    #[error("Missing ID(s) in atlas: {}", quote_all(.ids))]
    MissingIds { ids: Vec<String> },

    #[error("Missing ID(s) for slice(s): {}", quote_all(.names))]
    OrphanSlices { names: Vec<String> },

    #[error("\"{direction}\" is not a direction (film \"{tag}\")")]
    UnknownDirection { tag: String, direction: String },

    #[error("Film \"{tag}\" repeat \"{repeat}\" is not a loop count")]
    InvalidRepeat { tag: String, repeat: String },

    #[error("Missing frame \"{key}\"")]
    MissingFrame { key: String },

    #[error("Frame \"{key}\" padding {w}x{h} is not evenly divisible")]
    UnevenPadding { key: String, w: i32, h: i32 },

    #[error("Frame \"{key}\" duration {duration} is not a valid duration")]
    InvalidDuration { key: String, duration: i64 },

    #[error("Film \"{tag}\" has no cels")]
    EmptyFilm { tag: String },

    #[error("Film \"{tag}\" cel {index} has infinite duration, not allowed for {direction} playback")]
    IntermediateInfiniteDuration {
        tag: String,
        index: usize,
        direction: Playback,
    },

    #[error("Total duration of film \"{tag}\" overflows")]
    DurationOverflow { tag: String },

    #[error("Zero total duration for film \"{tag}\" ({duration})")]
    ZeroTotalDuration { tag: String, duration: Millis },

    #[error("Cel sizes for film \"{tag}\" vary: cel {index} area {actual}, expected {expected}")]
    InconsistentCelArea {
        tag: String,
        index: usize,
        expected: i64,
        actual: i64,
    },
}

fn quote_all(values: &[String]) -> String {
    values
        .iter()
        .map(|value| format!("\"{value}\""))
        .collect::<Vec<_>>()
        .join(", ")
}
