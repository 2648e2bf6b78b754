//! Atlas Pack - Aseprite sprite sheet atlases and film playback.
//!
//! This crate turns the JSON metadata Aseprite exports alongside a packed
//! sprite sheet into a validated, immutable [`AtlasMeta`], and answers which
//! cel of a film is showing at a given time.
//!
//! # Architecture
//!
//! - `schema`: Raw Aseprite export types and the parsed atlas model
//! - `build`: Validation, film assembly, and period normalization
//! - `animation`: Pure time to cel mapping
//!
//! # Example
//!
//! ```rust,no_run
//! use atlas_pack::{Animator, parse_atlas_json};
//!
//! let json = std::fs::read_to_string("atlas.json").unwrap();
//! let atlas = parse_atlas_json(&json, None).unwrap();
//!
//! let film = atlas.film("frog--idle").unwrap();
//! let animator = Animator::new(film, 0.0);
//!
//! // 250 ms into playback.
//! let cel = animator.cel(250.0);
//! println!("Cel {:?} at {:?}", cel.id, cel.bounds);
//! ```

pub mod animation;
pub mod build;
pub mod schema;

// Re-export commonly used types
pub use animation::Animator;
pub use build::{AtlasError, parse_atlas, parse_atlas_json};
pub use schema::{AtlasConfig, AtlasMeta, Cel, CelId, Film, Millis, Playback, Rect, Wh};
