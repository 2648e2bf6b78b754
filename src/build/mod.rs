//! Build module - Validates an Aseprite export and assembles the atlas.
//!
//! Building is all-or-nothing: the first invalid tag, frame, or slice aborts
//! with an [`AtlasError`] and no partial [`crate::schema::AtlasMeta`] escapes.
//!
//! # Pipeline
//!
//! - **Parser** (`parser`): one film per frame tag, in tag order
//! - **Period normalizer** (`period`): uniform frequency per film
//! - **Cel IDs** (`cel_id`): contiguous IDs scoped to one build

mod cel_id;
mod error;
mod parser;
mod period;

pub use cel_id::CelIdFactory;
pub use error::AtlasError;
pub use parser::{parse_atlas, parse_atlas_json};
pub use period::{compute_period, gcd, normalize};
