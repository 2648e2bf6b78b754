//! Caller configuration for building an atlas.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Options applied when building an atlas.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Film IDs the atlas must contain, no more and no less. When absent,
    /// any set of tags is accepted and lookups are left to the caller.
    pub ids: Option<BTreeSet<String>>,
}

impl AtlasConfig {
    pub fn with_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: Some(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ids) = &self.ids {
            if ids.iter().any(|id| id.trim().is_empty()) {
                return Err(ConfigError::EmptyId);
            }
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Expected film IDs must not be blank")]
    EmptyId,
}
