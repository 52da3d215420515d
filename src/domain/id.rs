//! Sidebar identifiers
//!
//! ID Format: `sb-{12-char-hash}` (e.g., `sb-3f2a9c1d04be`).
//!
//! The hash is derived from the sidebar name plus creation timestamp, so two
//! sidebars created with the same name at different times get different ids.
//! Ids are the stable registration key for the widget host and never change
//! once assigned; the user-facing lookup key is the slug, not the id.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const HASH_LEN: usize = 12;

#[derive(Debug, Error, PartialEq)]
pub enum IdError {
    #[error("Invalid sidebar ID format: expected 'sb-{{12-char-hash}}', got '{0}'")]
    InvalidSidebarId(String),
}

/// Sidebar ID in the format `sb-{12-char-hash}`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SidebarId {
    hash: String,
}

impl SidebarId {
    /// Creates a new sidebar ID from name and timestamp
    pub fn generate(name: &str, timestamp: DateTime<Utc>) -> Self {
        let input = format!("{}{}", name, timestamp.timestamp_nanos_opt().unwrap_or(0));
        let hash = blake3::hash(input.as_bytes());
        Self {
            hash: hash.to_hex()[..HASH_LEN].to_string(),
        }
    }

    /// Returns the hash portion of the ID
    pub fn hash(&self) -> &str {
        &self.hash
    }
}

impl fmt::Display for SidebarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sb-{}", self.hash)
    }
}

impl FromStr for SidebarId {
    type Err = IdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let hash = s
            .strip_prefix("sb-")
            .ok_or_else(|| IdError::InvalidSidebarId(s.to_string()))?;

        if hash.len() != HASH_LEN || !hash.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(IdError::InvalidSidebarId(s.to_string()));
        }

        Ok(Self {
            hash: hash.to_string(),
        })
    }
}

impl TryFrom<String> for SidebarId {
    type Error = IdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SidebarId> for String {
    fn from(id: SidebarId) -> Self {
        id.to_string()
    }
}
