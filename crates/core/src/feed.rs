//! List payloads from the content API.

use serde::{Deserialize, Serialize};

/// A list of records as returned by the content API.
///
/// Public room listings come back as a bare array while media searches wrap
/// their results in an `entries` envelope; both shapes are accepted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Feed<T> {
    Bare(Vec<T>),
    Wrapped {
        #[serde(default = "Vec::new")]
        entries: Vec<T>,
    },
}

impl<T> Feed<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Bare(items) | Self::Wrapped { entries: items } => items,
        }
    }
}

impl<T> Default for Feed<T> {
    fn default() -> Self {
        Self::Bare(Vec::new())
    }
}

impl<T: serde::de::DeserializeOwned> Feed<T> {
    /// Parse a feed from a JSON string.
    pub fn from_json(json: &str) -> crate::Result<Vec<T>> {
        let feed: Feed<T> = serde_json::from_str(json)?;
        Ok(feed.into_vec())
    }
}
