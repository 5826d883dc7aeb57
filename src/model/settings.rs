// src/model/settings.rs
//! Source configuration: the search links the scraper walks.

use crate::types::{SearchLinkId, ValidationError};
use serde::{Deserialize, Serialize};

/// A configured search URL and the website it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchLink {
    pub id: SearchLinkId,
    pub link: String,
    pub source: String,
}

/// Body of `POST /settings/search-links`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewSearchLink {
    pub url: String,
    pub source: String,
}

impl NewSearchLink {
    /// Validates the add-source form.
    ///
    /// The URL is trimmed and required; the source is required and, when the
    /// list of known sources is available, must be one of them.
    pub fn validate(url: &str, source: &str, known: &[String]) -> Result<Self, ValidationError> {
        let url = url.trim();
        if url.is_empty() {
            return Err(ValidationError::EmptyField("Source URL is required."));
        }

        let source = source.trim();
        if source.is_empty() {
            return Err(ValidationError::EmptyField("Source website is required."));
        }

        if !known.is_empty() && !known.iter().any(|k| k == source) {
            return Err(ValidationError::UnknownSource {
                source_name: source.to_string(),
                known: known.to_vec(),
            });
        }

        Ok(Self {
            url: url.to_string(),
            source: source.to_string(),
        })
    }
}
