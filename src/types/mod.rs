use thiserror::Error;

mod domain_types;
mod fields;
mod ids;

pub use domain_types::*;
pub use fields::*;
pub use ids::*;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid building ID: {0}")]
    InvalidBuildingId(String),

    #[error("Invalid URL: {url} - {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Required form field left blank. The payload is the message shown inline.
    #[error("{0}")]
    EmptyField(&'static str),

    #[error("Unknown source '{source_name}' (known sources: {})", known.join(", "))]
    UnknownSource {
        source_name: String,
        known: Vec<String>,
    },

    #[error("Invalid session cookie: {reason}")]
    InvalidSessionCookie { reason: String },
}
