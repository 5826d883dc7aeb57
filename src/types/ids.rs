use super::{RawField, ValidationError};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Identifier of a building row (`a_id`) on the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BuildingId(i64);

impl BuildingId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Parses a building ID typed by the user or found in a URL path.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        input
            .trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidBuildingId(input.to_string()))
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Coerces a loosely-typed key. Integers, integral floats and numeric
    /// strings qualify; anything with a fractional part does not.
    pub fn from_raw(raw: &RawField) -> Option<Self> {
        let n = raw.as_number()?;
        (n.fract() == 0.0).then_some(Self(n as i64))
    }
}

impl fmt::Display for BuildingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for BuildingId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// Accepts `42`, `42.0` and `"42"`: some exports stringify or float the primary key.
impl<'de> Deserialize<'de> for BuildingId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawField::deserialize(deserializer)?;
        Self::from_raw(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid building ID: {:?}", raw))
        })
    }
}

/// Deserializes a record key leniently: a key that is not an integral number
/// becomes `None` instead of rejecting the whole record.
pub fn deserialize_lenient_id<'de, D>(deserializer: D) -> Result<Option<BuildingId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = RawField::deserialize(deserializer)?;
    let id = BuildingId::from_raw(&raw);
    if id.is_none() && !raw.is_falsy() {
        log::debug!("Ignoring unusable building ID {:?}", raw);
    }
    Ok(id)
}

/// Identifier of a configured search link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchLinkId(i64);

impl SearchLinkId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SearchLinkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
