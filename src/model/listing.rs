// src/model/listing.rs
//! Listing records as the backend serves them.

use crate::types::{BuildingId, RawField};
use serde::{Deserialize, Serialize};

/// A building row, schema-loose.
///
/// Field names follow the backend columns: `a_*` come from the scraped ad,
/// `c_*` from computed city statistics, `llm_*` from model-extracted
/// attributes. Every column except the key is a `RawField`, so no record is
/// rejected whatever encoding the scraper used. Unknown columns are ignored.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RawListingRecord {
    #[serde(
        rename = "a_id",
        default,
        deserialize_with = "crate::types::deserialize_lenient_id"
    )]
    pub id: Option<BuildingId>,
    #[serde(rename = "a_title", default)]
    pub title: RawField,
    #[serde(rename = "a_url", default)]
    pub url: RawField,
    #[serde(rename = "a_price", default)]
    pub price: RawField,
    #[serde(rename = "a_surfaceArea", default)]
    pub surface_area: RawField,
    #[serde(rename = "a_city", default)]
    pub city: RawField,
    #[serde(rename = "a_postalCode", default)]
    pub postal_code: RawField,
    #[serde(rename = "c_dept", default)]
    pub department: RawField,
    #[serde(rename = "c_region", default)]
    pub region: RawField,
    #[serde(rename = "llm_residential_office", default)]
    pub category: RawField,
    #[serde(rename = "a_images", default)]
    pub images: RawField,
    #[serde(rename = "llm_flatSizes", default)]
    pub flat_sizes: RawField,
    #[serde(rename = "llm_other", default)]
    pub amenities: RawField,
    #[serde(rename = "a_description", default)]
    pub description: RawField,
    #[serde(rename = "c_taxHab", default)]
    pub council_tax: RawField,
    #[serde(rename = "c_taxFonc", default)]
    pub property_tax: RawField,
    #[serde(rename = "c_vacancy", default)]
    pub vacancy: RawField,
    #[serde(rename = "c_vacancyCat", default)]
    pub vacancy_score: RawField,
    #[serde(rename = "c_revenue", default)]
    pub median_income: RawField,
    #[serde(rename = "c_revenueCat", default)]
    pub income_score: RawField,
}

impl RawListingRecord {
    /// Empty record carrying only an ID; handy for fixtures.
    pub fn with_id(id: BuildingId) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

/// Building category derived from `llm_residential_office`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Residential,
    Offices,
}

impl Category {
    /// Case-folds the discriminator: `office` means offices, any other
    /// non-empty value means residential, and a falsy value means no category.
    pub fn from_discriminator(raw: &RawField) -> Option<Self> {
        if raw.is_falsy() {
            return None;
        }
        match folded_discriminator(raw).as_deref() {
            Some("office") => Some(Category::Offices),
            _ => Some(Category::Residential),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Residential => "Residential",
            Category::Offices => "Offices",
        }
    }
}

/// Lower-cased, trimmed discriminator text, if the column holds text.
pub fn folded_discriminator(raw: &RawField) -> Option<String> {
    match raw {
        RawField::Text(s) => Some(s.trim().to_lowercase()),
        _ => None,
    }
}
