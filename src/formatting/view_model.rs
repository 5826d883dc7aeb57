// src/formatting/view_model.rs
//! The canonical, render-ready form of a listing.
//!
//! `CanonicalListingView::build` composes the field parsers and formatters
//! into one immutable value. It holds no state and has no failure mode: every
//! column has a defined fallback, and the view is rebuilt from the raw record
//! on every render instead of being patched.

use super::numbers::{format_area, format_currency, format_percentage, format_price_per_area};
use crate::constants::{MAX_METRIC_SCORE, UNTITLED_LISTING};
use crate::model::{folded_discriminator, Category, RawListingRecord};
use crate::parsing::{parse_amenities, parse_apartment_sizes, parse_image_list};
use crate::types::{display_number, BuildingId, RawField};

#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalListingView {
    pub id: Option<BuildingId>,
    pub title: String,
    pub original_url: Option<String>,
    pub category: Option<Category>,
    pub images: Vec<String>,
    /// Only populated for residential buildings.
    pub apartment_sizes: Vec<f64>,
    pub price: String,
    pub price_per_area: Option<String>,
    pub area: String,
    pub location: Location,
    pub metrics: Vec<Metric>,
    pub amenities: Option<Vec<String>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub department: Option<String>,
    pub region: Option<String>,
}

impl Location {
    /// `"Lyon 69003, Département 69, Auvergne-Rhône-Alpes"`.
    ///
    /// Shown only when the city or the postal code is known; the
    /// department/region part is appended when present.
    pub fn summary_line(&self) -> Option<String> {
        let city_line = [self.city.as_deref(), self.postal_code.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");
        if city_line.is_empty() {
            return None;
        }

        let mut region_parts = Vec::new();
        if let Some(dept) = &self.department {
            region_parts.push(format!("Département {}", dept));
        }
        if let Some(region) = &self.region {
            region_parts.push(region.clone());
        }

        if region_parts.is_empty() {
            Some(city_line)
        } else {
            Some(format!("{}, {}", city_line, region_parts.join(", ")))
        }
    }
}

/// One rental/tax indicator, already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    pub title: &'static str,
    /// Formatted value, or `N/A`.
    pub value: String,
    /// Categorical score out of 10, when the backend computed one.
    pub score: Option<String>,
}

impl CanonicalListingView {
    pub fn build(record: &RawListingRecord) -> Self {
        let category = Category::from_discriminator(&record.category);
        let is_residential =
            folded_discriminator(&record.category).as_deref() == Some("residential");

        let apartment_sizes = if is_residential {
            parse_apartment_sizes(&record.flat_sizes)
        } else {
            Vec::new()
        };

        Self {
            id: record.id,
            title: record
                .title
                .as_text()
                .unwrap_or_else(|| UNTITLED_LISTING.to_string()),
            original_url: record.url.as_text(),
            category,
            images: parse_image_list(&record.images),
            apartment_sizes,
            price: format_currency(&record.price),
            price_per_area: format_price_per_area(&record.price, &record.surface_area),
            area: format_area(&record.surface_area),
            location: Location {
                city: record.city.as_text(),
                postal_code: record.postal_code.as_text(),
                department: record.department.as_text(),
                region: record.region.as_text(),
            },
            metrics: build_metrics(record),
            amenities: parse_amenities(&record.amenities),
            description: record.description.as_text(),
        }
    }

    /// First image, used as the card thumbnail and the gallery hero.
    pub fn main_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    pub fn category_label(&self) -> Option<&'static str> {
        self.category.map(|c| c.label())
    }
}

impl From<&RawListingRecord> for CanonicalListingView {
    fn from(record: &RawListingRecord) -> Self {
        Self::build(record)
    }
}

fn build_metrics(record: &RawListingRecord) -> Vec<Metric> {
    vec![
        Metric {
            title: "Council tax",
            value: format_percentage(&record.council_tax),
            score: None,
        },
        Metric {
            title: "Property tax",
            value: format_percentage(&record.property_tax),
            score: None,
        },
        Metric {
            title: "Vacancy rate",
            value: format_percentage(&record.vacancy),
            score: format_score(&record.vacancy_score),
        },
        Metric {
            title: "Median income",
            value: format_currency(&record.median_income),
            score: format_score(&record.income_score),
        },
    ]
}

/// Scores outside 0..=10 are treated as missing.
fn format_score(raw: &RawField) -> Option<String> {
    raw.as_number()
        .filter(|s| (0.0..=MAX_METRIC_SCORE).contains(s))
        .map(display_number)
}
