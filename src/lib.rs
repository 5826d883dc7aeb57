// src/lib.rs
//! realestate_browser library: browse, inspect, cart and export scraped
//! real-estate listings served by a REST backend.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ClientConfig`
//! - **Domain model**: `RawListingRecord`, `SearchLink`, `RawField`, IDs
//! - **Normalization**: field parsers and number formatters
//! - **View model**: `CanonicalListingView` and the text renderer
//! - **API client**: `ListingRepository`, `ListingHttpClient`
//! - **Views**: `CartSync`, `BuildingsView`, `SettingsView`, `ViewScope`
//! - **Export**: `export_csv`, `ExportKind`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod export;
pub mod formatting;
pub mod model;
pub mod output;
pub mod parsing;
pub mod types;
pub mod views;

// --- Error Handling ---
pub use crate::error::{AppError, HttpStatusClass};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{ClientConfig, CommandLineInput};

// --- Domain Model ---
pub use crate::model::{Category, NewSearchLink, RawListingRecord, SearchLink};
pub use crate::types::{BaseUrl, BuildingId, RawField, SearchLinkId, SessionCookie};

// --- Normalization ---
pub use crate::formatting::{format_currency, format_percentage, format_price_per_area};
pub use crate::parsing::{parse_amenities, parse_apartment_sizes, parse_image_list};

// --- View Model ---
pub use crate::formatting::CanonicalListingView;

// --- API Client ---
pub use crate::api::{ListingHttpClient, ListingRepository, ResponseBody};

// --- Views ---
pub use crate::views::{BuildingsView, CartState, CartSync, SettingsView, ViewScope};

// --- Export ---
pub use crate::export::{export_csv, ExportDestination, ExportKind, ExportOutcome};
