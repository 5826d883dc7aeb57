// src/api/mod.rs
//! Backend interaction: the ability to read and mutate listings, the cart
//! and the source configuration.
//!
//! Views depend on `ListingRepository`, never on HTTP details, so they can
//! be driven by the real client or an in-memory double.

pub mod client;
pub mod parser;

use crate::error::AppError;
use crate::export::ExportKind;
use crate::model::{NewSearchLink, RawListingRecord, SearchLink};
use crate::types::BuildingId;

#[async_trait::async_trait]
pub trait ListingRepository: Send + Sync {
    async fn list_buildings(&self) -> Result<Vec<RawListingRecord>, AppError>;

    /// `Ok(None)` when the backend has no such building.
    async fn get_building(&self, id: BuildingId) -> Result<Option<RawListingRecord>, AppError>;

    async fn get_cart(&self) -> Result<Vec<RawListingRecord>, AppError>;
    async fn add_to_cart(&self, id: BuildingId) -> Result<(), AppError>;
    async fn remove_from_cart(&self, id: BuildingId) -> Result<(), AppError>;

    /// Server-rendered CSV for the given export.
    async fn export_csv(&self, kind: ExportKind) -> Result<Vec<u8>, AppError>;

    async fn list_search_links(&self) -> Result<Vec<SearchLink>, AppError>;
    async fn list_sources(&self) -> Result<Vec<String>, AppError>;
    async fn add_search_link(&self, link: &NewSearchLink) -> Result<(), AppError>;
}

// Re-export the public interface
pub use client::{ApiResponse, ListingHttpClient, ResponseBody};
