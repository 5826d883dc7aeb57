// src/views/testing.rs
//! In-memory repository double for view tests.

use crate::api::ListingRepository;
use crate::error::AppError;
use crate::export::ExportKind;
use crate::model::{NewSearchLink, RawListingRecord, SearchLink};
use crate::types::{BuildingId, RawField, SearchLinkId};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::time::Duration;

#[derive(Default)]
pub struct InMemoryRepository {
    pub buildings: Mutex<Vec<RawListingRecord>>,
    pub cart: Mutex<Vec<BuildingId>>,
    pub links: Mutex<Vec<SearchLink>>,
    pub sources: Mutex<Vec<String>>,
    /// Delay applied to successive `get_cart` calls, front first.
    pub cart_delays: Mutex<VecDeque<Duration>>,
    pub fail_cart: Mutex<bool>,
    pub fail_mutations: Mutex<bool>,
    pub cart_loads: Mutex<usize>,
}

impl InMemoryRepository {
    pub fn with_buildings(ids: &[i64]) -> Self {
        let repo = Self::default();
        *repo.buildings.lock() = ids
            .iter()
            .map(|&id| {
                let mut record = RawListingRecord::with_id(BuildingId::new(id));
                record.title = RawField::from(format!("Building {}", id));
                record
            })
            .collect();
        repo
    }

    fn transport(status: u16, body: &str) -> AppError {
        AppError::Transport {
            status,
            body: body.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl ListingRepository for InMemoryRepository {
    async fn list_buildings(&self) -> Result<Vec<RawListingRecord>, AppError> {
        Ok(self.buildings.lock().clone())
    }

    async fn get_building(&self, id: BuildingId) -> Result<Option<RawListingRecord>, AppError> {
        Ok(self
            .buildings
            .lock()
            .iter()
            .find(|b| b.id == Some(id))
            .cloned())
    }

    async fn get_cart(&self) -> Result<Vec<RawListingRecord>, AppError> {
        *self.cart_loads.lock() += 1;
        let delay = self.cart_delays.lock().pop_front();
        // Snapshot before sleeping so a delayed load reports older contents.
        let ids = self.cart.lock().clone();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if *self.fail_cart.lock() {
            return Err(Self::transport(500, "cart unavailable"));
        }
        let buildings = self.buildings.lock();
        Ok(ids
            .iter()
            .filter_map(|id| buildings.iter().find(|b| b.id == Some(*id)).cloned())
            .collect())
    }

    async fn add_to_cart(&self, id: BuildingId) -> Result<(), AppError> {
        if *self.fail_mutations.lock() {
            return Err(Self::transport(500, "cannot add"));
        }
        let mut cart = self.cart.lock();
        if !cart.contains(&id) {
            cart.push(id);
        }
        Ok(())
    }

    async fn remove_from_cart(&self, id: BuildingId) -> Result<(), AppError> {
        if *self.fail_mutations.lock() {
            return Err(Self::transport(500, "cannot remove"));
        }
        self.cart.lock().retain(|c| *c != id);
        Ok(())
    }

    async fn export_csv(&self, kind: ExportKind) -> Result<Vec<u8>, AppError> {
        let ids: Vec<BuildingId> = match kind {
            ExportKind::AllBuildings => self.buildings.lock().iter().filter_map(|b| b.id).collect(),
            ExportKind::Cart => self.cart.lock().clone(),
        };
        let mut csv = String::from("a_id\n");
        for id in ids {
            csv.push_str(&format!("{}\n", id));
        }
        Ok(csv.into_bytes())
    }

    async fn list_search_links(&self) -> Result<Vec<SearchLink>, AppError> {
        Ok(self.links.lock().clone())
    }

    async fn list_sources(&self) -> Result<Vec<String>, AppError> {
        Ok(self.sources.lock().clone())
    }

    async fn add_search_link(&self, link: &NewSearchLink) -> Result<(), AppError> {
        if *self.fail_mutations.lock() {
            return Err(Self::transport(422, "invalid link"));
        }
        let mut links = self.links.lock();
        let id = SearchLinkId::new(links.len() as i64 + 1);
        links.push(SearchLink {
            id,
            link: link.url.clone(),
            source: link.source.clone(),
        });
        Ok(())
    }
}
