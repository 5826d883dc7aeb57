// src/views/settings.rs
//! Source configuration view: configured search links and the websites the
//! scraper supports.

use super::scope::ViewScope;
use crate::api::ListingRepository;
use crate::error::AppError;
use crate::model::{NewSearchLink, SearchLink};
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SettingsSnapshot {
    pub links: Vec<SearchLink>,
    pub sources: Vec<String>,
}

pub struct SettingsView {
    repository: Arc<dyn ListingRepository>,
    scope: ViewScope,
    snapshot: Mutex<SettingsSnapshot>,
}

impl SettingsView {
    pub fn new(repository: Arc<dyn ListingRepository>, scope: ViewScope) -> Self {
        Self {
            repository,
            scope,
            snapshot: Mutex::new(SettingsSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> SettingsSnapshot {
        self.snapshot.lock().clone()
    }

    /// Loads links and sources concurrently; either failure fails the load.
    pub async fn load(&self) -> Result<SettingsSnapshot, AppError> {
        let both = futures::future::try_join(
            self.repository.list_search_links(),
            self.repository.list_sources(),
        );
        let (links, sources) = self
            .scope
            .run(both)
            .await
            .ok_or(AppError::ViewClosed("settings load"))??;

        log::debug!("Loaded {} search links, {} sources", links.len(), sources.len());
        let mut snapshot = self.snapshot.lock();
        *snapshot = SettingsSnapshot { links, sources };
        Ok(snapshot.clone())
    }

    /// Validates the form against the known sources, posts it, then reloads.
    ///
    /// Validation failures never reach the backend.
    pub async fn add(&self, url: &str, source: &str) -> Result<SettingsSnapshot, AppError> {
        let known = self.snapshot.lock().sources.clone();
        let link = NewSearchLink::validate(url, source, &known)?;

        self.scope
            .run(self.repository.add_search_link(&link))
            .await
            .ok_or(AppError::ViewClosed("add search link"))??;

        self.load().await
    }
}
