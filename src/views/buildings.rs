// src/views/buildings.rs
//! List and detail views over the building catalogue.

use super::scope::ViewScope;
use crate::api::ListingRepository;
use crate::error::AppError;
use crate::formatting::CanonicalListingView;
use crate::types::BuildingId;
use std::sync::Arc;

pub struct BuildingsView {
    repository: Arc<dyn ListingRepository>,
    scope: ViewScope,
}

impl BuildingsView {
    pub fn new(repository: Arc<dyn ListingRepository>, scope: ViewScope) -> Self {
        Self { repository, scope }
    }

    /// Loads every building and builds its card view.
    pub async fn load_list(&self) -> Result<Vec<CanonicalListingView>, AppError> {
        let records = self
            .scope
            .run(self.repository.list_buildings())
            .await
            .ok_or(AppError::ViewClosed("building list"))??;
        log::debug!("Loaded {} buildings", records.len());
        Ok(records.iter().map(CanonicalListingView::build).collect())
    }

    /// Loads one building; `None` when the backend does not know it.
    pub async fn load_detail(
        &self,
        id: BuildingId,
    ) -> Result<Option<CanonicalListingView>, AppError> {
        let record = self
            .scope
            .run(self.repository.get_building(id))
            .await
            .ok_or(AppError::ViewClosed("building detail"))??;
        Ok(record.as_ref().map(CanonicalListingView::build))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::testing::InMemoryRepository;

    fn view(ids: &[i64]) -> (BuildingsView, ViewScope) {
        let scope = ViewScope::new();
        let repo = Arc::new(InMemoryRepository::with_buildings(ids));
        (BuildingsView::new(repo, scope.clone()), scope)
    }

    #[tokio::test]
    async fn list_builds_one_view_per_record() {
        let (view, _scope) = view(&[1, 2, 3]);
        let cards = view.load_list().await.unwrap();
        let titles: Vec<_> = cards.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Building 1", "Building 2", "Building 3"]);
    }

    #[tokio::test]
    async fn detail_of_unknown_building_is_none() {
        let (view, _scope) = view(&[1]);
        assert!(view.load_detail(BuildingId::new(9)).await.unwrap().is_none());
        let found = view.load_detail(BuildingId::new(1)).await.unwrap().unwrap();
        assert_eq!(found.id, Some(BuildingId::new(1)));
    }

    #[tokio::test]
    async fn closed_view_reports_cancellation() {
        let (view, scope) = view(&[1]);
        scope.close();
        assert!(matches!(
            view.load_list().await,
            Err(AppError::ViewClosed("building list"))
        ));
    }
}
