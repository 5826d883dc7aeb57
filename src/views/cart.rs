// src/views/cart.rs
//! Cart synchronization: the server owns the cart, this side only mirrors it.
//!
//! Every mutation is followed by a full reload. Overlapping reloads are
//! ordered by a sequence number: only the newest issued reload may publish
//! its result.

use super::scope::ViewScope;
use crate::api::ListingRepository;
use crate::error::AppError;
use crate::model::RawListingRecord;
use crate::types::BuildingId;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum CartState {
    #[default]
    Idle,
    Loading,
    Loaded {
        items: Vec<RawListingRecord>,
        fetched_at: DateTime<Utc>,
    },
    /// Description of the failed load.
    Failed(String),
}

impl CartState {
    /// Items of a loaded cart; empty in every other state.
    pub fn items(&self) -> &[RawListingRecord] {
        match self {
            CartState::Loaded { items, .. } => items,
            _ => &[],
        }
    }

    pub fn contains(&self, id: BuildingId) -> bool {
        self.items().iter().any(|item| item.id == Some(id))
    }

    /// Items of a loaded cart, or the error a command should exit with.
    pub fn require_loaded(&self) -> Result<&[RawListingRecord], AppError> {
        match self {
            CartState::Loaded { items, .. } => Ok(items),
            CartState::Failed(message) => Err(AppError::CartUnavailable(message.clone())),
            CartState::Idle | CartState::Loading => Err(AppError::ViewClosed("cart load")),
        }
    }
}

pub struct CartSync {
    repository: Arc<dyn ListingRepository>,
    scope: ViewScope,
    state: Mutex<CartState>,
    issued: AtomicU64,
}

impl CartSync {
    pub fn new(repository: Arc<dyn ListingRepository>, scope: ViewScope) -> Self {
        Self {
            repository,
            scope,
            state: Mutex::new(CartState::Idle),
            issued: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> CartState {
        self.state.lock().clone()
    }

    /// Fetches the cart and publishes `Loaded` or `Failed`.
    ///
    /// Returns the state after the attempt. A result that lost the race to a
    /// newer reload, or that arrived after the scope closed, is discarded and
    /// the current state is returned unchanged.
    pub async fn load(&self) -> CartState {
        let ticket = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        if self.scope.is_closed() {
            return self.state();
        }
        *self.state.lock() = CartState::Loading;

        let Some(result) = self.scope.run(self.repository.get_cart()).await else {
            log::debug!("Cart reload #{} dropped: view closed", ticket);
            return self.state();
        };

        let next = match result {
            Ok(items) => {
                log::debug!("Cart reload #{} returned {} items", ticket, items.len());
                CartState::Loaded {
                    items,
                    fetched_at: Utc::now(),
                }
            }
            Err(e) => {
                log::warn!("Failed to load cart: {}", e);
                CartState::Failed(e.to_string())
            }
        };

        let mut state = self.state.lock();
        let newest = self.issued.load(Ordering::SeqCst);
        if ticket != newest {
            log::debug!("Discarding stale cart reload #{} (newest #{})", ticket, newest);
            return state.clone();
        }
        *state = next;
        state.clone()
    }

    /// Adds a building server-side, then reloads.
    ///
    /// On failure the error is returned and the cart state is left as is.
    pub async fn add(&self, id: BuildingId) -> Result<CartState, AppError> {
        self.scope
            .run(self.repository.add_to_cart(id))
            .await
            .ok_or(AppError::ViewClosed("add to cart"))??;
        Ok(self.load().await)
    }

    /// Removes a building server-side, then reloads.
    pub async fn remove(&self, id: BuildingId) -> Result<CartState, AppError> {
        self.scope
            .run(self.repository.remove_from_cart(id))
            .await
            .ok_or(AppError::ViewClosed("remove from cart"))??;
        Ok(self.load().await)
    }
}
