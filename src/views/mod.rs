// src/views/mod.rs
//! Stateful views over the repository. Each view is bound to a `ViewScope`
//! and rebuilds its derived values from scratch on every load.

pub mod buildings;
pub mod cart;
pub mod scope;
pub mod settings;

#[cfg(test)]
pub(crate) mod testing;

pub use buildings::BuildingsView;
pub use cart::{CartState, CartSync};
pub use scope::ViewScope;
pub use settings::{SettingsSnapshot, SettingsView};
