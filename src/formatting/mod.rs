//! Presentation layer: number formatting, the listing view model, and the
//! text renderer for each view.

pub mod numbers;
pub mod render;
pub mod view_model;

pub use numbers::{
    format_area, format_currency, format_euros, format_percentage, format_price_per_area,
};
pub use render::{
    render_building_list, render_card, render_cart, render_detail, render_search_links,
    render_sources,
};
pub use view_model::{CanonicalListingView, Location, Metric};
