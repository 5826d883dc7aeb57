mod listing;
mod settings;

pub use listing::{folded_discriminator, Category, RawListingRecord};
pub use settings::{NewSearchLink, SearchLink};
