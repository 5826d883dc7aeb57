// src/constants.rs
//! Domain constants: backend routes, display placeholders, export names.
//!
//! Reading these should tell you how the client talks to the backend and
//! what a user sees when a value is missing.

// ---------------------------------------------------------------------------
// Backend routes (relative to the configured base URL)
// ---------------------------------------------------------------------------

pub const BUILDINGS_PATH: &str = "/buildings";
pub const CART_PATH: &str = "/cart";
pub const EXPORT_BUILDINGS_PATH: &str = "/export/buildings";
pub const EXPORT_CART_PATH: &str = "/export/cart";
pub const SEARCH_LINKS_PATH: &str = "/settings/search-links";
pub const SOURCES_PATH: &str = "/settings/sources";

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

/// Per-request timeout used when the CLI does not override it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ---------------------------------------------------------------------------
// Content types
// ---------------------------------------------------------------------------

pub const CSV_CONTENT_TYPE: &str = "text/csv";
pub const JSON_CONTENT_TYPE: &str = "application/json";

// ---------------------------------------------------------------------------
// Display
// ---------------------------------------------------------------------------

/// Placeholder for any value that is missing or not a number.
pub const NOT_AVAILABLE: &str = "N/A";

pub const UNTITLED_LISTING: &str = "Untitled listing";

/// Currency symbol; the amount format is French regardless of the caller's locale.
pub const CURRENCY_SYMBOL: &str = "€";

/// French digit-group separator (narrow no-break space).
pub const GROUP_SEPARATOR: char = '\u{202F}';

/// Separator between an amount and its currency symbol (no-break space).
pub const CURRENCY_SPACING: char = '\u{00A0}';

pub const AREA_UNIT: &str = "m²";

/// Upper bound of the categorical metric scores.
pub const MAX_METRIC_SCORE: f64 = 10.0;

// ---------------------------------------------------------------------------
// Export
// ---------------------------------------------------------------------------

pub const BUILDINGS_EXPORT_FILENAME: &str = "buildings.csv";
pub const CART_EXPORT_FILENAME: &str = "cart.csv";

/// Maximum characters of an error body kept in a transport error.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
