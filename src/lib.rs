//! Deterministic package and add-on pricing configurator.
//!
//! `quote-core` holds the immutable plan and add-on catalogs, the selection
//! state a configurator UI mutates, and the pure calculator that turns a
//! selection into an itemized quote. Identical inputs always produce
//! identical quotes, byte-for-byte.

pub mod catalog;
pub mod pricing;
pub mod selection;
pub mod types;

pub use catalog::{Catalog, CatalogError};
pub use pricing::{compute_quote, PriceCalculator};
pub use selection::SelectionState;
pub use types::{ConfigurationError, QuoteBreakdown, QuoteError};
