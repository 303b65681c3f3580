pub mod error;
pub mod identifiers;
pub mod money;
pub mod quote_breakdown;

pub use error::{ConfigurationError, QuoteError};
pub use identifiers::{AddonKey, CatalogVersion, PlanId, VariantId};
pub use money::Money;
pub use quote_breakdown::{AddonLine, PlanLine, QuoteBreakdown, QuoteHandoff};
