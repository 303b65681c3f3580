use thiserror::Error;

use crate::catalog::AddonKind;
use crate::types::identifiers::{AddonKey, PlanId, VariantId};

/// The caller and the catalog are out of sync.
///
/// Never transient: retrying the same call yields the same error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    #[error("Unknown plan: {0}")]
    UnknownPlan(PlanId),

    #[error("Unknown add-on: {0}")]
    UnknownAddon(AddonKey),

    #[error("Add-on {key} is a {actual} add-on, operation requires {expected}")]
    InvalidKind {
        key: AddonKey,
        expected: AddonKind,
        actual: AddonKind,
    },

    #[error("Unknown variant {variant} for add-on {key}")]
    UnknownVariant { key: AddonKey, variant: VariantId },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    #[error("Amount overflow while pricing {context}")]
    AmountOverflow { context: String },
}
