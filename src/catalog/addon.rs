use std::fmt;

use serde::{Deserialize, Serialize};

use crate::catalog::validation::{validate_addons, CatalogError};
use crate::types::identifiers::{AddonKey, VariantId};
use crate::types::money::Money;

/// The pricing shape of an add-on, without its data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AddonKind {
    SimpleToggle,
    VariantToggle,
    CountToggle,
}

impl AddonKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AddonKind::SimpleToggle => "simple_toggle",
            AddonKind::VariantToggle => "variant_toggle",
            AddonKind::CountToggle => "count_toggle",
        }
    }
}

impl fmt::Display for AddonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One mutually exclusive priced option of a variant add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub label: String,
    pub unit_price: Money,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,
}

impl Variant {
    pub fn new(id: impl Into<VariantId>, label: impl Into<String>, unit_price: u64) -> Self {
        Variant {
            id: id.into(),
            label: label.into(),
            unit_price: Money::new(unit_price),
            default: false,
        }
    }

    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }
}

/// An optional extra layered on top of a plan.
///
/// Each kind carries exactly the fields it is priced by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AddonDefinition {
    SimpleToggle {
        key: AddonKey,
        label: String,
        unit_price: Money,
    },
    VariantToggle {
        key: AddonKey,
        label: String,
        variants: Vec<Variant>,
    },
    CountToggle {
        key: AddonKey,
        label: String,
        unit_price: Money,
        default_count: u32,
    },
}

impl AddonDefinition {
    pub fn simple(key: impl Into<AddonKey>, label: impl Into<String>, unit_price: u64) -> Self {
        AddonDefinition::SimpleToggle {
            key: key.into(),
            label: label.into(),
            unit_price: Money::new(unit_price),
        }
    }

    pub fn variant(
        key: impl Into<AddonKey>,
        label: impl Into<String>,
        variants: Vec<Variant>,
    ) -> Self {
        AddonDefinition::VariantToggle {
            key: key.into(),
            label: label.into(),
            variants,
        }
    }

    pub fn count(
        key: impl Into<AddonKey>,
        label: impl Into<String>,
        unit_price: u64,
        default_count: u32,
    ) -> Self {
        AddonDefinition::CountToggle {
            key: key.into(),
            label: label.into(),
            unit_price: Money::new(unit_price),
            default_count,
        }
    }

    pub fn key(&self) -> &AddonKey {
        match self {
            AddonDefinition::SimpleToggle { key, .. }
            | AddonDefinition::VariantToggle { key, .. }
            | AddonDefinition::CountToggle { key, .. } => key,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            AddonDefinition::SimpleToggle { label, .. }
            | AddonDefinition::VariantToggle { label, .. }
            | AddonDefinition::CountToggle { label, .. } => label,
        }
    }

    pub fn kind(&self) -> AddonKind {
        match self {
            AddonDefinition::SimpleToggle { .. } => AddonKind::SimpleToggle,
            AddonDefinition::VariantToggle { .. } => AddonKind::VariantToggle,
            AddonDefinition::CountToggle { .. } => AddonKind::CountToggle,
        }
    }

    /// The designated default variant. `None` for non-variant add-ons.
    pub fn default_variant(&self) -> Option<&Variant> {
        match self {
            AddonDefinition::VariantToggle { variants, .. } => variants.iter().find(|v| v.default),
            _ => None,
        }
    }

    pub fn find_variant(&self, id: &VariantId) -> Option<&Variant> {
        match self {
            AddonDefinition::VariantToggle { variants, .. } => {
                variants.iter().find(|v| &v.id == id)
            }
            _ => None,
        }
    }
}

/// Ordered, immutable set of add-on definitions. Iteration follows catalog
/// order, which is also the order of lines in a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddonCatalog {
    addons: Vec<AddonDefinition>,
}

impl AddonCatalog {
    /// Validate and freeze an add-on catalog on its own.
    pub fn new(addons: Vec<AddonDefinition>) -> Result<Self, CatalogError> {
        validate_addons(&addons)?;
        Ok(AddonCatalog::from_parts(addons))
    }

    /// Unchecked; callers validate first.
    pub(crate) fn from_parts(addons: Vec<AddonDefinition>) -> Self {
        AddonCatalog { addons }
    }

    pub fn get(&self, key: &AddonKey) -> Option<&AddonDefinition> {
        self.addons.iter().find(|addon| addon.key() == key)
    }

    pub fn contains(&self, key: &AddonKey) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AddonDefinition> {
        self.addons.iter()
    }

    pub fn len(&self) -> usize {
        self.addons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.addons.is_empty()
    }
}
