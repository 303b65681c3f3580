use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::types::identifiers::{AddonKey, CatalogVersion, PlanId, VariantId};
use crate::types::money::Money;

/// The base-plan line of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanLine {
    pub plan_id: PlanId,
    pub label: String,
    pub amount: Money,
}

/// One active add-on in a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddonLine {
    pub key: AddonKey,
    pub label: String,
    /// Only set for variant add-ons.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub variant: Option<VariantId>,
    pub unit_price: Money,
    /// Always 1 unless the add-on is counted.
    pub count: u32,
    pub line_total: Money,
}

/// The itemized result of pricing a selection.
///
/// Inactive add-ons have no line at all. Lines follow catalog order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    pub plan_line: PlanLine,
    pub addon_lines: Vec<AddonLine>,
    pub total: Money,
}

impl QuoteBreakdown {
    /// Plan line plus add-on lines.
    pub fn line_count(&self) -> usize {
        1 + self.addon_lines.len()
    }

    pub fn addon_line(&self, key: &AddonKey) -> Option<&AddonLine> {
        self.addon_lines.iter().find(|line| &line.key == key)
    }

    /// Opaque display text for the lead-capture flow.
    pub fn handoff(&self, catalog: &Catalog, prepared_at: DateTime<Utc>) -> QuoteHandoff {
        let plan_name = catalog
            .plans
            .get(&self.plan_line.plan_id)
            .map(|plan| plan.name.clone())
            .unwrap_or_else(|| self.plan_line.label.clone());

        QuoteHandoff {
            catalog_version: catalog.version().clone(),
            plan_name,
            total_display: self.total.to_string(),
            addon_labels: self.addon_lines.iter().map(|line| line.label.clone()).collect(),
            prepared_at,
        }
    }
}

/// What the configurator passes on when the visitor submits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteHandoff {
    pub catalog_version: CatalogVersion,
    pub plan_name: String,
    pub total_display: String,
    pub addon_labels: Vec<String>,
    pub prepared_at: DateTime<Utc>, // informational only
}
