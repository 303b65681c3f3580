use serde::{Deserialize, Serialize};

use crate::catalog::validation::{validate_plans, CatalogError};
use crate::types::identifiers::PlanId;
use crate::types::money::Money;

/// A selectable base package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub id: PlanId,
    pub name: String,
    pub label: String,
    pub base_price: Money,
    /// Display only, never priced.
    #[serde(default)]
    pub features: Vec<String>,
}

impl Plan {
    pub fn new(
        id: impl Into<PlanId>,
        name: impl Into<String>,
        label: impl Into<String>,
        base_price: u64,
        features: Vec<String>,
    ) -> Self {
        Plan {
            id: id.into(),
            name: name.into(),
            label: label.into(),
            base_price: Money::new(base_price),
            features,
        }
    }
}

/// Ordered, immutable set of plans plus the plan a fresh selection starts on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanCatalog {
    default_plan: PlanId,
    plans: Vec<Plan>,
}

impl PlanCatalog {
    /// Validate and freeze a plan catalog on its own.
    pub fn new(default_plan: impl Into<PlanId>, plans: Vec<Plan>) -> Result<Self, CatalogError> {
        let default_plan = default_plan.into();
        validate_plans(&default_plan, &plans)?;
        Ok(PlanCatalog::from_parts(default_plan, plans))
    }

    /// Unchecked; callers validate first.
    pub(crate) fn from_parts(default_plan: PlanId, plans: Vec<Plan>) -> Self {
        PlanCatalog { default_plan, plans }
    }

    pub fn default_plan(&self) -> &PlanId {
        &self.default_plan
    }

    pub fn get(&self, id: &PlanId) -> Option<&Plan> {
        self.plans.iter().find(|plan| &plan.id == id)
    }

    pub fn contains(&self, id: &PlanId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Plan> {
        self.plans.iter()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
