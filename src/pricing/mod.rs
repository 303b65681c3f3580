pub mod rules;
pub mod totals;

use tracing::debug;

use crate::catalog::{AddonCatalog, Catalog, PlanCatalog};
use crate::selection::SelectionState;
use crate::types::error::{ConfigurationError, QuoteError};
use crate::types::quote_breakdown::{PlanLine, QuoteBreakdown};
pub use rules::price_line;
pub use totals::{apply_totals, TotalsResult};

/// Price a selection.
///
/// Pure: reads the catalogs and the state, mutates neither, and returns the
/// same breakdown for the same inputs.
pub fn compute_quote(
    plans: &PlanCatalog,
    addons: &AddonCatalog,
    state: &SelectionState,
) -> Result<QuoteBreakdown, QuoteError> {
    // 1. Plan line
    let plan = plans
        .get(state.plan_id())
        .ok_or_else(|| ConfigurationError::UnknownPlan(state.plan_id().clone()))?;

    let plan_line = PlanLine {
        plan_id: plan.id.clone(),
        label: plan.name.clone(),
        amount: plan.base_price,
    };

    // 2. Add-on lines, in catalog order
    let mut addon_lines = Vec::new();
    for definition in addons.iter() {
        let selection = state
            .addon(definition.key())
            .ok_or_else(|| ConfigurationError::UnknownAddon(definition.key().clone()))?;

        if let Some(line) = price_line(definition, selection)? {
            addon_lines.push(line);
        }
    }

    // 3. Totals
    let TotalsResult { addons_total, total } = apply_totals(&plan_line, &addon_lines)?;

    debug!(
        plan = %plan_line.plan_id,
        addon_lines = addon_lines.len(),
        addons_total = addons_total.amount(),
        total = total.amount(),
        "quote computed"
    );

    Ok(QuoteBreakdown {
        plan_line,
        addon_lines,
        total,
    })
}

/// A calculator bound to one catalog.
pub struct PriceCalculator<'a> {
    catalog: &'a Catalog,
}

impl<'a> PriceCalculator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    pub fn quote(&self, state: &SelectionState) -> Result<QuoteBreakdown, QuoteError> {
        compute_quote(&self.catalog.plans, &self.catalog.addons, state)
    }
}
