use crate::types::error::QuoteError;
use crate::types::money::Money;
use crate::types::quote_breakdown::{AddonLine, PlanLine};

pub struct TotalsResult {
    pub addons_total: Money,
    pub total: Money,
}

/// total := plan amount + sum of line totals, with every addition checked.
pub fn apply_totals(
    plan_line: &PlanLine,
    addon_lines: &[AddonLine],
) -> Result<TotalsResult, QuoteError> {
    let mut addons_total = Money::ZERO;

    for line in addon_lines {
        addons_total = addons_total
            .checked_add(line.line_total)
            .ok_or_else(|| QuoteError::AmountOverflow {
                context: format!("add-on subtotal at {}", line.key),
            })?;
    }

    let total = plan_line
        .amount
        .checked_add(addons_total)
        .ok_or_else(|| QuoteError::AmountOverflow {
            context: "quote total".to_string(),
        })?;

    Ok(TotalsResult { addons_total, total })
}
