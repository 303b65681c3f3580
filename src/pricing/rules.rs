use crate::catalog::AddonDefinition;
use crate::selection::AddonSelection;
use crate::types::error::{ConfigurationError, QuoteError};
use crate::types::quote_breakdown::AddonLine;

/// Price one add-on against its selection record.
///
/// Per-kind rules:
/// - simple: line_total := unit_price
/// - count: line_total := unit_price * max(count, 1)
/// - variant: line_total := unit_price of the selected variant
///
/// Returns `Ok(None)` for an inactive add-on: it gets no line, not a zero line.
pub fn price_line(
    definition: &AddonDefinition,
    selection: &AddonSelection,
) -> Result<Option<AddonLine>, QuoteError> {
    if !selection.is_active() {
        return Ok(None);
    }

    let line = match (definition, selection) {
        (
            AddonDefinition::SimpleToggle {
                key,
                label,
                unit_price,
            },
            AddonSelection::SimpleToggle { .. },
        ) => AddonLine {
            key: key.clone(),
            label: label.clone(),
            variant: None,
            unit_price: *unit_price,
            count: 1,
            line_total: *unit_price,
        },

        (
            AddonDefinition::CountToggle {
                key,
                label,
                unit_price,
                ..
            },
            AddonSelection::CountToggle { count, .. },
        ) => {
            let count = (*count).max(1);
            let line_total = unit_price
                .checked_mul(count)
                .ok_or_else(|| QuoteError::AmountOverflow {
                    context: format!("add-on {key} x{count}"),
                })?;

            AddonLine {
                key: key.clone(),
                label: label.clone(),
                variant: None,
                unit_price: *unit_price,
                count,
                line_total,
            }
        }

        (
            AddonDefinition::VariantToggle { key, label, .. },
            AddonSelection::VariantToggle { variant, .. },
        ) => {
            let resolved = definition
                .find_variant(variant)
                .ok_or_else(|| ConfigurationError::UnknownVariant {
                    key: key.clone(),
                    variant: variant.clone(),
                })?;

            AddonLine {
                key: key.clone(),
                label: format!("{} ({})", label, resolved.label),
                variant: Some(resolved.id.clone()),
                unit_price: resolved.unit_price,
                count: 1,
                line_total: resolved.unit_price,
            }
        }

        (definition, selection) => {
            return Err(ConfigurationError::InvalidKind {
                key: definition.key().clone(),
                expected: definition.kind(),
                actual: selection.kind(),
            }
            .into());
        }
    };

    Ok(Some(line))
}
