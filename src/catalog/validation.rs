use std::collections::BTreeSet;

use thiserror::Error;

use crate::catalog::addon::AddonDefinition;
use crate::catalog::plan::Plan;
use crate::catalog::CatalogConfig;
use crate::types::identifiers::PlanId;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Plan catalog is empty")]
    EmptyPlanCatalog,
    #[error("Duplicate plan id: {0}")]
    DuplicatePlan(String),
    #[error("Default plan is not in the catalog: {0}")]
    UnknownDefaultPlan(String),
    #[error("Duplicate add-on key: {0}")]
    DuplicateAddon(String),
    #[error("Variant add-on {0} has no variants")]
    NoVariants(String),
    #[error("Duplicate variant {variant} in add-on {key}")]
    DuplicateVariant { key: String, variant: String },
    #[error("Add-on {key} must have exactly one default variant, found {count}")]
    DefaultVariantCount { key: String, count: usize },
    #[error("Add-on {key} has default count {count}, must be at least 1")]
    InvalidDefaultCount { key: String, count: u32 },
}

pub(crate) fn validate(config: &CatalogConfig) -> Result<(), CatalogError> {
    validate_plans(&config.default_plan, &config.plans)?;
    validate_addons(&config.addons)
}

pub(crate) fn validate_plans(default_plan: &PlanId, plans: &[Plan]) -> Result<(), CatalogError> {
    if plans.is_empty() {
        return Err(CatalogError::EmptyPlanCatalog);
    }

    let mut plan_ids = BTreeSet::new();
    for plan in plans {
        if !plan_ids.insert(plan.id.as_str()) {
            return Err(CatalogError::DuplicatePlan(plan.id.as_str().to_string()));
        }
    }

    if !plan_ids.contains(default_plan.as_str()) {
        return Err(CatalogError::UnknownDefaultPlan(
            default_plan.as_str().to_string(),
        ));
    }

    Ok(())
}

pub(crate) fn validate_addons(addons: &[AddonDefinition]) -> Result<(), CatalogError> {
    let mut addon_keys = BTreeSet::new();
    for addon in addons {
        if !addon_keys.insert(addon.key().as_str()) {
            return Err(CatalogError::DuplicateAddon(addon.key().as_str().to_string()));
        }
        validate_addon(addon)?;
    }

    Ok(())
}

fn validate_addon(addon: &AddonDefinition) -> Result<(), CatalogError> {
    match addon {
        AddonDefinition::SimpleToggle { .. } => Ok(()),
        AddonDefinition::VariantToggle { key, variants, .. } => {
            if variants.is_empty() {
                return Err(CatalogError::NoVariants(key.as_str().to_string()));
            }

            let mut seen = BTreeSet::new();
            for variant in variants {
                if !seen.insert(variant.id.as_str()) {
                    return Err(CatalogError::DuplicateVariant {
                        key: key.as_str().to_string(),
                        variant: variant.id.as_str().to_string(),
                    });
                }
            }

            let defaults = variants.iter().filter(|v| v.default).count();
            if defaults != 1 {
                return Err(CatalogError::DefaultVariantCount {
                    key: key.as_str().to_string(),
                    count: defaults,
                });
            }

            Ok(())
        }
        AddonDefinition::CountToggle {
            key, default_count, ..
        } => {
            if *default_count < 1 {
                return Err(CatalogError::InvalidDefaultCount {
                    key: key.as_str().to_string(),
                    count: *default_count,
                });
            }
            Ok(())
        }
    }
}
