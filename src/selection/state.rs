use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, warn};

use crate::catalog::{AddonDefinition, AddonKind, Catalog};
use crate::types::error::ConfigurationError;
use crate::types::identifiers::{AddonKey, PlanId, VariantId};

/// Selection record of one add-on. The variant always matches the kind of
/// the add-on definition it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AddonSelection {
    SimpleToggle { active: bool },
    VariantToggle { active: bool, variant: VariantId },
    CountToggle {
        active: bool,
        #[serde(deserialize_with = "count_at_least_one")]
        count: u32,
    },
}

// Snapshots written by hand may carry 0; the floor holds on load too.
fn count_at_least_one<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    Ok(u32::deserialize(deserializer)?.max(1))
}

impl AddonSelection {
    /// Inactive, at the definition's default variant or count.
    pub fn initial(definition: &AddonDefinition) -> Self {
        match definition {
            AddonDefinition::SimpleToggle { .. } => AddonSelection::SimpleToggle { active: false },
            AddonDefinition::VariantToggle { variants, .. } => {
                // Validated catalogs always carry exactly one default.
                let variant = variants
                    .iter()
                    .find(|v| v.default)
                    .or_else(|| variants.first())
                    .map(|v| v.id.clone())
                    .unwrap_or_else(|| VariantId::new(""));
                AddonSelection::VariantToggle {
                    active: false,
                    variant,
                }
            }
            AddonDefinition::CountToggle { default_count, .. } => AddonSelection::CountToggle {
                active: false,
                count: (*default_count).max(1),
            },
        }
    }

    pub fn is_active(&self) -> bool {
        match self {
            AddonSelection::SimpleToggle { active }
            | AddonSelection::VariantToggle { active, .. }
            | AddonSelection::CountToggle { active, .. } => *active,
        }
    }

    fn set_active(&mut self, value: bool) {
        match self {
            AddonSelection::SimpleToggle { active }
            | AddonSelection::VariantToggle { active, .. }
            | AddonSelection::CountToggle { active, .. } => *active = value,
        }
    }

    pub fn kind(&self) -> AddonKind {
        match self {
            AddonSelection::SimpleToggle { .. } => AddonKind::SimpleToggle,
            AddonSelection::VariantToggle { .. } => AddonKind::VariantToggle,
            AddonSelection::CountToggle { .. } => AddonKind::CountToggle,
        }
    }

    pub fn variant(&self) -> Option<&VariantId> {
        match self {
            AddonSelection::VariantToggle { variant, .. } => Some(variant),
            _ => None,
        }
    }

    pub fn count(&self) -> Option<u32> {
        match self {
            AddonSelection::CountToggle { count, .. } => Some(*count),
            _ => None,
        }
    }
}

/// What the visitor has picked so far.
///
/// Owned by a single configurator UI. Every mutation is validated against the
/// catalog and leaves the state unchanged when it fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionState {
    plan_id: PlanId,
    addons: BTreeMap<AddonKey, AddonSelection>,
}

impl SelectionState {
    pub fn new(catalog: &Catalog) -> Self {
        let addons = catalog
            .addons
            .iter()
            .map(|def| (def.key().clone(), AddonSelection::initial(def)))
            .collect();

        SelectionState {
            plan_id: catalog.plans.default_plan().clone(),
            addons,
        }
    }

    pub fn plan_id(&self) -> &PlanId {
        &self.plan_id
    }

    pub fn addon(&self, key: &AddonKey) -> Option<&AddonSelection> {
        self.addons.get(key)
    }

    /// All selection records, ordered by key.
    pub fn addons(&self) -> impl Iterator<Item = (&AddonKey, &AddonSelection)> {
        self.addons.iter()
    }

    pub fn is_active(&self, key: &AddonKey) -> bool {
        self.addons.get(key).map_or(false, AddonSelection::is_active)
    }

    pub fn active_count(&self) -> usize {
        self.addons.values().filter(|s| s.is_active()).count()
    }

    /// Switch plans. Add-on selections are left exactly as they were.
    pub fn select_plan(
        &mut self,
        catalog: &Catalog,
        plan_id: &PlanId,
    ) -> Result<(), ConfigurationError> {
        if !catalog.plans.contains(plan_id) {
            return Err(reject(ConfigurationError::UnknownPlan(plan_id.clone())));
        }

        debug!(from = %self.plan_id, to = %plan_id, "plan selected");
        self.plan_id = plan_id.clone();
        Ok(())
    }

    /// Flip an add-on on or off and return the new flag. The chosen variant
    /// or count survives deactivation.
    pub fn toggle_addon(
        &mut self,
        catalog: &Catalog,
        key: &AddonKey,
    ) -> Result<bool, ConfigurationError> {
        let definition = lookup(catalog, key)?;
        let selection = self.record_mut(definition);
        let active = !selection.is_active();
        selection.set_active(active);

        debug!(addon = %key, active, "add-on toggled");
        Ok(active)
    }

    pub fn set_active(
        &mut self,
        catalog: &Catalog,
        key: &AddonKey,
        active: bool,
    ) -> Result<(), ConfigurationError> {
        let definition = lookup(catalog, key)?;
        self.record_mut(definition).set_active(active);

        debug!(addon = %key, active, "add-on activation set");
        Ok(())
    }

    pub fn set_variant(
        &mut self,
        catalog: &Catalog,
        key: &AddonKey,
        variant_id: &VariantId,
    ) -> Result<(), ConfigurationError> {
        let definition = lookup(catalog, key)?;
        expect_kind(definition, AddonKind::VariantToggle)?;

        if definition.find_variant(variant_id).is_none() {
            return Err(reject(ConfigurationError::UnknownVariant {
                key: key.clone(),
                variant: variant_id.clone(),
            }));
        }

        if let AddonSelection::VariantToggle { variant, .. } = self.record_mut(definition) {
            *variant = variant_id.clone();
        }

        debug!(addon = %key, variant = %variant_id, "variant set");
        Ok(())
    }

    /// Set the quantity of a counted add-on and return the stored value.
    ///
    /// Values below 1 are clamped to 1 rather than rejected. There is no upper
    /// business limit; values beyond `u32::MAX` saturate.
    pub fn set_count(
        &mut self,
        catalog: &Catalog,
        key: &AddonKey,
        requested: i64,
    ) -> Result<u32, ConfigurationError> {
        let definition = lookup(catalog, key)?;
        expect_kind(definition, AddonKind::CountToggle)?;

        let stored = if requested < 1 {
            warn!(addon = %key, requested, "count below floor, clamped to 1");
            1
        } else {
            u32::try_from(requested).unwrap_or(u32::MAX)
        };

        if let AddonSelection::CountToggle { count, .. } = self.record_mut(definition) {
            *count = stored;
        }

        debug!(addon = %key, count = stored, "count set");
        Ok(stored)
    }

    /// Back to the default plan with every add-on inactive at its defaults.
    pub fn reset(&mut self, catalog: &Catalog) {
        *self = SelectionState::new(catalog);
        debug!("selection reset");
    }

    /// Record of the definition's shape. Only called once the operation is
    /// known to succeed: a missing or mis-shaped record (for example from a
    /// stale snapshot) is re-seeded from the definition, keeping its active
    /// flag.
    fn record_mut(&mut self, definition: &AddonDefinition) -> &mut AddonSelection {
        let selection = self
            .addons
            .entry(definition.key().clone())
            .or_insert_with(|| AddonSelection::initial(definition));

        if selection.kind() != definition.kind() {
            let active = selection.is_active();
            *selection = AddonSelection::initial(definition);
            selection.set_active(active);
        }

        selection
    }
}

fn lookup<'c>(
    catalog: &'c Catalog,
    key: &AddonKey,
) -> Result<&'c AddonDefinition, ConfigurationError> {
    catalog
        .addons
        .get(key)
        .ok_or_else(|| reject(ConfigurationError::UnknownAddon(key.clone())))
}

fn expect_kind(
    definition: &AddonDefinition,
    expected: AddonKind,
) -> Result<(), ConfigurationError> {
    if definition.kind() != expected {
        return Err(reject(ConfigurationError::InvalidKind {
            key: definition.key().clone(),
            expected,
            actual: definition.kind(),
        }));
    }
    Ok(())
}

fn reject(err: ConfigurationError) -> ConfigurationError {
    warn!(error = %err, "selection change rejected");
    err
}
