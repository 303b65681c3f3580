pub mod addon;
pub mod builtin;
pub mod plan;
pub mod validation;

use std::fs;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::types::identifiers::{CatalogVersion, PlanId};
pub use addon::{AddonCatalog, AddonDefinition, AddonKind, Variant};
pub use plan::{Plan, PlanCatalog};
pub use validation::CatalogError;

/// On-disk shape of a catalog. Field order is the canonical order used for
/// hashing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub default_plan: PlanId,
    pub plans: Vec<Plan>,
    #[serde(default)]
    pub addons: Vec<AddonDefinition>,
}

// This is intentionally read-only:
// no mutation after construction
// shared by reference across configurators
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    pub plans: PlanCatalog,
    pub addons: AddonCatalog,
    version: CatalogVersion,
}

impl Catalog {
    /// Validate and freeze a catalog.
    ///
    /// This is the ONLY way to construct a Catalog; every loader goes
    /// through it.
    pub fn new(config: CatalogConfig) -> Result<Self, CatalogError> {
        validation::validate(&config)?;

        let canonical = serde_json::to_vec(&config)?;
        let version = CatalogVersion::from_content(&canonical);

        let CatalogConfig {
            default_plan,
            plans,
            addons,
        } = config;

        let catalog = Catalog {
            plans: PlanCatalog::from_parts(default_plan, plans),
            addons: AddonCatalog::from_parts(addons),
            version,
        };

        info!(
            plans = catalog.plans.len(),
            addons = catalog.addons.len(),
            version = %catalog.version,
            "catalog loaded"
        );

        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let config: CatalogConfig = serde_json::from_str(json)?;
        Self::new(config)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let config: CatalogConfig = serde_json::from_reader(reader)?;
        Self::new(config)
    }

    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let f = fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(f))
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    /// The configuration this catalog was built from, in canonical order.
    pub fn to_config(&self) -> CatalogConfig {
        CatalogConfig {
            default_plan: self.plans.default_plan().clone(),
            plans: self.plans.iter().cloned().collect(),
            addons: self.addons.iter().cloned().collect(),
        }
    }
}
