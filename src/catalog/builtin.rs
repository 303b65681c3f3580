//! The marketing-site package catalog shipped with the crate.

use crate::catalog::addon::{AddonDefinition, Variant};
use crate::catalog::plan::Plan;
use crate::catalog::{Catalog, CatalogConfig, CatalogError};

fn features(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub fn builtin_config() -> CatalogConfig {
    let plans = vec![
        Plan::new(
            "starter",
            "Starter",
            "For new brands finding their voice",
            18000,
            features(&[
                "2 social platforms",
                "12 posts per month",
                "Monthly performance report",
            ]),
        ),
        Plan::new(
            "standard",
            "Standard",
            "Most popular",
            28000,
            features(&[
                "3 social platforms",
                "20 posts per month",
                "Community management",
                "Bi-weekly performance report",
            ]),
        ),
        Plan::new(
            "premium",
            "Premium",
            "Full-service growth",
            45000,
            features(&[
                "5 social platforms",
                "30 posts per month",
                "Community management",
                "Weekly performance report",
                "Dedicated account manager",
            ]),
        ),
    ];

    let addons = vec![
        AddonDefinition::variant(
            "logoDesign",
            "Logo design",
            vec![
                Variant::new("regular", "Regular", 5000).as_default(),
                Variant::new("professional", "Professional", 17000),
            ],
        ),
        AddonDefinition::count("reels", "Reels", 3000, 1),
        AddonDefinition::simple("paidAds", "Paid ads management", 10000),
        AddonDefinition::variant(
            "photoShoot",
            "Photo shoot",
            vec![
                Variant::new("halfDay", "Half day", 15000).as_default(),
                Variant::new("fullDay", "Full day", 25000),
            ],
        ),
        AddonDefinition::count("blogPosts", "Blog posts", 2500, 2),
    ];

    CatalogConfig {
        default_plan: "standard".into(),
        plans,
        addons,
    }
}

impl Catalog {
    pub fn builtin() -> Result<Catalog, CatalogError> {
        Catalog::new(builtin_config())
    }
}
