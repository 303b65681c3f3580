use std::fs;

use quote_core::catalog::{
    AddonCatalog, AddonDefinition, AddonKind, Catalog, CatalogError, Plan, PlanCatalog, Variant,
};
use quote_core::pricing::compute_quote;
use quote_core::selection::SelectionState;
use quote_core::types::{AddonKey, Money, PlanId, VariantId};
use tempfile::tempdir;

const CATALOG_JSON: &str = r#"{
  "default_plan": "standard",
  "plans": [
    { "id": "starter", "name": "Starter", "label": "For new brands", "base_price": 18000 },
    {
      "id": "standard",
      "name": "Standard",
      "label": "Most popular",
      "base_price": 28000,
      "features": ["3 social platforms", "20 posts per month"]
    }
  ],
  "addons": [
    {
      "kind": "variant_toggle",
      "key": "logoDesign",
      "label": "Logo design",
      "variants": [
        { "id": "regular", "label": "Regular", "unit_price": 5000, "default": true },
        { "id": "professional", "label": "Professional", "unit_price": 17000 }
      ]
    },
    {
      "kind": "count_toggle",
      "key": "reels",
      "label": "Reels",
      "unit_price": 3000,
      "default_count": 1
    },
    {
      "kind": "simple_toggle",
      "key": "paidAds",
      "label": "Paid ads management",
      "unit_price": 10000
    }
  ]
}"#;

fn with_catalog(edit: impl FnOnce(&mut serde_json::Value)) -> String {
    let mut value: serde_json::Value = serde_json::from_str(CATALOG_JSON).unwrap();
    edit(&mut value);
    serde_json::to_string(&value).unwrap()
}

#[test]
fn loads_catalog_from_json() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();

    assert_eq!(catalog.plans.len(), 2);
    assert_eq!(catalog.plans.default_plan(), &PlanId::new("standard"));

    let standard = catalog.plans.get(&PlanId::new("standard")).unwrap();
    assert_eq!(standard.base_price, Money::new(28000));
    assert_eq!(standard.features, vec!["3 social platforms", "20 posts per month"]);
    assert!(catalog.plans.get(&PlanId::new("starter")).unwrap().features.is_empty());

    let kinds: Vec<AddonKind> = catalog.addons.iter().map(|a| a.kind()).collect();
    assert_eq!(
        kinds,
        vec![AddonKind::VariantToggle, AddonKind::CountToggle, AddonKind::SimpleToggle]
    );

    let logo = catalog.addons.get(&AddonKey::new("logoDesign")).unwrap();
    assert_eq!(logo.default_variant().unwrap().id, VariantId::new("regular"));
    assert_eq!(
        logo.find_variant(&VariantId::new("professional")).unwrap().unit_price,
        Money::new(17000)
    );
}

#[test]
fn loads_catalog_from_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, CATALOG_JSON).unwrap();

    let from_file = Catalog::from_path(&path).unwrap();
    let from_str = Catalog::from_json_str(CATALOG_JSON).unwrap();
    assert_eq!(from_file, from_str);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let result = Catalog::from_path(&dir.path().join("absent.json"));
    assert!(matches!(result, Err(CatalogError::Io(_))));
}

#[test]
fn malformed_json_is_serialization_error() {
    let result = Catalog::from_json_str(r#"{ "default_plan": "standard", "plans": ["#);
    assert!(matches!(result, Err(CatalogError::Serialization(_))));

    let unknown_kind = with_catalog(|v| v["addons"][2]["kind"] = "tiered".into());
    assert!(matches!(
        Catalog::from_json_str(&unknown_kind),
        Err(CatalogError::Serialization(_))
    ));

    let negative_price = with_catalog(|v| v["plans"][0]["base_price"] = (-1).into());
    assert!(matches!(
        Catalog::from_json_str(&negative_price),
        Err(CatalogError::Serialization(_))
    ));
}

#[test]
fn rejects_empty_plan_catalog() {
    let json = with_catalog(|v| v["plans"] = serde_json::json!([]));
    assert!(matches!(
        Catalog::from_json_str(&json),
        Err(CatalogError::EmptyPlanCatalog)
    ));
}

#[test]
fn rejects_duplicate_plan_and_addon() {
    let json = with_catalog(|v| v["plans"][0]["id"] = "standard".into());
    assert!(matches!(
        Catalog::from_json_str(&json),
        Err(CatalogError::DuplicatePlan(id)) if id == "standard"
    ));

    let json = with_catalog(|v| v["addons"][2]["key"] = "reels".into());
    assert!(matches!(
        Catalog::from_json_str(&json),
        Err(CatalogError::DuplicateAddon(key)) if key == "reels"
    ));
}

#[test]
fn rejects_unknown_default_plan() {
    let json = with_catalog(|v| v["default_plan"] = "enterprise".into());
    assert!(matches!(
        Catalog::from_json_str(&json),
        Err(CatalogError::UnknownDefaultPlan(id)) if id == "enterprise"
    ));
}

#[test]
fn rejects_bad_variant_sets() {
    let none = with_catalog(|v| v["addons"][0]["variants"] = serde_json::json!([]));
    assert!(matches!(
        Catalog::from_json_str(&none),
        Err(CatalogError::NoVariants(_))
    ));

    let no_default = with_catalog(|v| v["addons"][0]["variants"][0]["default"] = false.into());
    assert!(matches!(
        Catalog::from_json_str(&no_default),
        Err(CatalogError::DefaultVariantCount { count: 0, .. })
    ));

    let two_defaults = with_catalog(|v| v["addons"][0]["variants"][1]["default"] = true.into());
    assert!(matches!(
        Catalog::from_json_str(&two_defaults),
        Err(CatalogError::DefaultVariantCount { count: 2, .. })
    ));

    let duplicate = with_catalog(|v| v["addons"][0]["variants"][1]["id"] = "regular".into());
    assert!(matches!(
        Catalog::from_json_str(&duplicate),
        Err(CatalogError::DuplicateVariant { .. })
    ));
}

#[test]
fn rejects_zero_default_count() {
    let json = with_catalog(|v| v["addons"][1]["default_count"] = 0.into());
    assert!(matches!(
        Catalog::from_json_str(&json),
        Err(CatalogError::InvalidDefaultCount { count: 0, .. })
    ));
}

#[test]
fn builtin_catalog_is_valid() {
    let catalog = Catalog::builtin().unwrap();

    assert_eq!(catalog.plans.default_plan(), &PlanId::new("standard"));
    assert_eq!(
        catalog.plans.get(&PlanId::new("standard")).unwrap().base_price,
        Money::new(28000)
    );

    let logo = catalog.addons.get(&AddonKey::new("logoDesign")).unwrap();
    assert_eq!(logo.default_variant().unwrap().unit_price, Money::new(5000));

    let keys: Vec<&str> = catalog.addons.iter().map(|a| a.key().as_str()).collect();
    assert_eq!(keys[..2], ["logoDesign", "reels"]);
}

#[test]
fn plan_catalog_validates_on_its_own() {
    let standard = Plan::new("standard", "Standard", "Most popular", 28000, vec![]);
    let premium = Plan::new("premium", "Premium", "Full-service growth", 45000, vec![]);

    let plans = PlanCatalog::new("standard", vec![standard.clone(), premium.clone()]).unwrap();
    assert_eq!(plans.len(), 2);
    assert_eq!(plans.default_plan(), &PlanId::new("standard"));

    assert!(matches!(
        PlanCatalog::new("standard", vec![]),
        Err(CatalogError::EmptyPlanCatalog)
    ));
    assert!(matches!(
        PlanCatalog::new("standard", vec![standard.clone(), standard.clone()]),
        Err(CatalogError::DuplicatePlan(id)) if id == "standard"
    ));
    assert!(matches!(
        PlanCatalog::new("enterprise", vec![standard, premium]),
        Err(CatalogError::UnknownDefaultPlan(id)) if id == "enterprise"
    ));
}

#[test]
fn addon_catalog_validates_on_its_own() {
    let logo = AddonDefinition::variant(
        "logoDesign",
        "Logo design",
        vec![
            Variant::new("regular", "Regular", 5000).as_default(),
            Variant::new("professional", "Professional", 17000),
        ],
    );
    let reels = AddonDefinition::count("reels", "Reels", 3000, 1);

    let addons = AddonCatalog::new(vec![logo.clone(), reels.clone()]).unwrap();
    assert_eq!(addons.len(), 2);
    assert!(AddonCatalog::new(vec![]).unwrap().is_empty());

    assert!(matches!(
        AddonCatalog::new(vec![reels.clone(), reels]),
        Err(CatalogError::DuplicateAddon(key)) if key == "reels"
    ));
    assert!(matches!(
        AddonCatalog::new(vec![AddonDefinition::count("blogPosts", "Blog posts", 2500, 0)]),
        Err(CatalogError::InvalidDefaultCount { count: 0, .. })
    ));
    assert!(matches!(
        AddonCatalog::new(vec![AddonDefinition::variant(
            "photoShoot",
            "Photo shoot",
            vec![Variant::new("halfDay", "Half day", 15000)],
        )]),
        Err(CatalogError::DefaultVariantCount { count: 0, .. })
    ));
}

#[test]
fn standalone_catalogs_price_a_selection() {
    let catalog = Catalog::from_json_str(CATALOG_JSON).unwrap();
    let plans = PlanCatalog::new("standard", catalog.plans.iter().cloned().collect()).unwrap();
    let addons = AddonCatalog::new(catalog.addons.iter().cloned().collect()).unwrap();

    let mut state = SelectionState::new(&catalog);
    state.toggle_addon(&catalog, &AddonKey::new("paidAds")).unwrap();

    let quote = compute_quote(&plans, &addons, &state).unwrap();
    assert_eq!(quote.total, Money::new(38000));
}
