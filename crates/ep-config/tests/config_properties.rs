//! Property-based tests for configuration building and validation.

use ep_config::keys::ALL_KEYS;
use ep_config::{get_config, get_config_for, validate_map, Environment, SchemaTier};
use proptest::prelude::*;

fn label_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("dev".to_string()),
        Just("staging".to_string()),
        Just("prod".to_string()),
        Just("production".to_string()),
        Just(String::new()),
        ".*",
    ]
}

fn tier_strategy() -> impl Strategy<Value = SchemaTier> {
    prop_oneof![
        Just(SchemaTier::Bronze),
        Just(SchemaTier::Silver),
        Just(SchemaTier::Gold),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    // ── Environment resolution ──────────────────────────────────────

    /// Anything that is not exactly "prod" or "staging" gets the dev catalog.
    #[test]
    fn unrecognized_labels_use_dev_catalog(label in ".*") {
        prop_assume!(label != "prod" && label != "staging");
        let config = get_config(&label);
        prop_assert_eq!(config.catalog_name(), "ecommerce_dev");
        prop_assert_eq!(config, get_config("dev"));
    }

    /// Label resolution agrees with the typed entry point.
    #[test]
    fn label_and_enum_paths_agree(label in label_strategy()) {
        let env = Environment::from_label(&label);
        prop_assert_eq!(get_config(&label), get_config_for(env));
    }

    // ── Mapping invariants ──────────────────────────────────────────

    /// FULL_SCHEMA_X is always CATALOG_NAME.SCHEMA_X.
    #[test]
    fn full_schema_is_catalog_dot_schema(
        label in label_strategy(),
        tier in tier_strategy(),
    ) {
        let config = get_config(&label);
        let expected = format!(
            "{}.{}",
            &config["CATALOG_NAME"],
            &config[tier.schema_key()]
        );
        prop_assert_eq!(&config[tier.full_schema_key()], expected.as_str());
    }

    /// Exactly the sixteen known keys, never more or fewer.
    #[test]
    fn key_set_is_complete(label in label_strategy()) {
        let config = get_config(&label);
        let mut actual: Vec<&str> = config.keys().collect();
        let mut expected = ALL_KEYS.to_vec();
        actual.sort_unstable();
        expected.sort_unstable();
        prop_assert_eq!(actual, expected);
    }

    /// Repeated calls are indistinguishable.
    #[test]
    fn repeated_calls_are_equal(label in label_strategy()) {
        prop_assert_eq!(get_config(&label), get_config(&label));
    }

    /// Whatever the builder produces passes validation.
    #[test]
    fn built_config_validates(label in label_strategy()) {
        let config = get_config(&label);
        let result = validate_map(config.as_map());
        prop_assert!(result.is_valid(), "{}", result);
    }

    /// Rewriting any value of a derived key is caught.
    #[test]
    fn tampered_full_schema_is_caught(
        label in label_strategy(),
        tier in tier_strategy(),
        junk in "[a-z_]{1,12}\\.[a-z]{1,8}",
    ) {
        let mut map = get_config(&label).into_map();
        let key = tier.full_schema_key();
        prop_assume!(map[key] != junk);
        map.insert(key.to_string(), junk);
        let result = validate_map(&map);
        prop_assert_eq!(result.errors.len(), 1);
        prop_assert_eq!(result.errors[0].key.as_str(), key);
    }
}

#[test]
fn concrete_scenarios() {
    let prod = get_config("prod");
    assert_eq!(&prod["CATALOG_NAME"], "ecommerce_prod");
    assert_eq!(&prod["FULL_SCHEMA_BRONZE"], "ecommerce_prod.bronze");
    assert_eq!(&prod["FULL_SCHEMA_SILVER"], "ecommerce_prod.silver");
    assert_eq!(&prod["FULL_SCHEMA_GOLD"], "ecommerce_prod.gold");

    let dev = get_config("dev");
    assert_eq!(&dev["CATALOG_NAME"], "ecommerce_dev");
    assert_eq!(&dev["FULL_SCHEMA_GOLD"], "ecommerce_dev.gold");

    assert_eq!(get_config("typo"), dev);

    assert_eq!(
        &get_config("staging")["PATH_ORDERS"],
        "abfss://adv@databrickspractice1.dfs.core.windows.net/orders"
    );
}

#[test]
fn safe_to_build_from_many_threads() {
    let handles: Vec<_> = ["dev", "staging", "prod", "qa"]
        .into_iter()
        .map(|label| std::thread::spawn(move || get_config(label)))
        .collect();
    let built: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(built[0], built[3]);
    assert_eq!(built[1].catalog_name(), "ecommerce_staging");
    assert_eq!(built[2].catalog_name(), "ecommerce_prod");
}
