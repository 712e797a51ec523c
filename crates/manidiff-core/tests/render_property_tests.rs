mod common;

use common::manifest;
use manidiff_core::model::{derive_group, CORE_GROUP};
use manidiff_core::{render, validate};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_unqualified_api_version_is_core(version in "v[0-9]{1,2}(alpha|beta)?[0-9]?") {
        let raw = manifest(&version, "ConfigMap", "cfg");
        let identity = validate(&raw).unwrap();
        prop_assert_eq!(identity.group, CORE_GROUP);
    }

    #[test]
    fn prop_qualified_api_version_takes_prefix(
        group in "[a-z][a-z0-9.]{0,20}",
        version in "v[0-9]",
    ) {
        let api_version = format!("{}/{}", group, version);
        prop_assert_eq!(derive_group(&api_version), group.as_str());

        let raw = manifest(&api_version, "Thing", "x");
        prop_assert_eq!(validate(&raw).unwrap().group, group);
    }

    #[test]
    fn prop_render_is_deterministic(
        keys in proptest::collection::vec("[a-z]{1,8}", 0..8),
        sort in any::<bool>(),
    ) {
        let mut text =
            String::from("apiVersion: v1\nkind: ConfigMap\nmetadata:\n  name: cfg\ndata:\n");
        for (i, key) in keys.iter().enumerate() {
            text.push_str(&format!("  {}{}: \"{}\"\n", key, i, i));
        }
        let raw: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();

        prop_assert_eq!(render(&raw, sort).unwrap(), render(&raw, sort).unwrap());
    }

    #[test]
    fn prop_unsorted_render_round_trips(
        pairs in proptest::collection::vec(("[a-z]{1,6}", -1000i64..1000), 0..6),
    ) {
        let mut text =
            String::from("apiVersion: apps/v1\nkind: Deployment\nmetadata:\n  name: web\nspec:\n");
        for (i, (key, value)) in pairs.iter().enumerate() {
            text.push_str(&format!("  {}{}: {}\n", key, i, value));
        }
        if pairs.is_empty() {
            text.push_str("  replicas: 1\n");
        }
        let raw: serde_yaml::Value = serde_yaml::from_str(&text).unwrap();

        let rendered = render(&raw, false).unwrap();
        let decoded: serde_yaml::Value = serde_yaml::from_str(&rendered).unwrap();
        prop_assert_eq!(decoded, raw);
    }
}
