use std::fs;
use std::path::Path;

use devsim_registry::{
    ReferenceFile, ReferenceRegistry, RegistryError, load_registry, resolve_registry_path,
};

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn builtin_regions_and_codes() {
    let registry = ReferenceRegistry::builtin().unwrap();
    assert_eq!(
        registry.list_regions(),
        vec!["China", "Hong Kong", "Macao", "Taiwan", "USA"]
    );
    assert_eq!(registry.mobile_country_code("China"), Some("460"));
    assert_eq!(registry.mobile_country_code("Hong Kong"), Some("454"));
    assert_eq!(registry.mobile_country_code("Macao"), Some("455"));
    assert_eq!(registry.mobile_country_code("Taiwan"), Some("466"));
    assert_eq!(registry.mobile_country_code("USA"), Some("310"));
    assert_eq!(
        registry.network_codes("China", "China Mobile"),
        ["00", "02", "07"]
    );
    assert_eq!(
        registry.network_codes("USA", "Verizon"),
        ["004", "010", "012", "013"]
    );
    assert_eq!(registry.phone_prefixes("Taiwan"), ["09"]);
    assert_eq!(registry.phone_prefixes("Hong Kong"), ["5", "6", "9"]);
}

#[test]
fn builtin_carriers_are_sorted() {
    let registry = ReferenceRegistry::builtin().unwrap();
    assert_eq!(
        registry.carriers_of("China"),
        vec!["China Mobile", "China Telecom", "China Unicom"]
    );
    assert_eq!(
        registry.carriers_of("Macao"),
        vec!["3", "CTM", "China Telecom"]
    );
}

#[test]
fn builtin_brands_and_models() {
    let registry = ReferenceRegistry::builtin().unwrap();
    assert_eq!(
        registry.brands(),
        vec!["Apple", "Huawei", "OPPO", "Samsung", "Vivo", "Xiaomi"]
    );
    assert_eq!(registry.models_of("Samsung"), vec!["Galaxy S25"]);
    assert_eq!(
        registry
            .type_allocation_code("Samsung", "Galaxy S25")
            .map(|tac| tac.as_str()),
        Some("35050556")
    );
    assert_eq!(
        registry
            .type_allocation_code_for_label("OPPO Reno 12 Pro")
            .map(|tac| tac.as_str()),
        Some("86945807")
    );
    assert_eq!(registry.all_type_allocation_codes().len(), 6);
    assert!(registry.all_models().contains(&"Xiaomi 14 Ultra".to_string()));
}

#[test]
fn loads_json_reference_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "tables.json",
        r#"{
            "regions": {
                "Testland": {
                    "mobile_country_code": "001",
                    "carriers": { "TestCell": ["01", "02"] },
                    "phone_prefixes": ["77"]
                }
            },
            "models": { "Acme": { "Rocket 1": "01234567" } }
        }"#,
    );

    let registry = ReferenceRegistry::from_path(&path).unwrap();
    assert_eq!(registry.list_regions(), vec!["Testland"]);
    assert_eq!(registry.network_codes("Testland", "TestCell"), ["01", "02"]);
    assert_eq!(registry.all_models(), vec!["Acme Rocket 1".to_string()]);
}

#[test]
fn loads_toml_reference_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "tables.toml",
        r#"
[regions."North Testland"]
mobile_country_code = "002"
phone_prefixes = ["5"]

[regions."North Testland".carriers]
"Test Mobile" = ["100", "200"]

[models.Acme]
"Rocket 2" = "76543210"
"#,
    );

    let registry = ReferenceRegistry::from_path(&path).unwrap();
    assert_eq!(registry.mobile_country_code("North Testland"), Some("002"));
    assert_eq!(
        registry.network_codes("North Testland", "Test Mobile"),
        ["100", "200"]
    );
    assert_eq!(
        registry
            .type_allocation_code("Acme", "Rocket 2")
            .map(|tac| tac.as_str()),
        Some("76543210")
    );
}

#[test]
fn rejects_invalid_country_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "bad.json",
        r#"{ "regions": { "X": { "mobile_country_code": "46" } } }"#,
    );
    let err = ReferenceRegistry::from_path(&path).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidRecord(_)));
}

#[test]
fn rejects_invalid_type_allocation_code() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "bad.json",
        r#"{ "models": { "Acme": { "Rocket": "1234" } } }"#,
    );
    let err = ReferenceRegistry::from_path(&path).unwrap_err();
    assert!(
        matches!(err, RegistryError::InvalidModel { ref brand, ref model, .. } if brand == "Acme" && model == "Rocket")
    );
}

#[test]
fn rejects_unknown_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "tables.yaml", "regions: {}");
    let err = ReferenceRegistry::from_path(&path).unwrap_err();
    assert!(matches!(err, RegistryError::UnsupportedFormat { .. }));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = ReferenceRegistry::from_path(&dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(err, RegistryError::Io { .. }));
}

#[test]
fn malformed_json_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "broken.json", "{ \"regions\": ");
    let err = ReferenceRegistry::from_path(&path).unwrap_err();
    assert!(matches!(err, RegistryError::Json { .. }));
}

#[test]
fn exported_tables_reload_identically() {
    let registry = ReferenceRegistry::builtin().unwrap();
    let json = registry.to_reference_file().to_json_pretty().unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = write(dir.path(), "export.json", &json);
    let reloaded = ReferenceRegistry::from_path(&path).unwrap();
    assert_eq!(reloaded, registry);

    let parsed: ReferenceFile = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, registry.to_reference_file());
}

#[test]
fn explicit_path_wins_resolution() {
    let dir = tempfile::tempdir().unwrap();
    let path = write(
        dir.path(),
        "only.json",
        r#"{ "regions": { "Solo": { "mobile_country_code": "999" } } }"#,
    );
    assert_eq!(resolve_registry_path(Some(&path)), Some(path.clone()));
    let registry = load_registry(Some(&path)).unwrap();
    assert_eq!(registry.list_regions(), vec!["Solo"]);
    assert!(registry.carriers_of("Solo").is_empty());
}
