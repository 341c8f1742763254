use super::{
    catalog_stub, default_catalog, load_catalog, validate_catalog, write_catalog, EnumCatalog,
    CATALOG_SCHEMA_VERSION,
};
use crate::input::input_shape_failure;
use serde_json::{json, Map};

fn write_file(path: &std::path::Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent directory");
    }
    std::fs::write(path, contents.as_bytes()).expect("write file");
}

#[test]
fn default_catalog_round_trips_through_disk() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("enums").join("catalog.json");
    write_catalog(&path, &default_catalog()).expect("write catalog");

    let catalog = load_catalog(&path).expect("load catalog");
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["statuses", "days", "days_abbr"]);

    let tables = catalog.build_all().expect("build all enums");
    assert_eq!(tables.len(), 3);
    let (_, days) = &tables[1];
    assert_eq!(days.value("saturday"), Some(json!(6)));
    let (_, statuses) = &tables[0];
    assert_eq!(statuses.get_field("completed", "finished"), Some(json!(true)));
}

#[test]
fn stub_is_valid_catalog_json() {
    let catalog: EnumCatalog = serde_json::from_str(&catalog_stub()).expect("parse stub");
    validate_catalog(&catalog).expect("stub validates");
    assert_eq!(catalog.schema_version, CATALOG_SCHEMA_VERSION);
}

#[test]
fn unsupported_schema_version_is_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("catalog.json");
    write_file(&path, r#"{"schema_version": 2, "enums": {}}"#);
    let err = load_catalog(&path).expect_err("schema 2 must fail");
    assert!(err.to_string().contains("schema_version 2"));
}

#[test]
fn unknown_top_level_fields_are_rejected() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("catalog.json");
    write_file(&path, r#"{"schema_version": 1, "enums": {}, "extra": true}"#);
    let err = load_catalog(&path).expect_err("unknown field must fail");
    assert!(format!("{err:#}").contains("extra"));
}

#[test]
fn missing_catalog_names_the_path() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("absent.json");
    let err = load_catalog(&path).expect_err("missing file must fail");
    assert!(err.to_string().contains("absent.json"));
}

#[test]
fn scalar_declarations_are_rejected_by_name() {
    let mut enums = Map::new();
    enums.insert("broken".to_string(), json!("Sunday"));
    let catalog = EnumCatalog {
        schema_version: CATALOG_SCHEMA_VERSION,
        enums,
    };
    let err = validate_catalog(&catalog).expect_err("scalar declaration must fail");
    assert!(err.to_string().contains("broken"));

    let err = catalog.build("broken").expect_err("scalar declaration must not build");
    assert!(input_shape_failure(&err).is_some());
    assert!(err.to_string().contains("broken"));
}

#[test]
fn blank_enum_names_are_rejected() {
    let mut enums = Map::new();
    enums.insert("  ".to_string(), json!([]));
    let catalog = EnumCatalog {
        schema_version: CATALOG_SCHEMA_VERSION,
        enums,
    };
    assert!(validate_catalog(&catalog).is_err());
}

#[test]
fn undeclared_enum_is_an_error() {
    let err = default_catalog()
        .build("colors")
        .expect_err("undeclared enum must fail");
    assert!(err.to_string().contains("colors"));
}
