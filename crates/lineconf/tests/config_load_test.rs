use lineconf::{Config, ValueKind};
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to write a config file into a temp dir.
fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("test.conf");
    std::fs::write(&path, contents).expect("write config file");
    path
}

#[test]
fn test_circle_area_scenario() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(
        &dir,
        "calculate_area,b=yes\n\
         radius,f=2.0\n\
         pi,f=3.14159\n\
         name,s=circles\n\
         number,i=3\n",
    );

    let mut config = Config::with_path(&path);
    config.load().expect("load config");
    assert!(config.is_loaded());

    assert!(config.get_bool("calculate_area").expect("calculate_area"));

    let radius = config.get_float("radius").expect("radius");
    let pi = config.get_float("pi").expect("pi");
    let number = config.get_int("number").expect("number");
    let name = config.get_string("name").expect("name");

    #[allow(clippy::cast_precision_loss)]
    let area = radius * radius * pi * number as f64;
    assert!((area - 37.699).abs() < 1e-3, "area was {area}");
    assert_eq!(name, "circles");
}

#[test]
fn test_commented_file_with_report() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(
        &dir,
        "# Lines starting with # are ignored\n\
         #\n\
         # A key value pair must be of the format:\n\
         # keyname,type=value\n\
         stringkey,s=asdfasdf\n\
         intkey,i=1232\n\
         floatkey,f=12312.123\n\
         boolkey,b=yes\n",
    );

    let mut config = Config::new();
    config.load_path(&path).expect("load config");

    assert_eq!(config.entries().len(), 4);
    assert_eq!(config.comments().len(), 4);

    let report = config.format_report();
    assert!(report.contains("STRING"));
    assert!(report.contains("stringkey"));
    assert!(report.contains("asdfasdf"));
    assert!(report.contains("INTEGER"));
    assert!(report.contains("1232"));
    assert!(report.contains(&path.display().to_string()));
}

#[test]
fn test_reload_appends_then_clear() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(&dir, "key,i=5\n");

    let mut config = Config::with_path(&path);
    config.load().expect("first load");
    config.load().expect("second load");
    assert_eq!(config.entries().len(), 2);

    config.clear();
    config.load().expect("load after clear");
    assert_eq!(config.entries().len(), 1);
    assert_eq!(config.get_int("key").expect("key"), 5);
}

#[test]
fn test_mixed_type_lookup_errors() {
    let dir = TempDir::new().expect("create temp dir");
    let path = write_config(&dir, "name,s=circles\n");

    let mut config = Config::with_path(&path);
    config.load().expect("load config");

    let err = config.get_int("name").expect_err("stored type is string");
    assert_eq!(err.key, "name");
    assert_eq!(err.kind, ValueKind::Integer);
}
