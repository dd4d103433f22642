//! Integration tests for configuration management

use learning_tree::config::{Config, ConfigOverrides};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to create a temporary config directory
fn setup_temp_config() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_file = temp_dir.path().join("config.toml");
    (temp_dir, config_file)
}

#[test]
fn test_config_from_defaults() {
    let config = Config::from_defaults();

    assert!(
        !config.logging.level.is_empty(),
        "Default log level should not be empty"
    );
    assert!(
        !config.paths.site_dir.is_empty(),
        "Default site_dir should not be empty"
    );
    assert_eq!(config.layout.segments, 30);
    assert_eq!(config.get("extent").as_deref(), Some("800"));
    assert!(config.layout.shape().is_ok());
}

#[test]
fn test_config_from_toml_basic() {
    let toml_str = r#"
[logging]
level = "info"
file = "/tmp/test.log"
verbose = true

[layout]
center_x = 150.0
amplitude = 30.0
segments = 12
extent = 1200.0
marker_spread = 60.0

[paths]
site_dir = "./public"
catalog = "./lessons.toml"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML");

    assert_eq!(config.logging.level, "info");
    assert_eq!(config.logging.file, "/tmp/test.log");
    assert!(config.logging.verbose);
    assert_eq!(config.layout.segments, 12);
    assert_eq!(config.get("center_x").as_deref(), Some("150"));
    assert_eq!(config.get("marker_spread").as_deref(), Some("60"));
    assert_eq!(config.paths.site_dir, "./public");
    assert_eq!(config.paths.catalog, "./lessons.toml");
}

#[test]
fn test_config_from_toml_partial() {
    // Missing sections and keys fall back to their defaults
    let toml_str = r#"
[logging]
level = "error"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse partial TOML");

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "");
    assert!(!config.logging.verbose);
    assert_eq!(config.layout.segments, 30);
    assert_eq!(config.paths.catalog, "");
}

#[test]
fn test_config_variable_expansion() {
    let toml_str = r#"
[logging]
file = "$LEARNING_TREE/test.log"

[paths]
site_dir = "$LEARNING_TREE/site"
"#;

    let config = Config::from_toml(toml_str).expect("Failed to parse TOML with variables");

    assert!(config.logging.file.contains("learningtree"));
    assert!(!config.logging.file.contains("$LEARNING_TREE"));
    assert!(config.paths.site_dir.ends_with("site"));
    assert!(!config.paths.site_dir.contains("$LEARNING_TREE"));
}

#[test]
fn test_config_get_set() {
    let mut config = Config::from_defaults();

    assert!(config.get("level").is_some());

    config.set("level", "debug").expect("Failed to set level");
    assert_eq!(config.get("level").unwrap(), "debug");

    config
        .set("verbose", "true")
        .expect("Failed to set verbose");
    assert!(config.logging.verbose);

    config.set("extent", "640").expect("Failed to set extent");
    assert_eq!(config.get("extent").unwrap(), "640");

    config.set("site-dir", "./out").expect("Failed to set site dir");
    assert_eq!(config.get("site_dir").unwrap(), "./out");

    assert!(config.get("unknown_key").is_none());
    assert!(config.set("unknown_key", "value").is_err());
    assert!(config.set("level", "loud").is_err());
    assert!(config.set("segments", "0").is_err());
    assert!(config.set("amplitude", "wide").is_err());
}

#[test]
fn test_config_unset() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    config.set("level", "debug").expect("Failed to set level");
    config.set("segments", "4").expect("Failed to set segments");

    config
        .unset("level", &defaults)
        .expect("Failed to unset level");
    config
        .unset("segments", &defaults)
        .expect("Failed to unset segments");

    assert_eq!(config.logging.level, defaults.logging.level);
    assert_eq!(config.layout.segments, defaults.layout.segments);
    assert!(config.unset("nope", &defaults).is_err());
}

#[test]
fn test_config_save_and_load() {
    let (_temp_dir, config_file) = setup_temp_config();

    let mut config = Config::from_defaults();
    config.set("level", "info").expect("Failed to set level");
    config.set("segments", "8").expect("Failed to set segments");

    let toml_str = toml::to_string_pretty(&config).expect("Failed to serialize");
    fs::write(&config_file, toml_str).expect("Failed to write config");

    let content = fs::read_to_string(&config_file).expect("Failed to read config");
    let loaded_config = Config::from_toml(&content).expect("Failed to parse loaded config");

    assert_eq!(loaded_config.logging.level, "info");
    assert_eq!(loaded_config.layout.segments, 8);
}

#[test]
fn test_config_overrides_apply() {
    let mut config = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("error".to_string()),
        file: Some("/custom/path.log".to_string()),
        verbose: Some(true),
        extent: Some(1024.0),
        site_dir: Some("./custom_site".to_string()),
        catalog: Some("./custom.toml".to_string()),
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/custom/path.log");
    assert!(config.logging.verbose);
    assert_eq!(config.get("extent").as_deref(), Some("1024"));
    assert_eq!(config.paths.site_dir, "./custom_site");
    assert_eq!(config.paths.catalog, "./custom.toml");
}

#[test]
fn test_config_overrides_partial() {
    let mut config = Config::from_defaults();
    let defaults = Config::from_defaults();

    let overrides = ConfigOverrides {
        level: Some("debug".to_string()),
        ..ConfigOverrides::default()
    };

    config.apply_overrides(&overrides);

    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.paths.site_dir, defaults.paths.site_dir);
    assert_eq!(config.layout.segments, defaults.layout.segments);
}

#[test]
fn test_config_display_format() {
    let config = Config::from_defaults();
    let display_str = format!("{config}");

    assert!(display_str.contains("[logging]"));
    assert!(display_str.contains("[layout]"));
    assert!(display_str.contains("[paths]"));

    assert!(display_str.contains("level"));
    assert!(display_str.contains("segments = 30"));
    assert!(display_str.contains("site_dir"));
}

#[test]
fn test_merge_defaults_adds_missing_fields() {
    let toml_str = r#"
[logging]
level = "error"
file = ""
verbose = false

[paths]
site_dir = ""
catalog = ""
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse minimal config");
    let defaults = Config::from_defaults();

    let changed = config.merge_defaults(&defaults);

    assert!(
        changed,
        "merge_defaults should return true when fields are added"
    );
    assert_eq!(config.paths.site_dir, defaults.paths.site_dir);
}

#[test]
fn test_merge_defaults_preserves_existing() {
    let toml_str = r#"
[logging]
level = "error"
file = "/my/custom/path.log"
verbose = false

[paths]
site_dir = "/srv/tree"
"#;

    let mut config = Config::from_toml(toml_str).expect("Failed to parse config");
    let defaults = Config::from_defaults();

    config.merge_defaults(&defaults);

    assert_eq!(config.logging.level, "error");
    assert_eq!(config.logging.file, "/my/custom/path.log");
    assert_eq!(config.paths.site_dir, "/srv/tree");
}

#[test]
fn test_get_app_dir() {
    let dir = Config::get_app_dir();

    assert!(dir.to_string_lossy().contains("learningtree"));
    assert_ne!(dir, PathBuf::from("."));
}

#[test]
fn test_get_config_file_path() {
    let path = Config::get_config_file_path();

    let path_str = path.to_string_lossy();
    assert!(path_str.ends_with("config.toml") || path_str.ends_with("dconfig.toml"));
}
