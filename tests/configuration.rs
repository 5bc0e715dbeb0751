//! Tests for configuration system

use std::fs;

use fridgechef::config::Config;
use fridgechef_shared::Language;
use temp_dir::TempDir;

#[test]
fn test_config_loads_from_default_toml() {
    let config = Config::load(None).expect("Failed to load config");

    assert_eq!(config.catalog.path, "data/recipes.csv");
    assert_eq!(config.recommend.default_limit, 12);
    assert_eq!(config.recommend.min_limit, 5);
    assert_eq!(config.recommend.max_limit, 50);
    assert_eq!(config.meal_plan.size, 3);
    assert_eq!(config.meal_plan.fallback_sample, 100);
    assert_eq!(config.session.default_language, Language::Ko);
    assert!(config.validate().is_ok());
}

#[test]
fn test_config_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("fridgechef.toml");
    fs::write(
        &path,
        r#"
[catalog]
path = "/srv/recipes.csv"

[recommend]
default_limit = 20

[session]
default_language = "en"
"#,
    )
    .unwrap();

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");

    assert_eq!(config.catalog.path, "/srv/recipes.csv");
    assert_eq!(config.recommend.default_limit, 20);
    assert_eq!(config.recommend.max_limit, 50, "unset keys keep their defaults");
    assert_eq!(config.session.default_language, Language::En);
}

#[test]
fn test_missing_config_file_falls_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml");

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");

    assert_eq!(config.catalog.path, "data/recipes.csv");
    assert_eq!(config.observability.log_level, "warn");
}

#[test]
fn test_inconsistent_limits_fail_validation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[recommend]\nmin_limit = 30\nmax_limit = 10\n").unwrap();

    let config = Config::load(Some(path.display().to_string())).expect("Failed to load config");

    assert!(config.validate().is_err());
}
