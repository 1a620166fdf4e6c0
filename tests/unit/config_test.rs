//! Unit tests for config module

use std::fs;

use ghdash::{Config, ViewType};
use tempfile::TempDir;

#[test]
fn default_config_has_expected_values() {
    let config = Config::default();
    assert_eq!(config.defaults.view, ViewType::Prs);
    assert!(!config.defaults.show_full_help);
    assert_eq!(config.search.prs_filter, "is:open author:@me");
    assert_eq!(config.search.issues_filter, "is:open assignee:@me");
    assert_eq!(config.user.login, None);
    assert_eq!(config.theme.preset, "default");
    assert_eq!(config.logging.level, "warn");
}

#[test]
fn config_serialization_roundtrip() {
    let mut config = Config::default();
    config.user.login = Some("octocat".to_string());
    config.defaults.view = ViewType::Issues;
    let toml_str = config.to_toml().unwrap();
    let parsed: Config = toml::from_str(&toml_str).unwrap();
    assert_eq!(parsed, config);
}

#[test]
fn partial_file_keeps_other_defaults() {
    let toml_str = r#"
[defaults]
view = "issues"

[search]
issues_filter = "is:open label:bug"
"#;
    let config: Config = toml::from_str(toml_str).unwrap();
    assert_eq!(config.defaults.view, ViewType::Issues);
    assert_eq!(config.search.issues_filter, "is:open label:bug");
    assert_eq!(config.search.prs_filter, "is:open author:@me");
}

#[test]
fn missing_file_loads_defaults() {
    let temp = TempDir::new().unwrap();
    let config = Config::load_from(&temp.path().join("absent.toml")).unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_reads_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(
        &path,
        "[user]\nlogin = \"alice\"\n\n[theme]\npreset = \"classic\"\n",
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();
    assert_eq!(config.user.login.as_deref(), Some("alice"));
    assert_eq!(config.theme.preset, "classic");
}

#[test]
fn invalid_theme_is_rejected_at_load() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[theme.colors]\nprimary_text = \"not-a-color\"\n").unwrap();

    let err = Config::load_from(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("not-a-color"));
}

#[test]
fn malformed_toml_is_an_error() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("config.toml");
    fs::write(&path, "[defaults\nview = ").unwrap();
    assert!(Config::load_from(&path).is_err());
}

#[test]
fn config_path_ends_with_ghdash() {
    if let Ok(path) = Config::config_path() {
        assert!(path.ends_with(".config/ghdash/config.toml"));
    }
}
