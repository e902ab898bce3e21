//! Tests for loading the TOML config file.

use std::io::Write;
use tempfile::NamedTempFile;
use workboard::config::{self, Config};

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write config");
    file
}

#[test]
fn test_defaults() {
    let config = Config::default();
    assert!(config.tokens.github.is_none());
    assert_eq!(config.github.api_url, "https://api.github.com/graphql");
    assert_eq!(config.github.page_limit, 100);
    assert_eq!(config.ui.border_color, "62");
}

#[test]
fn test_empty_file_uses_defaults() {
    let file = write_config("");
    let config = config::load(Some(file.path())).expect("load");
    assert_eq!(config.github.page_limit, 100);
}

#[test]
fn test_full_file() {
    let file = write_config(
        r#"
        [tokens]
        github = "ghp_example"

        [github]
        api_url = "https://github.example.com/api/graphql"
        page_limit = 250

        [ui]
        border_color = "cyan"
        "#,
    );

    let config = config::load(Some(file.path())).expect("load");

    assert_eq!(config.tokens.github.as_deref(), Some("ghp_example"));
    assert_eq!(config.github.api_url, "https://github.example.com/api/graphql");
    assert_eq!(config.github.page_limit, 250);
    assert_eq!(config.ui.border_color, "cyan");
}

#[test]
fn test_partial_section_keeps_other_defaults() {
    let file = write_config("[github]\npage_limit = 20\n");
    let config = config::load(Some(file.path())).expect("load");
    assert_eq!(config.github.page_limit, 20);
    assert_eq!(config.github.api_url, "https://api.github.com/graphql");
}

#[test]
fn test_explicit_missing_path_is_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("nope.toml");
    let err = config::load(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_invalid_toml_names_path() {
    let file = write_config("[github\npage_limit = ");
    let err = config::load(Some(file.path())).unwrap_err();
    assert!(err.to_string().contains("Failed to parse config"));
}
