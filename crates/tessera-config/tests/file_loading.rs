//! File-based configuration loading tests.

use std::fs;
use std::path::PathBuf;

use tessera_config::{ConfigError, ConfigLoader, LogFormat, WEB_APP_ROOT_KEY_PARAM};

#[test]
fn loads_complete_toml_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tessera.toml");
    fs::write(
        &path,
        r#"
            [webapp]
            root_dir = "/srv/shop"
            context_path = "/shop"

            [webapp.init_params]
            webAppRootKey = "shop.root"

            [resources]
            filesystem_roots = ["/etc/shop"]
            http_timeout_secs = 10

            [logging]
            level = "debug"
            format = "pretty"
        "#,
    )
    .unwrap();

    let loader = ConfigLoader::new().with_file(&path).unwrap();
    assert!(loader.file_loaded());
    let config = loader.load().unwrap();

    assert_eq!(config.webapp.root_dir, PathBuf::from("/srv/shop"));
    assert_eq!(config.webapp.context_path, "/shop");
    assert_eq!(
        config.webapp.init_params.get(WEB_APP_ROOT_KEY_PARAM).map(String::as_str),
        Some("shop.root")
    );
    assert_eq!(config.resources.filesystem_roots, vec![PathBuf::from("/etc/shop")]);
    assert_eq!(config.resources.http_timeout_secs, Some(10));
    assert_eq!(config.logging.format, LogFormat::Pretty);
}

#[test]
fn loads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tessera.json");
    fs::write(&path, r#"{"webapp": {"context_path": "/admin"}}"#).unwrap();

    let config = ConfigLoader::new().with_file(&path).unwrap().load().unwrap();
    assert_eq!(config.webapp.context_path, "/admin");
    assert_eq!(config.logging.level, "info");
}

#[test]
fn rejects_unknown_section() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tessera.toml");
    fs::write(&path, "[sessions]\ntimeout = 30\n").unwrap();

    let err = ConfigLoader::new().with_file(&path).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationError(_)));
    assert!(err.to_string().contains("sessions"));
}

#[test]
fn rejects_unsupported_extension() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tessera.yaml");
    fs::write(&path, "webapp: {}\n").unwrap();

    let result = ConfigLoader::new().with_file(&path);
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));
}

#[test]
fn optional_file_is_loaded_when_present() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tessera.toml");
    fs::write(&path, "[webapp]\ncontext_path = \"/docs\"\n").unwrap();

    let config = ConfigLoader::new()
        .with_optional_file(&path)
        .unwrap()
        .load()
        .unwrap();
    assert_eq!(config.webapp.context_path, "/docs");
}

#[test]
fn file_merges_over_production_preset() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tessera.toml");
    fs::write(&path, "[webapp]\ncontext_path = \"/shop\"\n").unwrap();

    let config = ConfigLoader::new()
        .with_production()
        .with_file(&path)
        .unwrap()
        .load()
        .unwrap();

    assert_eq!(config.webapp.context_path, "/shop");
    assert_eq!(config.resources.http_timeout_secs, Some(30));
    assert_eq!(config.logging.format, LogFormat::Json);
}
