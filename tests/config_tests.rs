//! 配置功能测试

use autotranslate::infrastructure::config::{load_config_from, write_config_sample};
use autotranslate::Config;

#[test]
fn test_config_defaults() {
    let config = Config::default();

    assert!(config.translator_service.is_none());
    assert!(config.google_translate_key.is_none());
    assert!(config.http_proxy.is_none());
    assert_eq!(config.timeout_secs, 30);
    assert_eq!(
        config.google.service_url,
        "https://translate.googleapis.com/translate_a/t"
    );
    assert_eq!(config.google_api.max_segments, 128);
    assert!(config.google_api.format.is_none());
    assert!(config.amazon.region.is_none());
}

#[test]
fn test_logging_defaults() {
    let config = Config::default();

    assert!(config.logging.enable);
    assert!(config.logging.path.is_none());
    assert_eq!(config.logging.level, "WARN");
}

#[test]
fn test_config_toml_format() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
translator_service = "amazon"
http_proxy = "http://127.0.0.1:8080"
timeout_secs = 10

[google_api]
max_segments = 64
format = "text"

[amazon]
region = "eu-west-1"
profile = "work"

[logging]
enable = true
path = "/tmp/test.log"
level = "DEBUG"
"#,
    )
    .unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.translator_service.as_deref(), Some("amazon"));
    assert_eq!(config.http_proxy.as_deref(), Some("http://127.0.0.1:8080"));
    assert_eq!(config.timeout_secs, 10);
    assert_eq!(config.google_api.max_segments, 64);
    assert_eq!(config.google_api.format.as_deref(), Some("text"));
    assert_eq!(
        config.google_api.endpoint,
        "https://translation.googleapis.com/language/translate/v2"
    );
    assert_eq!(config.amazon.region.as_deref(), Some("eu-west-1"));
    assert_eq!(config.amazon.profile.as_deref(), Some("work"));
    assert_eq!(config.logging.level, "DEBUG");
    assert_eq!(config.logging.path.as_deref(), Some("/tmp/test.log"));
}

#[test]
fn test_malformed_config_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "timeout_secs = \"not a number\"").unwrap();

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.timeout_secs, 30);
}

#[test]
fn test_missing_config_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_config_from(&dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_generated_sample_parses_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");

    write_config_sample(&path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("[google_api]"));
    assert!(content.contains("max_segments = 128"));

    let config = load_config_from(&path).unwrap();
    assert_eq!(config.google_api.max_segments, 128);
    assert_eq!(config.logging.level, "WARN");
}
