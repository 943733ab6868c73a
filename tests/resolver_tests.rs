//! Backend selection through the `translator_service` setting
#![cfg(all(feature = "google-web", feature = "google-api"))]

use autotranslate::{
    get_translator, resolve_service, Config, FromConfig, Result, ServiceFactory,
    ServiceRegistry, ServiceSelector, TranslateError, TranslatedStrings, TranslatorService,
    SERVICE_SETTING,
};

struct EchoService;

impl TranslatorService for EchoService {
    fn name(&self) -> &'static str {
        "EchoService"
    }

    fn translate_string(&self, text: &str, _target: &str, _source: &str) -> Result<String> {
        Ok(text.to_string())
    }

    fn translate_strings<'a>(
        &'a self,
        strings: &'a [String],
        _target: &'a str,
        _source: &'a str,
    ) -> TranslatedStrings<'a> {
        Box::new(strings.iter().cloned().map(Ok::<String, TranslateError>))
    }
}

impl FromConfig for EchoService {
    fn from_config(_config: &Config) -> Result<Self> {
        Ok(EchoService)
    }
}

/// Implements nothing beyond its name
struct Incomplete;

impl TranslatorService for Incomplete {
    fn name(&self) -> &'static str {
        "Incomplete"
    }
}

fn with_service(service: &str) -> Config {
    Config {
        translator_service: Some(service.to_string()),
        google_translate_key: Some("test-key".to_string()),
        ..Config::default()
    }
}

fn expect_config_error(result: Result<Box<dyn TranslatorService>>) -> String {
    match result {
        Err(TranslateError::Config(msg)) => msg,
        Err(other) => panic!("expected a configuration error, got {other}"),
        Ok(service) => panic!("expected a configuration error, got {}", service.name()),
    }
}

#[test]
fn test_unset_setting_selects_google_web() {
    let service = get_translator(&Config::default()).unwrap();
    assert_eq!(service.name(), "GoogleTranslatorService");
}

#[test]
fn test_every_spelling_resolves_to_the_same_type() {
    for (selector, expected) in [
        ("google", "GoogleTranslatorService"),
        ("GoogleTranslatorService", "GoogleTranslatorService"),
        ("autotranslate::services::GoogleTranslatorService", "GoogleTranslatorService"),
        ("autotranslate.services.GoogleTranslatorService", "GoogleTranslatorService"),
        ("google-api", "GoogleApiTranslatorService"),
        ("autotranslate.services.GoogleApiTranslatorService", "GoogleApiTranslatorService"),
    ] {
        let service = get_translator(&with_service(selector)).unwrap();
        assert_eq!(service.name(), expected, "selector {selector}");
    }
}

#[test]
fn test_unknown_path_names_value_and_setting() {
    let msg = expect_config_error(get_translator(&with_service("autotranslate.services.Nope")));
    assert!(msg.contains("autotranslate.services.Nope"));
    assert!(msg.contains(SERVICE_SETTING));
    assert!(msg.starts_with("Could not import"));
}

#[test]
fn test_blank_value_is_not_a_translator() {
    let msg = expect_config_error(get_translator(&with_service("")));
    assert!(msg.contains(SERVICE_SETTING));
    assert!(msg.contains("does not implement TranslatorService"));
}

#[test]
fn test_custom_backend_by_path() {
    let mut registry = ServiceRegistry::with_builtins();
    registry.register::<EchoService>("my_app.translators.EchoService");

    let selector = ServiceSelector::Path("my_app::translators::EchoService".to_string());
    let service = resolve_service(&registry, &selector, &Config::default()).unwrap();
    assert_eq!(service.name(), "EchoService");

    let strings = vec!["a".to_string(), "b".to_string()];
    let echoed: Vec<String> = service
        .translate_strings(&strings, "fr", "en")
        .collect::<Result<_>>()
        .unwrap();
    assert_eq!(echoed, strings);
}

#[test]
fn test_direct_factory_reference() {
    let selector = ServiceSelector::Factory(ServiceFactory::of::<EchoService>());
    let service = resolve_service(&ServiceRegistry::new(), &selector, &Config::default()).unwrap();
    assert_eq!(service.name(), "EchoService");
    assert_eq!(selector.to_string(), "EchoService");
}

#[test]
fn test_custom_backend_is_not_global() {
    let msg = expect_config_error(get_translator(&with_service("EchoService")));
    assert!(msg.contains("EchoService"));
}

#[test]
fn test_trait_defaults_report_not_implemented() {
    let service = Incomplete;
    assert!(matches!(
        service.translate_string("x", "fr", "en"),
        Err(TranslateError::NotImplemented("translate_string"))
    ));

    let strings = vec!["x".to_string()];
    let results: Vec<_> = service.translate_strings(&strings, "fr", "en").collect();
    assert_eq!(results.len(), 1);
    match &results[0] {
        Err(err @ TranslateError::NotImplemented(_)) => {
            assert_eq!(err.to_string(), "translate_strings() must be overridden.")
        }
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_setting_read_from_toml() {
    let config: Config = toml::from_str(
        r#"
translator_service = "google-api"
google_translate_key = "abc"

[google_api]
max_segments = 50
"#,
    )
    .unwrap();
    assert_eq!(config.google_api.max_segments, 50);
    assert_eq!(get_translator(&config).unwrap().name(), "GoogleApiTranslatorService");
}
