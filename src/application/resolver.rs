//! Turns the `translator_service` setting into a ready-to-use backend.
//!
//! Backends are looked up by name in a [`ServiceRegistry`]. Only types that
//! implement both [`TranslatorService`] and [`FromConfig`] can be registered,
//! so anything the registry hands back is usable as a translator.

use crate::domain::error::{Result, TranslateError};
use crate::domain::traits::{FromConfig, TranslatorService};
use crate::infrastructure::config::{Config, SERVICE_SETTING};
use std::collections::BTreeMap;
use std::fmt;

type BuildFn = fn(&Config) -> Result<Box<dyn TranslatorService>>;

#[derive(Clone, Copy)]
enum Build {
    Available(BuildFn),
    // Backend compiled out through its cargo feature
    Missing { feature: &'static str },
}

/// Type-checked reference to a backend implementation
#[derive(Clone, Copy)]
pub struct ServiceFactory {
    name: &'static str,
    build: Build,
}

impl fmt::Debug for ServiceFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceFactory")
            .field("name", &self.name)
            .field("available", &self.is_available())
            .finish()
    }
}

fn build_boxed<T>(config: &Config) -> Result<Box<dyn TranslatorService>>
where
    T: TranslatorService + FromConfig + 'static,
{
    Ok(Box::new(T::from_config(config)?))
}

impl ServiceFactory {
    pub fn of<T>() -> Self
    where
        T: TranslatorService + FromConfig + 'static,
    {
        let full = std::any::type_name::<T>();
        Self {
            name: full.rsplit("::").next().unwrap_or(full),
            build: Build::Available(build_boxed::<T>),
        }
    }

    #[allow(dead_code)]
    fn missing(name: &'static str, feature: &'static str) -> Self {
        Self {
            name,
            build: Build::Missing { feature },
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn is_available(&self) -> bool {
        matches!(self.build, Build::Available(_))
    }

    /// Construct a fresh backend from the process configuration
    pub fn build(&self, config: &Config) -> Result<Box<dyn TranslatorService>> {
        match self.build {
            Build::Available(build) => build(config),
            Build::Missing { feature } => Err(TranslateError::Dependency(format!(
                "`{}` requires the `{}` feature of autotranslate",
                self.name, feature
            ))),
        }
    }
}

/// How the backend is selected
#[derive(Debug, Clone)]
pub enum ServiceSelector {
    /// Nothing configured: use [`default_factory`]
    Default,
    /// A direct reference to an implementation
    Factory(ServiceFactory),
    /// A name or path to look up in the registry
    Path(String),
}

impl ServiceSelector {
    pub fn from_config(config: &Config) -> Self {
        match &config.translator_service {
            Some(path) => Self::Path(path.clone()),
            None => Self::Default,
        }
    }
}

impl fmt::Display for ServiceSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => write!(f, "{} (default)", default_factory().name()),
            Self::Factory(factory) => f.write_str(factory.name()),
            Self::Path(path) => f.write_str(path),
        }
    }
}

/// Name-keyed table of backend factories
///
/// Keys are stored with `.` separators rewritten to `::`, so
/// `autotranslate.services.GoogleTranslatorService` and
/// `autotranslate::services::GoogleTranslatorService` name the same entry.
#[derive(Debug, Clone, Default)]
pub struct ServiceRegistry {
    entries: BTreeMap<String, ServiceFactory>,
}

fn normalize(path: &str) -> String {
    path.trim().replace('.', "::")
}

impl ServiceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the three bundled backends under their short alias,
    /// bare type name and `autotranslate::services::` path
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (alias, factory) in [
            ("google", google_web_factory()),
            ("google-api", google_api_factory()),
            ("amazon", amazon_factory()),
        ] {
            registry.register_factory(alias, factory);
            registry.register_factory(factory.name(), factory);
            registry.register_factory(&format!("autotranslate::services::{}", factory.name()), factory);
        }
        registry
    }

    pub fn register<T>(&mut self, name: &str) -> &mut Self
    where
        T: TranslatorService + FromConfig + 'static,
    {
        self.register_factory(name, ServiceFactory::of::<T>())
    }

    pub fn register_factory(&mut self, name: &str, factory: ServiceFactory) -> &mut Self {
        self.entries.insert(normalize(name), factory);
        self
    }

    pub fn lookup(&self, path: &str) -> Option<ServiceFactory> {
        self.entries.get(&normalize(path)).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Resolve a selector to a factory without constructing anything
    pub fn resolve(&self, selector: &ServiceSelector) -> Result<ServiceFactory> {
        match selector {
            ServiceSelector::Default => Ok(default_factory()),
            ServiceSelector::Factory(factory) => Ok(*factory),
            ServiceSelector::Path(path) if path.trim().is_empty() => {
                Err(TranslateError::Config(format!(
                    "The translator service '{}' specified in `{}` does not implement TranslatorService.",
                    path, SERVICE_SETTING
                )))
            }
            ServiceSelector::Path(path) => self.lookup(path).ok_or_else(|| {
                TranslateError::Config(format!(
                    "Could not import the translator service '{}' specified in `{}`.",
                    path, SERVICE_SETTING
                ))
            }),
        }
    }
}

/// Resolve `selector` against `registry` and construct the backend
pub fn resolve_service(
    registry: &ServiceRegistry,
    selector: &ServiceSelector,
    config: &Config,
) -> Result<Box<dyn TranslatorService>> {
    let factory = registry.resolve(selector)?;
    tracing::info!(selector = %selector, service = factory.name(), "resolved translator service");
    factory.build(config)
}

/// Backend named by the `translator_service` setting, or the default one
pub fn get_translator(config: &Config) -> Result<Box<dyn TranslatorService>> {
    resolve_service(
        &ServiceRegistry::with_builtins(),
        &ServiceSelector::from_config(config),
        config,
    )
}

/// Backend used when `translator_service` is not set
pub fn default_factory() -> ServiceFactory {
    google_web_factory()
}

#[cfg(feature = "google-web")]
fn google_web_factory() -> ServiceFactory {
    ServiceFactory::of::<crate::infrastructure::network::google_web::GoogleTranslatorService>()
}

#[cfg(not(feature = "google-web"))]
fn google_web_factory() -> ServiceFactory {
    ServiceFactory::missing("GoogleTranslatorService", "google-web")
}

#[cfg(feature = "google-api")]
fn google_api_factory() -> ServiceFactory {
    ServiceFactory::of::<crate::infrastructure::network::google_api::GoogleApiTranslatorService>()
}

#[cfg(not(feature = "google-api"))]
fn google_api_factory() -> ServiceFactory {
    ServiceFactory::missing("GoogleApiTranslatorService", "google-api")
}

#[cfg(feature = "amazon")]
fn amazon_factory() -> ServiceFactory {
    ServiceFactory::of::<crate::infrastructure::network::amazon::AmazonTranslateService>()
}

#[cfg(not(feature = "amazon"))]
fn amazon_factory() -> ServiceFactory {
    ServiceFactory::missing("AmazonTranslateService", "amazon")
}
