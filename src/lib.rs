//! Pluggable machine-translation backends.
//!
//! The backend is chosen by the `translator_service` setting and built by
//! [`get_translator`]; every backend implements [`TranslatorService`].
//!
//! ```no_run
//! use autotranslate::{get_translator, load_config, TranslatorService};
//!
//! let config = load_config()?;
//! let translator = get_translator(&config)?;
//! let greeting = translator.translate_string("Hello", "fr", "en")?;
//! # Ok::<(), autotranslate::TranslateError>(())
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

/// The bundled backends, under the paths the resolver accepts
pub mod services {
    #[cfg(feature = "amazon")]
    pub use crate::infrastructure::network::amazon::AmazonTranslateService;
    #[cfg(feature = "google-api")]
    pub use crate::infrastructure::network::google_api::GoogleApiTranslatorService;
    #[cfg(feature = "google-web")]
    pub use crate::infrastructure::network::google_web::GoogleTranslatorService;
}

pub use application::resolver::{
    default_factory, get_translator, resolve_service, ServiceFactory, ServiceRegistry,
    ServiceSelector,
};
pub use application::translate::translate_request;
pub use domain::error::{Result, TranslateError};
pub use domain::model::{
    Translation, TranslationBatch, TranslationRequest, DEFAULT_SOURCE_LANGUAGE,
};
pub use domain::traits::{FromConfig, TranslatedStrings, TranslatorService};
pub use infrastructure::config::{load_config, Config, SERVICE_SETTING};
pub use infrastructure::network::http::{Body, HttpRequest, HttpTransport, Transport};
