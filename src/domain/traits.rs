use crate::domain::error::{Result, TranslateError};
use crate::infrastructure::config::Config;

/// Lazily produced translations, one per input string and in input order.
///
/// The iterator is one-shot: consuming it again means calling the backend again.
pub type TranslatedStrings<'a> = Box<dyn Iterator<Item = Result<String>> + 'a>;

/// Trait for translation services
///
/// Every backend implements both methods. A backend that only overrides
/// `name` reports `NotImplemented` for the rest, which is what the defaults
/// below produce.
pub trait TranslatorService {
    /// Registered type name of the implementation
    fn name(&self) -> &'static str;

    /// Translate a single string literal into the target language
    fn translate_string(
        &self,
        _text: &str,
        _target_language: &str,
        _source_language: &str,
    ) -> Result<String> {
        Err(TranslateError::NotImplemented("translate_string"))
    }

    /// Translate several strings, yielding results in the same order as `strings`
    fn translate_strings<'a>(
        &'a self,
        _strings: &'a [String],
        _target_language: &'a str,
        _source_language: &'a str,
    ) -> TranslatedStrings<'a> {
        Box::new(std::iter::once(Err(TranslateError::NotImplemented(
            "translate_strings",
        ))))
    }
}

/// Construction from process configuration alone
///
/// This is the only way the resolver builds a backend, so implementing it
/// together with `TranslatorService` is what makes a type resolvable.
pub trait FromConfig: Sized {
    fn from_config(config: &Config) -> Result<Self>;
}
