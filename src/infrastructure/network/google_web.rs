//! Google's free web translation endpoint.
//!
//! This is the endpoint the translate widgets use. It is undocumented, needs no
//! key and accepts several `q` fields in one request.

use crate::domain::error::{Result, TranslateError};
use crate::domain::traits::{FromConfig, TranslatedStrings, TranslatorService};
use crate::infrastructure::config::Config;
use crate::infrastructure::network::http::{Body, HttpRequest, HttpTransport, Transport};
use serde_json::Value;

pub struct GoogleTranslatorService {
    transport: Box<dyn Transport>,
    service_url: String,
}

impl GoogleTranslatorService {
    pub const NAME: &'static str = "GoogleTranslatorService";

    pub fn with_transport(transport: Box<dyn Transport>, service_url: impl Into<String>) -> Self {
        Self {
            transport,
            service_url: service_url.into(),
        }
    }

    fn request(
        &self,
        texts: &[String],
        target_language: &str,
        source_language: &str,
    ) -> Result<Vec<String>> {
        let fields = texts
            .iter()
            .map(|text| ("q".to_string(), text.clone()))
            .collect();
        let request = HttpRequest::post(&self.service_url)
            .query("client", "gtx")
            .query("sl", source_language)
            .query("tl", target_language)
            .body(Body::Form(fields));

        tracing::debug!(
            segments = texts.len(),
            source = source_language,
            target = target_language,
            "google web translate"
        );
        let response = self.transport.send(request)?;
        parse_translations(response, texts.len())
    }
}

impl FromConfig for GoogleTranslatorService {
    fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(config)?;
        Ok(Self::with_transport(
            Box::new(transport),
            config.google.service_url.clone(),
        ))
    }
}

impl TranslatorService for GoogleTranslatorService {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn translate_string(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<String> {
        let mut texts = self.request(&[text.to_string()], target_language, source_language)?;
        // parse_translations guarantees exactly one entry here
        Ok(texts.remove(0))
    }

    fn translate_strings<'a>(
        &'a self,
        strings: &'a [String],
        target_language: &'a str,
        source_language: &'a str,
    ) -> TranslatedStrings<'a> {
        if strings.is_empty() {
            return Box::new(std::iter::empty());
        }
        match self.request(strings, target_language, source_language) {
            Ok(texts) => Box::new(texts.into_iter().map(Ok::<String, TranslateError>)),
            Err(e) => Box::new(std::iter::once(Err(e))),
        }
    }
}

/// Extract translated texts from a `translate_a/t` response
///
/// The endpoint answers with a bare string for a single text, an array of
/// strings for several, or `[text, detected_language]` pairs when the source
/// language is auto-detected.
pub fn parse_translations(response: Value, expected: usize) -> Result<Vec<String>> {
    let texts = match response {
        Value::String(text) => vec![text],
        Value::Array(items) => {
            // A single auto-detected text comes back flattened as [text, language]
            if expected == 1 && items.len() == 2 && items.iter().all(Value::is_string) {
                vec![string_at(&items[0])?]
            } else {
                items.iter().map(item_text).collect::<Result<Vec<_>>>()?
            }
        }
        other => {
            return Err(TranslateError::Api(format!(
                "Unexpected Google translate response: {}",
                other
            )))
        }
    };

    if texts.len() != expected {
        return Err(TranslateError::Api(format!(
            "Google translate returned {} translations for {} strings",
            texts.len(),
            expected
        )));
    }
    Ok(texts)
}

fn item_text(item: &Value) -> Result<String> {
    match item {
        Value::Array(pair) => pair
            .first()
            .ok_or_else(|| TranslateError::Api("Empty translation entry".to_string()))
            .and_then(string_at),
        other => string_at(other),
    }
}

fn string_at(value: &Value) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| TranslateError::Api(format!("Expected translated text, got {}", value)))
}
