//! Google Cloud Translation API (v2), authenticated with an API key.
//!
//! The API refuses requests carrying more than 128 text segments
//! ("Too many text segments"), so batches are split into chunks of at most
//! `max_segments` and fetched one after another as the caller consumes them.

use crate::domain::error::{Result, TranslateError};
use crate::domain::traits::{FromConfig, TranslatedStrings, TranslatorService};
use crate::infrastructure::config::{Config, GoogleApiConfig, GOOGLE_KEY_SETTING};
use crate::infrastructure::network::http::{Body, HttpRequest, HttpTransport, Transport};
use serde::Deserialize;
use serde_json::json;
use std::collections::VecDeque;

// Translation API response structures
#[derive(Deserialize, Debug)]
struct TranslateResponse {
    data: TranslationsData,
}

#[derive(Deserialize, Debug)]
struct TranslationsData {
    translations: Vec<TranslationItem>,
}

#[derive(Deserialize, Debug)]
struct TranslationItem {
    #[serde(rename = "translatedText")]
    translated_text: String,
}

pub struct GoogleApiTranslatorService {
    transport: Box<dyn Transport>,
    developer_key: String,
    endpoint: String,
    max_segments: usize,
    format: Option<String>,
}

impl GoogleApiTranslatorService {
    pub const NAME: &'static str = "GoogleApiTranslatorService";

    pub fn with_transport(
        transport: Box<dyn Transport>,
        developer_key: impl Into<String>,
        max_segments: usize,
    ) -> Result<Self> {
        let developer_key = developer_key.into();
        if developer_key.trim().is_empty() {
            return Err(missing_key());
        }
        if max_segments == 0 {
            return Err(TranslateError::Config(format!(
                "`google_api.max_segments` must be at least 1, it is required by `{}`",
                Self::NAME
            )));
        }

        Ok(Self {
            transport,
            developer_key,
            endpoint: GoogleApiConfig::default().endpoint,
            max_segments,
            format: None,
        })
    }

    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn format(mut self, format: Option<String>) -> Self {
        self.format = format;
        self
    }

    fn translate_chunk(
        &self,
        chunk: &[String],
        target_language: &str,
        source_language: &str,
    ) -> Result<Vec<String>> {
        let mut body = json!({
            "q": chunk,
            "source": source_language,
            "target": target_language,
        });
        if let Some(format) = &self.format {
            body["format"] = json!(format);
        }

        let request = HttpRequest::post(&self.endpoint)
            .query("key", self.developer_key.as_str())
            .body(Body::Json(body));

        tracing::debug!(
            segments = chunk.len(),
            source = source_language,
            target = target_language,
            "google cloud translate"
        );
        let response: TranslateResponse = serde_json::from_value(self.transport.send(request)?)?;
        let texts: Vec<String> = response
            .data
            .translations
            .into_iter()
            .map(|item| item.translated_text)
            .collect();

        if texts.len() != chunk.len() {
            return Err(TranslateError::Api(format!(
                "Google Cloud Translation returned {} translations for {} segments",
                texts.len(),
                chunk.len()
            )));
        }
        Ok(texts)
    }
}

fn missing_key() -> TranslateError {
    TranslateError::Config(format!(
        "`{}` is not configured, it is required by `{}`",
        GOOGLE_KEY_SETTING,
        GoogleApiTranslatorService::NAME
    ))
}

impl FromConfig for GoogleApiTranslatorService {
    fn from_config(config: &Config) -> Result<Self> {
        // Checked before the transport exists so a missing key never reaches the network
        let developer_key = config.google_translate_key().ok_or_else(missing_key)?;
        let transport = HttpTransport::new(config)?;

        Ok(
            Self::with_transport(
                Box::new(transport),
                developer_key,
                config.google_api.max_segments,
            )?
            .endpoint(config.google_api.endpoint.clone())
            .format(config.google_api.format.clone()),
        )
    }
}

impl TranslatorService for GoogleApiTranslatorService {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn translate_string(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<String> {
        let mut texts =
            self.translate_chunk(&[text.to_string()], target_language, source_language)?;
        Ok(texts.remove(0))
    }

    fn translate_strings<'a>(
        &'a self,
        strings: &'a [String],
        target_language: &'a str,
        source_language: &'a str,
    ) -> TranslatedStrings<'a> {
        Box::new(SegmentBatches {
            service: self,
            chunks: strings.chunks(self.max_segments),
            pending: VecDeque::new(),
            target_language,
            source_language,
            failed: false,
        })
    }
}

/// Walks the input chunk by chunk, requesting the next chunk only once the
/// previous one has been handed out
struct SegmentBatches<'a> {
    service: &'a GoogleApiTranslatorService,
    chunks: std::slice::Chunks<'a, String>,
    pending: VecDeque<String>,
    target_language: &'a str,
    source_language: &'a str,
    failed: bool,
}

impl Iterator for SegmentBatches<'_> {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        if let Some(text) = self.pending.pop_front() {
            return Some(Ok(text));
        }

        let chunk = self.chunks.next()?;
        match self
            .service
            .translate_chunk(chunk, self.target_language, self.source_language)
        {
            Ok(texts) => {
                self.pending.extend(texts);
                self.pending.pop_front().map(Ok)
            }
            Err(e) => {
                self.failed = true;
                Some(Err(e))
            }
        }
    }
}
