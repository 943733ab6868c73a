//! Amazon Translate over its JSON protocol.
//!
//! `TranslateText` takes one text per call and there is no bulk endpoint in
//! use here, so `translate_strings` issues one call per string.

use crate::domain::error::{Result, TranslateError};
use crate::domain::traits::{FromConfig, TranslatedStrings, TranslatorService};
use crate::infrastructure::config::Config;
use crate::infrastructure::network::aws_auth::{sign_request, AwsSession, SignableCall};
use crate::infrastructure::network::http::{Body, HttpRequest, HttpTransport, Transport};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

const SERVICE: &str = "translate";
const TARGET: &str = "AWSShineFrontendService_20170701.TranslateText";
const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

#[derive(Serialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct TranslateTextRequest<'a> {
    text: &'a str,
    source_language_code: &'a str,
    target_language_code: &'a str,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct TranslateTextResponse {
    translated_text: String,
}

pub struct AmazonTranslateService {
    transport: Box<dyn Transport>,
    session: AwsSession,
    endpoint: String,
}

impl AmazonTranslateService {
    pub const NAME: &'static str = "AmazonTranslateService";

    pub fn with_transport(
        transport: Box<dyn Transport>,
        session: AwsSession,
        endpoint: Option<String>,
    ) -> Result<Self> {
        let endpoint = endpoint
            .unwrap_or_else(|| format!("https://translate.{}.amazonaws.com/", session.region));
        let valid = reqwest::Url::parse(&endpoint)
            .map(|url| url.has_host())
            .unwrap_or(false);
        if !valid {
            return Err(TranslateError::Config(format!(
                "Invalid `amazon.endpoint` `{}` for `{}`",
                endpoint,
                Self::NAME
            )));
        }

        Ok(Self {
            transport,
            session,
            endpoint,
        })
    }
}

impl FromConfig for AmazonTranslateService {
    fn from_config(config: &Config) -> Result<Self> {
        let session = AwsSession::resolve(&config.amazon)?;
        let transport = HttpTransport::new(config)?;
        Self::with_transport(Box::new(transport), session, config.amazon.endpoint.clone())
    }
}

impl TranslatorService for AmazonTranslateService {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn translate_string(
        &self,
        text: &str,
        target_language: &str,
        source_language: &str,
    ) -> Result<String> {
        let payload = serde_json::to_vec(&TranslateTextRequest {
            text,
            source_language_code: source_language,
            target_language_code: target_language,
        })?;

        let headers = sign_request(
            &self.session,
            SERVICE,
            &SignableCall {
                method: "POST",
                url: &self.endpoint,
                headers: &[("content-type", CONTENT_TYPE), ("x-amz-target", TARGET)],
                payload: &payload,
                time: SystemTime::now(),
            },
        )?;

        let mut request = HttpRequest::post(&self.endpoint).header("X-Amz-Target", TARGET);
        for (name, value) in headers {
            request = request.header(&name, value);
        }
        let request = request.body(Body::Raw {
            content_type: CONTENT_TYPE.to_string(),
            data: payload,
        });

        tracing::debug!(
            region = %self.session.region,
            source = source_language,
            target = target_language,
            "amazon translate"
        );
        let response: TranslateTextResponse = serde_json::from_value(self.transport.send(request)?)?;
        Ok(response.translated_text)
    }

    fn translate_strings<'a>(
        &'a self,
        strings: &'a [String],
        target_language: &'a str,
        source_language: &'a str,
    ) -> TranslatedStrings<'a> {
        // A failed call ends the sequence
        let mut failed = false;
        Box::new(strings.iter().map_while(move |text| {
            if failed {
                return None;
            }
            let result = self.translate_string(text, target_language, source_language);
            failed = result.is_err();
            Some(result)
        }))
    }
}
