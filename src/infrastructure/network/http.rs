// HTTP transport shared by the translation backends
use crate::domain::error::{Result, TranslateError};
use crate::infrastructure::config::Config;
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tokio::runtime::Runtime;

#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Form(Vec<(String, String)>),
    Json(Value),
    /// Pre-serialized payload, sent byte for byte (needed when the bytes are signed)
    Raw { content_type: String, data: Vec<u8> },
}

/// A provider `POST`, described independently of the HTTP client that performs it
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub url: String,
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
    pub body: Option<Body>,
}

impl HttpRequest {
    pub fn post(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            query: Vec::new(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn query(mut self, name: &str, value: impl Into<String>) -> Self {
        self.query.push((name.to_string(), value.into()));
        self
    }

    pub fn header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.headers.push((name.to_string(), value.into()));
        self
    }

    pub fn body(mut self, body: Body) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of the first header named `name` (case-insensitive)
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Value of the first query parameter named `name`
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Every form field named `name`, in order
    pub fn form_values(&self, name: &str) -> Vec<&str> {
        match &self.body {
            Some(Body::Form(fields)) => fields
                .iter()
                .filter(|(n, _)| n == name)
                .map(|(_, v)| v.as_str())
                .collect(),
            _ => Vec::new(),
        }
    }
}

/// Seam between the backends and the network
///
/// Each call blocks until the provider has answered and returns the decoded
/// JSON body. Non-success statuses are reported as `TranslateError::Api`.
pub trait Transport {
    fn send(&self, request: HttpRequest) -> Result<Value>;
}

/// `reqwest`-backed transport
///
/// The async client is driven by a private current-thread runtime, one
/// request at a time, so callers only ever see a blocking call.
pub struct HttpTransport {
    runtime: Runtime,
    client: Client,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?;

        let mut builder = Client::builder()
            .pool_max_idle_per_host(10)
            .pool_idle_timeout(Duration::from_secs(30))
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("autotranslate/", env!("CARGO_PKG_VERSION")));

        if let Some(proxy) = config.http_proxy.as_deref().filter(|p| !p.is_empty()) {
            builder = builder.proxy(reqwest::Proxy::all(proxy)?);
        }

        Ok(Self {
            runtime,
            client: builder.build()?,
        })
    }

    async fn execute(&self, request: HttpRequest) -> Result<Value> {
        let mut builder = self.client.post(&request.url);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = match request.body {
            Some(Body::Form(fields)) => builder.form(&fields),
            Some(Body::Json(value)) => builder.json(&value),
            Some(Body::Raw { content_type, data }) => {
                builder.header(CONTENT_TYPE, content_type).body(data)
            }
            None => builder,
        };

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TranslateError::Api(format!(
                "{} returned {}: {}",
                request.url,
                status,
                text.trim()
            )));
        }

        Ok(response.json::<Value>().await?)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: HttpRequest) -> Result<Value> {
        tracing::trace!(url = %request.url, "sending request");
        self.runtime.block_on(self.execute(request))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_values_keep_repeated_fields_in_order() {
        let request = HttpRequest::post("https://example.test").body(Body::Form(vec![
            ("q".to_string(), "one".to_string()),
            ("client".to_string(), "gtx".to_string()),
            ("q".to_string(), "two".to_string()),
        ]));
        assert_eq!(request.form_values("q"), vec!["one", "two"]);
        assert!(request.form_values("missing").is_empty());
    }

    #[test]
    fn header_lookup_ignores_case() {
        let request = HttpRequest::post("https://example.test").header("X-Amz-Target", "t");
        assert_eq!(request.header_value("x-amz-target"), Some("t"));
        assert_eq!(request.header_value("authorization"), None);
    }

    #[test]
    fn transport_builds_without_network() {
        let transport = HttpTransport::new(&Config::default());
        assert!(transport.is_ok());
    }
}
