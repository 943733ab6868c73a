//! Shared test helpers

#![allow(dead_code)]

use autotranslate::{Body, HttpRequest, Result, TranslateError, Transport};
use serde_json::Value;
use std::sync::{Arc, Mutex};

type Responder = Box<dyn Fn(&HttpRequest) -> Result<Value>>;

/// In-memory transport that records every request and answers through a closure
pub struct FakeTransport {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    responder: Responder,
}

/// Handle for inspecting what a `FakeTransport` was asked to send
#[derive(Clone)]
pub struct RequestLog(Arc<Mutex<Vec<HttpRequest>>>);

impl RequestLog {
    pub fn requests(&self) -> Vec<HttpRequest> {
        self.0.lock().unwrap().clone()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

impl FakeTransport {
    pub fn new<F>(responder: F) -> (Box<Self>, RequestLog)
    where
        F: Fn(&HttpRequest) -> Result<Value> + 'static,
    {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let transport = Box::new(Self {
            requests: requests.clone(),
            responder: Box::new(responder),
        });
        (transport, RequestLog(requests))
    }
}

impl Transport for FakeTransport {
    fn send(&self, request: HttpRequest) -> Result<Value> {
        let response = (self.responder)(&request);
        self.requests.lock().unwrap().push(request);
        response
    }
}

/// Pretend translation: uppercase with the target language as prefix
pub fn fake_translate(text: &str, target: &str) -> String {
    format!("{}:{}", target, text.to_uppercase())
}

/// JSON body of a request, panicking for any other body kind
pub fn json_body(request: &HttpRequest) -> Value {
    match &request.body {
        Some(Body::Json(value)) => value.clone(),
        Some(Body::Raw { data, .. }) => serde_json::from_slice(data).unwrap(),
        other => panic!("expected a JSON body, got {other:?}"),
    }
}

pub fn numbered(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("string {i}")).collect()
}

pub fn provider_error() -> TranslateError {
    TranslateError::Api("quota exceeded".to_string())
}
