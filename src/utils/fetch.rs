//! Browser Fetch transport with timeout support.
//!
//! Races every request against [`REQUEST_TIMEOUT_MS`]. The response is
//! handed back with its status untouched; envelope handling happens in the
//! API client.

use js_sys::{Array, Promise};
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, RequestMode, Response};

use crate::config::REQUEST_TIMEOUT_MS;
use crate::core::error::TransportError;
use crate::core::transport::{HttpRequest, HttpResponse, Transport};

// =============================================================================
// Promise Racing Utilities
// =============================================================================

/// Result of a promise race with timeout.
#[derive(Debug)]
pub enum RaceResult {
    /// The promise completed before timeout.
    Completed(JsValue),
    /// Timeout occurred before promise completed.
    TimedOut,
    /// Promise rejected with an error.
    Error(String),
}

/// Race a promise against a timeout using `Promise.race`.
pub async fn race_with_timeout(promise: Promise, timeout_ms: i32) -> RaceResult {
    let Some(window) = web_sys::window() else {
        return RaceResult::Error("Window not available".to_string());
    };

    // Resolves to undefined, which is how a timeout is told apart
    let timeout_promise = Promise::new(&mut |resolve, _| {
        let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, timeout_ms);
    });

    let race_array = Array::new();
    race_array.push(&promise);
    race_array.push(&timeout_promise);
    let race_promise = Promise::race(&race_array);

    match JsFuture::from(race_promise).await {
        Ok(result) if result.is_undefined() => RaceResult::TimedOut,
        Ok(result) => RaceResult::Completed(result),
        Err(e) => RaceResult::Error(js_error_message(&e)),
    }
}

/// Best-effort message of a rejected promise (`TypeError: Failed to fetch`, ...).
fn js_error_message(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_default()
}

// =============================================================================
// Fetch Transport
// =============================================================================

/// [`Transport`] backed by `window.fetch`.
#[derive(Debug, Clone, Copy)]
pub struct FetchTransport {
    timeout_ms: i32,
}

impl FetchTransport {
    pub fn new() -> Self {
        Self {
            timeout_ms: REQUEST_TIMEOUT_MS,
        }
    }

    fn build_request(request: &HttpRequest) -> Result<Request, TransportError> {
        let headers = Headers::new().map_err(|_| TransportError::RequestBuild)?;
        for (name, value) in &request.headers {
            headers
                .set(name, value)
                .map_err(|_| TransportError::RequestBuild)?;
        }

        let opts = RequestInit::new();
        opts.set_method(request.method.as_str());
        opts.set_mode(RequestMode::Cors);
        opts.set_headers(&headers);
        if let Some(body) = &request.body {
            opts.set_body(&JsValue::from_str(body));
        }

        Request::new_with_str_and_init(&request.url, &opts)
            .map_err(|_| TransportError::RequestBuild)
    }
}

impl Default for FetchTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for FetchTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let window = web_sys::window().ok_or(TransportError::Unavailable)?;
        let fetch_request = Self::build_request(&request)?;
        let fetch_promise = window.fetch_with_request(&fetch_request);

        match race_with_timeout(fetch_promise, self.timeout_ms).await {
            RaceResult::TimedOut => Err(TransportError::Timeout),
            RaceResult::Error(msg) => Err(TransportError::Network(msg)),
            RaceResult::Completed(result) => {
                let resp: Response = result.dyn_into().map_err(|_| TransportError::ReadBody)?;
                let status = resp.status();

                let text = JsFuture::from(resp.text().map_err(|_| TransportError::ReadBody)?)
                    .await
                    .map_err(|_| TransportError::ReadBody)?;

                Ok(HttpResponse::new(status, text.as_string().unwrap_or_default()))
            }
        }
    }
}
