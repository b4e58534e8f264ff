//! API client: the single gateway between views and the backend.
//!
//! Every call goes through the same pipeline:
//!
//! 1. the request is built against the base URL (query string, JSON body)
//! 2. [`BearerAuth`] attaches the session token, if any
//! 3. the transport settles
//! 4. the response is interpreted:
//!    - 401 tears the session down, notifies, and hard-navigates to login
//!    - any other non-2xx status or transport failure is notified
//!    - the envelope is unwrapped; a non-success `code` is notified
//!
//! Each failure produces exactly one notification and the call returns
//! `Err`. Callers never need to notify again.

use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{API_BASE_URL, CONTENT_TYPE_JSON, LOGIN_PATH, UNAUTHORIZED_STATUS};
use crate::core::error::{ApiError, ApiResult, TransportError};
use crate::core::platform::{Navigator, Notifier};
use crate::core::session::SessionStore;
use crate::core::transport::{BearerAuth, HttpRequest, HttpResponse, Method, Transport};
use crate::models::Envelope;

/// Typed query parameters.
///
/// Implementors list their set fields; `None` fields are left out of the
/// query string entirely.
pub trait QueryParams {
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

impl QueryParams for () {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}

impl<Q: QueryParams> QueryParams for Option<Q> {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        self.as_ref().map(Q::query_pairs).unwrap_or_default()
    }
}

/// HTTP client wrapper around a [`Transport`].
pub struct ApiClient<T> {
    base_url: String,
    transport: BearerAuth<T>,
    session: Rc<SessionStore>,
    notifier: Rc<dyn Notifier>,
    navigator: Rc<dyn Navigator>,
}

impl<T: Transport> ApiClient<T> {
    pub fn new(
        transport: T,
        session: Rc<SessionStore>,
        notifier: Rc<dyn Notifier>,
        navigator: Rc<dyn Navigator>,
    ) -> Self {
        Self {
            base_url: API_BASE_URL.to_string(),
            transport: BearerAuth::new(transport, session.clone()),
            session,
            notifier,
            navigator,
        }
    }

    /// Resolve requests against `base_url` instead of [`API_BASE_URL`].
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    // =========================================================================
    // Verbs
    // =========================================================================

    pub async fn get<R: DeserializeOwned>(
        &self,
        path: &str,
        query: &impl QueryParams,
    ) -> ApiResult<R> {
        let url = self.url(path, &query.query_pairs());
        self.execute(HttpRequest::new(Method::Get, url)).await
    }

    pub async fn post<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        let request = self.with_json(HttpRequest::new(Method::Post, self.url(path, &[])), body)?;
        self.execute(request).await
    }

    /// POST without a request body (like/unlike, logout).
    pub async fn post_empty<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.execute(HttpRequest::new(Method::Post, self.url(path, &[])))
            .await
    }

    pub async fn put<R: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<R> {
        let request = self.with_json(HttpRequest::new(Method::Put, self.url(path, &[])), body)?;
        self.execute(request).await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> ApiResult<R> {
        self.execute(HttpRequest::new(Method::Delete, self.url(path, &[])))
            .await
    }

    // =========================================================================
    // Pipeline
    // =========================================================================

    fn url(&self, path: &str, query: &[(&'static str, String)]) -> String {
        let mut url = format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        if !query.is_empty() {
            let encoded = url::form_urlencoded::Serializer::new(String::new())
                .extend_pairs(query.iter().map(|(k, v)| (*k, v.as_str())))
                .finish();
            url.push('?');
            url.push_str(&encoded);
        }
        url
    }

    fn with_json<B: Serialize + ?Sized>(
        &self,
        request: HttpRequest,
        body: &B,
    ) -> ApiResult<HttpRequest> {
        match serde_json::to_string(body) {
            Ok(json) => Ok(request.with_body(json)),
            Err(err) => {
                let err = ApiError::Encode(err.to_string());
                self.report(&err);
                Err(err)
            }
        }
    }

    async fn execute<R: DeserializeOwned>(&self, request: HttpRequest) -> ApiResult<R> {
        let request = request.with_header("Content-Type", CONTENT_TYPE_JSON);
        log::debug!("{} {}", request.method, request.url);

        let outcome = self.transport.send(request).await;
        let payload = match self.interpret(outcome) {
            Ok(payload) => payload,
            Err(err) => {
                self.report(&err);
                return Err(err);
            }
        };

        serde_json::from_value(payload).map_err(|err| {
            let err = ApiError::from(err);
            self.report(&err);
            err
        })
    }

    fn interpret(&self, outcome: Result<HttpResponse, TransportError>) -> ApiResult<Value> {
        let response = outcome?;
        if response.status == UNAUTHORIZED_STATUS {
            return Err(ApiError::SessionExpired);
        }
        if !response.is_success() {
            return Err(TransportError::Status(response.status).into());
        }

        let envelope: Envelope<Value> = serde_json::from_str(&response.body)?;
        envelope.into_payload()
    }

    /// Surface `err` to the user, applying the session-expiry teardown.
    fn report(&self, err: &ApiError) {
        log::warn!("request failed: {err:?}");
        if err.is_session_expired() {
            self.session.logout();
            self.notifier.notify(&err.user_message());
            self.navigator.redirect(LOGIN_PATH);
        } else {
            self.notifier.notify(&err.user_message());
        }
    }
}
