//! HTTP transport seam.
//!
//! [`Transport`] performs one request and reports the raw status and body.
//! It never interprets the response envelope; that is the job of
//! [`ApiClient`](crate::core::client::ApiClient). [`BearerAuth`] decorates
//! any transport with the session's bearer credential.

use std::fmt;
use std::rc::Rc;

use crate::core::error::TransportError;
use crate::core::session::SessionStore;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved outgoing request.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: Method,
    /// Absolute or origin-relative URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_body(mut self, body: String) -> Self {
        self.body = Some(body);
        self
    }

    /// Value of the first header named `name` (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

/// Status and body of a settled request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs HTTP exchanges.
///
/// Implementations return `Ok` for every response that arrived, whatever
/// its status; `Err` is reserved for requests that never completed.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

/// Attaches `Authorization: Bearer <token>` while the session holds a token.
pub struct BearerAuth<T> {
    inner: T,
    session: Rc<SessionStore>,
}

impl<T: Transport> BearerAuth<T> {
    pub fn new(inner: T, session: Rc<SessionStore>) -> Self {
        Self { inner, session }
    }
}

impl<T: Transport> Transport for BearerAuth<T> {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let token = self.session.token();
        let request = if token.is_empty() {
            request
        } else {
            request.with_header("Authorization", format!("Bearer {token}"))
        };
        self.inner.send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::storage::MemoryStore;
    use crate::testing::MockTransport;

    #[tokio::test]
    async fn test_bearer_attached_when_token_present() {
        let session = Rc::new(SessionStore::new(Rc::new(MemoryStore::new())));
        session.set_token("abc123");

        let mock = MockTransport::new();
        mock.push_ok(HttpResponse::new(200, "{}"));
        let auth = BearerAuth::new(mock.clone(), session);

        auth.send(HttpRequest::new(Method::Get, "/api/user"))
            .await
            .expect("mock responds");

        let sent = mock.requests();
        assert_eq!(sent[0].header("authorization"), Some("Bearer abc123"));
    }

    #[tokio::test]
    async fn test_no_header_without_token() {
        let session = Rc::new(SessionStore::new(Rc::new(MemoryStore::new())));
        let mock = MockTransport::new();
        mock.push_ok(HttpResponse::new(200, "{}"));
        let auth = BearerAuth::new(mock.clone(), session);

        auth.send(HttpRequest::new(Method::Get, "/api/questions"))
            .await
            .expect("mock responds");

        assert_eq!(mock.requests()[0].header("Authorization"), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(HttpResponse::new(200, "").is_success());
        assert!(HttpResponse::new(204, "").is_success());
        assert!(!HttpResponse::new(401, "").is_success());
        assert!(!HttpResponse::new(500, "").is_success());
    }
}
