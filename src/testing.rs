//! Test doubles for the platform seams.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use serde_json::{Value, json};

use crate::core::client::ApiClient;
use crate::core::error::TransportError;
use crate::core::platform::{Document, Navigator, Notifier};
use crate::core::session::SessionStore;
use crate::core::storage::MemoryStore;
use crate::core::transport::{HttpRequest, HttpResponse, Transport};
use crate::models::User;

/// Transport answering from a script and recording what was sent.
#[derive(Clone, Default)]
pub struct MockTransport {
    responses: Rc<RefCell<VecDeque<Result<HttpResponse, TransportError>>>>,
    requests: Rc<RefCell<Vec<HttpRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ok(&self, response: HttpResponse) {
        self.responses.borrow_mut().push_back(Ok(response));
    }

    pub fn push_err(&self, err: TransportError) {
        self.responses.borrow_mut().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(TransportError::Network("no scripted response".into())))
    }
}

/// HTTP 200 carrying a JSON envelope.
pub fn envelope(code: i64, message: &str, data: Value) -> HttpResponse {
    let body = json!({ "code": code, "message": message, "data": data });
    HttpResponse::new(200, body.to_string())
}

pub fn user(id: u64, username: &str) -> User {
    User {
        id,
        username: username.to_string(),
        email: None,
        avatar: None,
        bio: None,
        created_at: None,
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    visits: RefCell<Vec<String>>,
}

impl RecordingNavigator {
    pub fn visits(&self) -> Vec<String> {
        self.visits.borrow().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.visits.borrow_mut().push(path.to_string());
    }
}

#[derive(Default)]
pub struct RecordingDocument {
    pub lang: RefCell<Option<String>>,
    pub dark: RefCell<Option<bool>>,
}

impl Document for RecordingDocument {
    fn set_lang(&self, lang: &str) {
        *self.lang.borrow_mut() = Some(lang.to_string());
    }

    fn set_dark(&self, dark: bool) {
        *self.dark.borrow_mut() = Some(dark);
    }

    fn set_title(&self, _title: &str) {}
}

/// A fully wired client over in-memory doubles.
pub struct Harness {
    pub storage: Rc<MemoryStore>,
    pub transport: MockTransport,
    pub session: Rc<SessionStore>,
    pub notifier: Rc<RecordingNotifier>,
    pub navigator: Rc<RecordingNavigator>,
    pub api: ApiClient<MockTransport>,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_storage(MemoryStore::new())
    }

    /// Harness whose session starts with `token`.
    pub fn logged_in(token: &str) -> Self {
        Self::with_storage(MemoryStore::with_entries([("token", token)]))
    }

    fn with_storage(storage: MemoryStore) -> Self {
        let storage = Rc::new(storage);
        let session = Rc::new(SessionStore::new(storage.clone()));
        let transport = MockTransport::new();
        let notifier = Rc::new(RecordingNotifier::default());
        let navigator = Rc::new(RecordingNavigator::default());
        let api = ApiClient::new(
            transport.clone(),
            session.clone(),
            notifier.clone(),
            navigator.clone(),
        );
        Self {
            storage,
            transport,
            session,
            notifier,
            navigator,
            api,
        }
    }

    /// Another client sharing every double, resolving against `base_url`.
    pub fn rebuild_api(&self, base_url: &str) -> ApiClient<MockTransport> {
        ApiClient::new(
            self.transport.clone(),
            self.session.clone(),
            self.notifier.clone(),
            self.navigator.clone(),
        )
        .with_base_url(base_url)
    }
}
