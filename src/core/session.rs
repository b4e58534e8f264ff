//! Session state: bearer token and user profile.
//!
//! The token is mirrored to durable storage so a reload keeps the user
//! logged in. `is_logged_in` is defined as "token is non-empty", and a
//! profile is never held without a token.
//!
//! ```text
//! LoggedOut --login()--> LoggingIn --ok--> LoggedIn
//!     ^                      |                 |
//!     +------ failure -------+                 |
//!     +------- logout() / HTTP 401 ------------+
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::storage_keys;
use crate::core::client::ApiClient;
use crate::core::error::ApiError;
use crate::core::observer::Listeners;
use crate::core::storage::{KeyValueStore, forget, persist};
use crate::core::transport::Transport;
use crate::models::{LoginRequest, SessionPhase, SessionSnapshot, User};

#[derive(Debug, Default)]
struct SessionData {
    token: String,
    profile: Option<User>,
    loading: bool,
    last_error: Option<ApiError>,
}

/// Owner of the authentication state.
pub struct SessionStore {
    storage: Rc<dyn KeyValueStore>,
    data: RefCell<SessionData>,
    listeners: Listeners<SessionSnapshot>,
}

impl SessionStore {
    /// Create the store, restoring a persisted token if one exists.
    pub fn new(storage: Rc<dyn KeyValueStore>) -> Self {
        let token = storage.get(storage_keys::TOKEN).unwrap_or_default();
        Self {
            storage,
            data: RefCell::new(SessionData {
                token,
                ..SessionData::default()
            }),
            listeners: Listeners::new(),
        }
    }

    // =========================================================================
    // Getters
    // =========================================================================

    pub fn token(&self) -> String {
        self.data.borrow().token.clone()
    }

    pub fn is_logged_in(&self) -> bool {
        !self.data.borrow().token.is_empty()
    }

    /// Whether a login call is in flight.
    pub fn is_loading(&self) -> bool {
        self.data.borrow().loading
    }

    pub fn phase(&self) -> SessionPhase {
        let data = self.data.borrow();
        if !data.token.is_empty() {
            SessionPhase::LoggedIn
        } else if data.loading {
            SessionPhase::LoggingIn
        } else {
            SessionPhase::LoggedOut
        }
    }

    pub fn profile(&self) -> Option<User> {
        self.data.borrow().profile.clone()
    }

    pub fn user_id(&self) -> Option<u64> {
        self.data.borrow().profile.as_ref().map(|u| u.id)
    }

    /// Error swallowed by the most recent `login` or `fetch_user_info`.
    pub fn last_error(&self) -> Option<ApiError> {
        self.data.borrow().last_error.clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            phase: self.phase(),
            user: self.profile(),
        }
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    pub fn set_token(&self, token: &str) {
        self.data.borrow_mut().token = token.to_string();
        persist(self.storage.as_ref(), storage_keys::TOKEN, token);
        self.publish();
    }

    /// Drop token and profile, in memory and in storage.
    pub fn clear_token(&self) {
        {
            let mut data = self.data.borrow_mut();
            data.token.clear();
            data.profile = None;
        }
        forget(self.storage.as_ref(), storage_keys::TOKEN);
        self.publish();
    }

    /// Store a profile. Ignored while logged out.
    pub fn set_profile(&self, user: Option<User>) {
        {
            let mut data = self.data.borrow_mut();
            if data.token.is_empty() && user.is_some() {
                log::warn!("dropping profile received without a session");
                return;
            }
            data.profile = user;
        }
        self.publish();
    }

    /// End the session locally.
    ///
    /// Does not call the server; issuing `POST /logout` is up to the caller.
    pub fn logout(&self) {
        log::info!("session cleared");
        self.clear_token();
    }

    // =========================================================================
    // Async flows
    // =========================================================================

    /// Log in and load the profile.
    ///
    /// Returns `false` when the login call fails; the error itself has
    /// already been shown to the user and is kept in [`Self::last_error`].
    /// A failing profile fetch keeps the session: the result is still `true`
    /// with no profile.
    pub async fn login<T: Transport>(&self, api: &ApiClient<T>, credentials: &LoginRequest) -> bool {
        self.set_loading(true);
        let result = api.users().login(credentials).await;

        let ok = match result {
            Ok(res) => {
                self.data.borrow_mut().last_error = None;
                self.set_token(&res.token);
                log::info!("logged in as {}", credentials.username);
                self.fetch_user_info(api).await;
                true
            }
            Err(err) => {
                self.data.borrow_mut().last_error = Some(err);
                false
            }
        };

        self.set_loading(false);
        ok
    }

    /// Load the current user's profile. Returns `None` on failure.
    pub async fn fetch_user_info<T: Transport>(&self, api: &ApiClient<T>) -> Option<User> {
        match api.users().user_info().await {
            Ok(user) => {
                self.set_profile(Some(user.clone()));
                Some(user)
            }
            Err(err) => {
                self.data.borrow_mut().last_error = Some(err);
                None
            }
        }
    }

    /// Load the profile for a token restored from storage.
    pub async fn restore<T: Transport>(&self, api: &ApiClient<T>) -> Option<User> {
        if !self.is_logged_in() {
            return None;
        }
        self.fetch_user_info(api).await
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Register a callback fired on every session change.
    pub fn subscribe(&self, callback: impl Fn(&SessionSnapshot) + 'static) {
        self.listeners.add(callback);
    }

    pub fn dispose(&self) {
        self.listeners.clear();
    }

    fn set_loading(&self, loading: bool) {
        self.data.borrow_mut().loading = loading;
        self.publish();
    }

    fn publish(&self) {
        self.listeners.emit(&self.snapshot());
    }
}
