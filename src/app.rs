//! Root application module.
//!
//! Composes the services, mirrors their state into signals, and renders the
//! shell. Services are plain `Rc` objects built once here and handed to each
//! other explicitly; components reach them through [`AppContext`].

use std::rc::Rc;

use leptos::prelude::*;
use leptos_use::use_media_query;
use wasm_bindgen_futures::spawn_local;

use crate::components::{AppRouter, ToastQueue, Toasts};
use crate::config::{DARK_SCHEME_QUERY, LOGIN_PATH};
use crate::core::platform::{BrowserDocument, BrowserNavigator, Document};
use crate::core::storage::{KeyValueStore, LocalStore};
use crate::core::{ApiClient, Navigation, SessionStore, guard};
use crate::models::{AppRoute, Locale, SessionSnapshot, Theme};
use crate::stores::{LocaleStore, ThemeStore};
use crate::utils::FetchTransport;
use crate::utils::dom;

// ============================================================================
// Services
// ============================================================================

/// Long-lived service objects, one of each per running client.
pub struct Services {
    pub session: Rc<SessionStore>,
    pub api: Rc<ApiClient<FetchTransport>>,
    pub theme: Rc<ThemeStore>,
    pub locale: Rc<LocaleStore>,
    pub document: Rc<dyn Document>,
}

impl Services {
    fn new(toasts: ToastQueue, system_dark: bool) -> Self {
        let storage: Rc<dyn KeyValueStore> = Rc::new(LocalStore);
        let document: Rc<dyn Document> = Rc::new(BrowserDocument);

        let session = Rc::new(SessionStore::new(storage.clone()));
        let api = Rc::new(ApiClient::new(
            FetchTransport::default(),
            session.clone(),
            Rc::new(toasts),
            Rc::new(BrowserNavigator),
        ));
        let theme = Rc::new(ThemeStore::new(
            storage.clone(),
            document.clone(),
            system_dark,
        ));
        let locale = Rc::new(LocaleStore::new(storage, document.clone()));

        Self {
            session,
            api,
            theme,
            locale,
            document,
        }
    }

    fn dispose(&self) {
        self.session.dispose();
        self.theme.dispose();
        self.locale.dispose();
    }
}

// ============================================================================
// AppContext
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum HistoryUpdate {
    Push,
    Replace,
    Keep,
}

/// How to reconcile the address bar with a route resolved from `location`.
/// Redirected paths like `/` must not linger there.
fn location_update(target: &AppRoute, location: &str) -> HistoryUpdate {
    if target.href() == location {
        HistoryUpdate::Keep
    } else {
        HistoryUpdate::Replace
    }
}

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. The signals mirror the services through
/// their subscriptions, so views never read a service directly to render.
///
/// # Note
///
/// This struct is `Copy`: the services sit in a local [`StoredValue`] and
/// everything else is a signal handle.
#[derive(Clone, Copy)]
pub struct AppContext {
    services: StoredValue<Services, LocalStorage>,
    /// Current session as seen by the views.
    pub session: RwSignal<SessionSnapshot>,
    /// Current route. Only written after the guard has run.
    pub route: RwSignal<AppRoute>,
    pub theme: RwSignal<Theme>,
    pub dark: RwSignal<bool>,
    pub locale: RwSignal<Locale>,
    pub toasts: ToastQueue,
}

impl AppContext {
    pub fn new(system_dark: bool) -> Self {
        let toasts = ToastQueue::new();
        let services = Services::new(toasts, system_dark);

        let session = RwSignal::new(services.session.snapshot());
        let theme = RwSignal::new(services.theme.preference());
        let dark = RwSignal::new(services.theme.is_dark());
        let locale = RwSignal::new(services.locale.locale());

        services
            .session
            .subscribe(move |snapshot| session.set(snapshot.clone()));
        services.theme.subscribe(move |is_dark| dark.set(*is_dark));
        services.locale.subscribe(move |l| locale.set(*l));

        Self {
            services: StoredValue::new_local(services),
            session,
            route: RwSignal::new(AppRoute::resolve(&dom::current_path())),
            theme,
            dark,
            locale,
            toasts,
        }
    }

    pub fn session_store(&self) -> Rc<SessionStore> {
        self.services.with_value(|s| s.session.clone())
    }

    pub fn api(&self) -> Rc<ApiClient<FetchTransport>> {
        self.services.with_value(|s| s.api.clone())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Navigate to `path`, pushing a history entry.
    pub fn navigate(&self, path: &str) {
        self.transition(AppRoute::resolve(path), HistoryUpdate::Push);
    }

    /// Adopt the browser's current location (initial load, back/forward).
    pub fn sync_location(&self) {
        let location = dom::current_path();
        let target = AppRoute::resolve(&location);
        let update = location_update(&target, &location);
        self.transition(target, update);
    }

    fn transition(&self, target: AppRoute, update: HistoryUpdate) {
        let logged_in = self.services.with_value(|s| s.session.is_logged_in());
        let target = match guard(&target, logged_in) {
            Navigation::Proceed => {
                match update {
                    HistoryUpdate::Push => dom::push_path(&target.href()),
                    HistoryUpdate::Replace => dom::replace_path(&target.href()),
                    HistoryUpdate::Keep => {}
                }
                target
            }
            Navigation::Redirect(to) => {
                log::info!("{} requires a session, redirecting to {to}", target.path);
                let redirected = AppRoute::resolve(to);
                dom::replace_path(&redirected.path);
                redirected
            }
        };

        self.services
            .with_value(|s| s.document.set_title(&target.document_title()));
        dom::scroll_to_top();
        self.route.set(target);
    }

    // ========================================================================
    // Session
    // ========================================================================

    /// Load the profile for a token restored from storage.
    pub fn restore_session(&self) {
        let session = self.session_store();
        let api = self.api();
        spawn_local(async move {
            session.restore(&api).await;
        });
    }

    /// Log out on the server and locally, then show the login page.
    ///
    /// The local session is cleared even when the server call fails.
    pub fn logout(&self) {
        let ctx = *self;
        let session = self.session_store();
        let api = self.api();
        spawn_local(async move {
            let _ = api.users().logout().await;
            session.logout();
            ctx.navigate(LOGIN_PATH);
        });
    }

    // ========================================================================
    // Preferences
    // ========================================================================

    pub fn set_theme(&self, theme: Theme) {
        self.services.with_value(|s| s.theme.set(theme));
        self.theme.set(theme);
    }

    pub fn set_locale(&self, locale: Locale) {
        self.services.with_value(|s| s.locale.set(locale));
    }

    fn on_system_dark_change(&self, dark: bool) {
        self.services.with_value(|s| s.theme.on_system_change(dark));
    }

    fn dispose(&self) {
        self.services.with_value(Services::dispose);
    }
}

// ============================================================================
// App
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Creates and provides the global AppContext
/// - Restores the profile of a persisted session
/// - Forwards OS colour-scheme changes to the theme store
/// - Renders the toast overlay and the router outlet
#[component]
pub fn App() -> impl IntoView {
    let system_dark = use_media_query(DARK_SCHEME_QUERY);

    let ctx = AppContext::new(system_dark.get_untracked());
    provide_context(ctx);
    ctx.restore_session();

    Effect::new(move |_| ctx.on_system_dark_change(system_dark.get()));
    on_cleanup(move || ctx.dispose());

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div class="error-screen">
                    <h1>"出错了"</h1>
                    <p class="muted">"页面发生异常，请刷新重试。"</p>
                    <ul>
                        {move || errors.get()
                            .into_iter()
                            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                            .collect::<Vec<_>>()
                        }
                    </ul>
                    <button
                        on:click=move |_| {
                            if let Some(window) = web_sys::window() {
                                let _ = window.location().reload();
                            }
                        }
                    >
                        "刷新"
                    </button>
                </div>
            }
        >
            <Toasts />
            <AppRouter />
        </ErrorBoundary>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_update_keeps_query() {
        let at = |location: &str| location_update(&AppRoute::resolve(location), location);

        assert_eq!(at("/question/42?from=search"), HistoryUpdate::Keep);
        assert_eq!(at("/notes#top"), HistoryUpdate::Keep);
        assert_eq!(at("/?tab=hot"), HistoryUpdate::Replace);
        assert_eq!(at("/notes/"), HistoryUpdate::Replace);
    }
}
