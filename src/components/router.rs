//! Application router component.
//!
//! Handles path-based routing over the History API.
//!
//! # Architecture
//!
//! - **URL path is the source of truth**: the current [`AppRoute`] is derived
//!   from `location.pathname`
//! - **Every transition is guarded**: in-app links, `popstate` and the initial
//!   load all go through [`AppContext::navigate`] or
//!   [`AppContext::sync_location`]
//! - **Views are resolved lazily**: the route only names its [`View`]; the
//!   component is built when the route becomes current

use leptos::prelude::*;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::app::AppContext;
use crate::components::pages::{Home, Login, Page, Settings};
use crate::models::{AppRoute, View};

// ============================================================================
// Main Router
// ============================================================================

#[component]
pub fn AppRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Guard the initial load
    ctx.sync_location();

    // Back/forward buttons
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            ctx.sync_location();
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    view! {
        <div class="router-view">
            {move || render(ctx.route.get())}
        </div>
    }
}

fn render(route: AppRoute) -> AnyView {
    match route.view() {
        View::Login => view! { <Login /> }.into_any(),
        View::Home => view! { <Home /> }.into_any(),
        View::Settings => view! { <Settings /> }.into_any(),
        _ => view! { <Page route=route /> }.into_any(),
    }
}

// ============================================================================
// Link
// ============================================================================

/// In-app link. Navigates through the guard instead of reloading the page.
#[component]
pub fn Link(#[prop(into)] href: String, children: Children) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let target = href.clone();

    view! {
        <a
            href=href
            on:click=move |ev: leptos::ev::MouseEvent| {
                ev.prevent_default();
                ctx.navigate(&target);
            }
        >
            {children()}
        </a>
    }
}
