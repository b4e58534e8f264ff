use leptos::prelude::*;

use crate::components::router::Link;
use crate::config::HOME_PATH;
use crate::models::{AppRoute, View};

/// Titled placeholder for routes without a dedicated view.
#[component]
pub fn Page(route: AppRoute) -> impl IntoView {
    let title = match route.view() {
        View::NotFound => "404".to_string(),
        _ => route
            .meta()
            .title
            .unwrap_or(route.name())
            .to_string(),
    };
    let detail = route.id().map(|id| format!("#{id}"));

    view! {
        <main class="page">
            <header class="page-header">
                <h1>{title}</h1>
                {detail.map(|d| view! { <span class="muted">{d}</span> })}
            </header>
            <p class="muted">{route.path}</p>
            <Link href=HOME_PATH>"返回首页"</Link>
        </main>
    }
}
