use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::app::AppContext;
use crate::components::router::Link;
use crate::config::{APP_NAME, HOME_PATH};
use crate::models::{LoginRequest, SessionPhase};

/// Username/password form. A successful login lands on the home tab.
#[component]
pub fn Login() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let logging_in =
        Signal::derive(move || ctx.session.with(|s| s.phase == SessionPhase::LoggingIn));

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if logging_in.get_untracked() {
            return;
        }

        let credentials = LoginRequest {
            username: username.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        if credentials.username.is_empty() || credentials.password.is_empty() {
            ctx.toasts.push("请输入用户名和密码");
            return;
        }

        let session = ctx.session_store();
        let api = ctx.api();
        spawn_local(async move {
            if session.login(&api, &credentials).await {
                password.set(String::new());
                ctx.navigate(HOME_PATH);
            }
        });
    };

    view! {
        <main class="page login">
            <h1 class="login-title">{APP_NAME}</h1>
            <form class="login-form" on:submit=on_submit>
                <input
                    type="text"
                    placeholder="用户名"
                    autocomplete="username"
                    prop:value=username
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="密码"
                    autocomplete="current-password"
                    prop:value=password
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
                <button type="submit" disabled=logging_in>
                    {move || if logging_in.get() { "登录中..." } else { "登录" }}
                </button>
            </form>
            <p class="login-footer">
                <Link href="/register">"注册账号"</Link>
            </p>
        </main>
    }
}
