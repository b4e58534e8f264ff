use leptos::prelude::*;

use crate::app::AppContext;
use crate::models::{Locale, Theme};

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "浅色",
        Theme::Dark => "深色",
        Theme::Auto => "跟随系统",
    }
}

/// Theme and language pickers, plus logout.
#[component]
pub fn Settings() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let user = Signal::derive(move || ctx.session.with(|s| s.display_name()));

    let theme_options = Theme::ALL
        .into_iter()
        .map(|theme| {
            let selected = move || ctx.theme.get() == theme;
            view! {
                <button
                    class="option"
                    class:selected=selected
                    on:click=move |_| ctx.set_theme(theme)
                >
                    {theme_label(theme)}
                </button>
            }
        })
        .collect_view();

    let locale_options = Locale::ALL
        .into_iter()
        .map(|locale| {
            let selected = move || ctx.locale.get() == locale;
            view! {
                <button
                    class="option"
                    class:selected=selected
                    on:click=move |_| ctx.set_locale(locale)
                >
                    {locale.label()}
                </button>
            }
        })
        .collect_view();

    view! {
        <main class="page settings">
            <header class="page-header">
                <h1>"设置"</h1>
                <span class="muted">{user}</span>
            </header>
            <section class="settings-group">
                <h2>"主题"</h2>
                <div class="options">{theme_options}</div>
            </section>
            <section class="settings-group">
                <h2>"语言"</h2>
                <div class="options">{locale_options}</div>
            </section>
            <button class="logout" on:click=move |_| ctx.logout()>
                "退出登录"
            </button>
        </main>
    }
}
