use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::QuestionQuery;
use crate::app::AppContext;
use crate::components::router::Link;
use crate::models::Question;

/// Home tab: first page of the question feed.
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let questions = RwSignal::new(Vec::<Question>::new());
    let loading = RwSignal::new(true);

    let api = ctx.api();
    spawn_local(async move {
        // Failures were already shown as a toast
        if let Ok(page) = api.questions().list(&QuestionQuery::page(1)).await {
            questions.set(page.items);
        }
        loading.set(false);
    });

    let greeting = Signal::derive(move || ctx.session.with(|s| s.display_name()));

    view! {
        <main class="page home">
            <header class="page-header">
                <h1>"首页"</h1>
                <span class="greeting">{greeting}</span>
            </header>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="muted">"加载中..."</p> }
            >
                <Show
                    when=move || questions.with(|q| !q.is_empty())
                    fallback=|| view! { <p class="muted">"暂无问题"</p> }
                >
                    <ul class="question-list">
                        <For
                            each=move || questions.get()
                            key=|question| question.id
                            children=move |question: Question| {
                                view! { <QuestionItem question=question /> }
                            }
                        />
                    </ul>
                </Show>
            </Show>
            <Link href="/question/create">"发布问题"</Link>
        </main>
    }
}

#[component]
fn QuestionItem(question: Question) -> impl IntoView {
    let href = format!("/question/{}", question.id);
    let tags = question.tags.join(" · ");

    view! {
        <li class="question-item">
            <Link href=href>{question.title}</Link>
            <span class="question-meta">
                <span class="likes">{format!("♥ {}", question.likes)}</span>
                <span class="tags">{tags}</span>
            </span>
        </li>
    }
}
