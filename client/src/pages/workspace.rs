//! Workspace page: upload study material and browse generated questions.
//!
//! ARCHITECTURE
//! ============
//! The page owns the input signals (picked files, syllabus text) and a
//! `WorkspaceState` signal. Button handlers spawn the async actions from
//! `state::workspace`, which write results back through the signal.

use gateway::UploadFile;
use leptos::prelude::*;

use crate::components::question_item::QuestionItem;
use crate::config;
use crate::state::auth::AuthState;
use crate::state::workspace::{ActionSlot, WorkspaceState};
use crate::util::auth::install_unauth_redirect;

#[cfg(feature = "hydrate")]
fn backend() -> gateway::BackendClient<crate::net::fetch::FetchTransport> {
    gateway::BackendClient::new(crate::net::fetch::FetchTransport, &config::gateway_config().backend_url)
}

/// Store the first file picked in the input behind `ev` into `slot`.
#[cfg(feature = "hydrate")]
fn pick_file(ev: &leptos::ev::Event, slot: RwSignal<Option<UploadFile>>) {
    let input = event_target::<web_sys::HtmlInputElement>(ev);
    leptos::task::spawn_local(async move {
        slot.set(crate::net::files::read_selected_file(&input).await);
    });
}

#[component]
pub fn WorkspacePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let workspace = RwSignal::new(WorkspaceState::default());
    let book_file = RwSignal::new(None::<UploadFile>);
    let image_file = RwSignal::new(None::<UploadFile>);
    let syllabus_text = RwSignal::new(String::new());
    let questions = Memo::new(move |_| workspace.with(|s| s.questions.clone()));
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::SessionHandle>();

    install_unauth_redirect(
        auth,
        config::gateway_config().auth.is_configured(),
        crate::net::navigate::WindowNavigator,
    );

    let on_upload_book = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let file = book_file.get_untracked();
            leptos::task::spawn_local(async move {
                crate::state::workspace::upload_book(&backend(), &workspace, file).await;
            });
        }
    };

    let on_generate = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let text = syllabus_text.get_untracked();
            leptos::task::spawn_local(async move {
                crate::state::workspace::generate_from_syllabus(&backend(), &workspace, &text).await;
            });
        }
    };

    let on_generate_from_image = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let file = image_file.get_untracked();
            leptos::task::spawn_local(async move {
                crate::state::workspace::generate_from_image(&backend(), &workspace, file).await;
            });
        }
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            let provider = session.get_value();
            leptos::task::spawn_local(async move {
                provider.sign_out(&crate::net::navigate::WindowNavigator).await;
            });
        }
    };

    let on_book_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        pick_file(&ev, book_file);
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, book_file);
    };

    let on_image_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "hydrate")]
        pick_file(&ev, image_file);
        #[cfg(not(feature = "hydrate"))]
        let _ = (ev, image_file);
    };

    let label = move |slot: ActionSlot| {
        if workspace.with(|s| s.is_loading(slot)) { slot.busy_label() } else { slot.idle_label() }
    };
    let busy = move |slot: ActionSlot| workspace.with(|s| s.is_loading(slot));

    view! {
        <Show
            when=move || !auth.with(|a| a.loading)
            fallback=|| view! { <div class="workspace-loading">"Loading..."</div> }
        >
            <main class="container">
                <div class="header">
                    <div>
                        <h1>"Exam Prep AI"</h1>
                        <p>"Upload your books, set the syllabus, and ace your exams."</p>
                    </div>
                    <div class="header__account">
                        <span class="header__email">{move || auth.with(|a| a.email().to_owned())}</span>
                        <button class="btn" on:click=on_logout>"Logout"</button>
                    </div>
                </div>

                <div class="card">
                    <h2>"1. Upload Study Material"</h2>
                    <div class="input-group">
                        <label>"Select Book PDF"</label>
                        <input type="file" accept=".pdf" on:change=on_book_change/>
                    </div>
                    <button
                        class="btn"
                        on:click=on_upload_book
                        disabled=move || book_file.with(Option::is_none) || busy(ActionSlot::Book)
                    >
                        {move || label(ActionSlot::Book)}
                    </button>
                    {move || {
                        workspace
                            .with(|s| s.upload_status.clone())
                            .map(|status| view! { <p class="upload-status">{status}</p> })
                    }}
                </div>

                <div class="card">
                    <h2>"2. Set Syllabus"</h2>
                    <div class="input-group">
                        <label>"Paste Syllabus Topics"</label>
                        <textarea
                            rows="5"
                            placeholder="Enter topics, chapters, or paste the syllabus here..."
                            prop:value=move || syllabus_text.get()
                            on:input=move |ev| syllabus_text.set(event_target_value(&ev))
                        ></textarea>
                    </div>
                    <button
                        class="btn"
                        on:click=on_generate
                        disabled=move || syllabus_text.with(|t| t.trim().is_empty()) || busy(ActionSlot::Syllabus)
                    >
                        {move || label(ActionSlot::Syllabus)}
                    </button>
                </div>

                <div class="card">
                    <h2>"3. Upload Question Paper Image (Optional)"</h2>
                    <p class="card__hint">
                        "Upload an image of a previous year question paper to get questions and detailed answers."
                    </p>
                    <div class="input-group">
                        <label>"Select Question Paper Image"</label>
                        <input type="file" accept="image/*" on:change=on_image_change/>
                    </div>
                    <button
                        class="btn"
                        on:click=on_generate_from_image
                        disabled=move || image_file.with(Option::is_none) || busy(ActionSlot::Image)
                    >
                        {move || label(ActionSlot::Image)}
                    </button>
                </div>

                {move || {
                    workspace
                        .with(|s| s.warning.clone())
                        .map(|warning| {
                            view! {
                                <div class="warning-banner">
                                    <strong>"Warning:"</strong>
                                    " "
                                    {warning}
                                </div>
                            }
                        })
                }}

                <Show when=move || questions.with(|q| !q.is_empty())>
                    <div class="questions-section">
                        <h2>"Generated Questions"</h2>
                        <For
                            each=move || questions.get().into_iter().enumerate()
                            key=|(index, question)| (*index, question.question.clone())
                            children=move |(index, question)| view! { <QuestionItem index=index question=question/> }
                        />
                    </div>
                </Show>
            </main>
        </Show>
    }
}
