//! Login page: email + password sign-in and sign-up against the auth provider.

use leptos::prelude::*;

use crate::state::login::{LoginState, is_error_message};

#[component]
pub fn LoginPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let login = RwSignal::new(LoginState::default());
    #[cfg(feature = "hydrate")]
    let session = expect_context::<crate::app::SessionHandle>();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if login.with_untracked(|s| s.loading) {
            return;
        }
        login.update(LoginState::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            use gateway::Navigator;

            use crate::net::navigate::WindowNavigator;
            use crate::state::login::{LoginOutcome, submit_credentials};
            use crate::util::url::resolve_base_url;

            let mode = login.with_untracked(|s| s.mode);
            let email_value = email.get_untracked().trim().to_owned();
            let password_value = password.get_untracked();
            let provider = session.get_value();
            leptos::task::spawn_local(async move {
                let outcome =
                    submit_credentials(provider.auth(), mode, &email_value, &password_value, &resolve_base_url()).await;
                login.update(|s| s.finish_submit(&outcome));
                if let LoginOutcome::Redirect(location) = outcome {
                    WindowNavigator.redirect(location);
                }
            });
        }
    };

    let message = move || login.with(|s| s.message.clone()).unwrap_or_default();

    view! {
        <div class="login-page">
            <div class="card login-card">
                <h1>{move || login.with(|s| s.mode.title())}</h1>
                <p class="login-card__subtitle">"Exam Prep AI - Authorized Access Only"</p>
                <form class="login-form" on:submit=on_submit>
                    <div class="input-group">
                        <label>"Email"</label>
                        <input
                            type="email"
                            placeholder="your@email.com"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </div>
                    <div class="input-group">
                        <label>"Password"</label>
                        <input
                            type="password"
                            placeholder="••••••••"
                            required
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </div>
                    <button class="btn login-button" type="submit" disabled=move || login.with(|s| s.loading)>
                        {move || login.with(LoginState::submit_label)}
                    </button>
                </form>
                <Show when=move || !message().is_empty()>
                    <div
                        class="login-message"
                        class:login-message--error=move || is_error_message(&message())
                        class:login-message--ok=move || !is_error_message(&message())
                    >
                        {message}
                    </div>
                </Show>
                <div class="login-toggle">
                    <button type="button" class="login-toggle__button" on:click=move |_| login.update(LoginState::toggle_mode)>
                        {move || login.with(|s| s.mode.toggle_label())}
                    </button>
                </div>
            </div>
        </div>
    }
}
