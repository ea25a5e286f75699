//! Root application component with routing and context providers.

use std::rc::Rc;

use gateway::{AuthClient, SessionProvider};
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config;
use crate::net::fetch::FetchTransport;
use crate::net::storage::LocalSessionStore;
use crate::pages::{login::LoginPage, workspace::WorkspacePage};
use crate::state::auth::{AuthState, mirror_session};

pub type BrowserSessionProvider = SessionProvider<FetchTransport, LocalSessionStore>;

/// Context handle to the single session provider. The provider holds
/// `Rc`/`RefCell` state, so it lives in local (non-`Send`) storage.
pub type SessionHandle = StoredValue<Rc<BrowserSessionProvider>, LocalStorage>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Creates the session provider, mirrors it into the `AuthState` signal, and
/// starts session resolution once hydrated.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let provider = Rc::new(SessionProvider::new(AuthClient::new(
        FetchTransport,
        LocalSessionStore,
        config::gateway_config().auth,
    )));
    let auth = RwSignal::new(AuthState::default());
    mirror_session(&*provider, auth);

    provide_context(auth);
    provide_context::<SessionHandle>(StoredValue::new_local(Rc::clone(&provider)));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        provider.initialize().await;
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/exam-prep.css"/>
        <Title text="Exam Prep AI"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=WorkspacePage/>
            </Routes>
        </Router>
    }
}
