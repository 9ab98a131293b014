//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::flow::AuthState;
use crate::pages::{home::HomePage, not_found::NotFoundPage, signin::SignInPage};

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
/// Provides the auth-state mirror and the GraphQL executor as contexts, then
/// sets up the three destinations: `/signin` (public), `/` (protected), and
/// the not-found catch-all, in that priority order.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::default();

    // In-memory mirror of the flow's authoritative state; pages read it,
    // flow operations write it back when they complete.
    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    #[cfg(feature = "hydrate")]
    {
        use crate::session::{SessionStore, Slot, local::LocalStorageStore};

        // One executor, and one response cache, for the page lifetime.
        provide_context(std::rc::Rc::new(crate::net::api::GraphqlApi::new(
            config.endpoint.clone(),
        )));

        // Read both persisted slots into memory at mount.
        let store = LocalStorageStore;
        auth.set(AuthState::from_slots(store.get(Slot::Identity), store.get(Slot::Session)));
    }

    provide_context(config);

    view! {
        <Stylesheet id="leptos" href="/pkg/authgate.css"/>
        <Title text="Authgate"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("signin") view=SignInPage/>
                // Sign-in subpaths (provider callbacks) land on the same
                // page, matching the prefix rule in `flow::classify_path`.
                <Route path=(StaticSegment("signin"), WildcardSegment("rest")) view=SignInPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}

/// Assemble the auth flow against the browser collaborators: localStorage
/// slots, the shared GraphQL executor (as both backend and cache), and a
/// router navigation closure.
#[cfg(feature = "hydrate")]
pub fn client_flow<N: Fn(&str) + 'static>(
    api: std::rc::Rc<crate::net::api::GraphqlApi>,
    navigate: N,
) -> crate::flow::AuthFlow<
    crate::session::local::LocalStorageStore,
    std::rc::Rc<crate::net::api::GraphqlApi>,
    std::rc::Rc<crate::net::api::GraphqlApi>,
    N,
> {
    crate::flow::AuthFlow::restore(
        crate::session::local::LocalStorageStore,
        api.clone(),
        api,
        navigate,
    )
}
