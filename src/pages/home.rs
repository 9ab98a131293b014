//! Protected home page behind the authorization guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard re-evaluates the pure authorization predicate on every render;
//! the redirect itself is a one-shot effect so protected content never
//! renders, even transiently, for an unauthorized visitor.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::flow::{AuthState, RouteClass, RouteDecision, SIGN_IN_PATH, decide};

/// Home page: renders only when the visitor is authorized, otherwise
/// redirects to `/signin`.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    let authorized = move || {
        let state = auth.get();
        #[cfg(feature = "hydrate")]
        {
            state.authorized(crate::util::jwt::is_token_expired)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            // No browser clock on the server; never render protected markup.
            state.authorized(|_| true)
        }
    };

    // Navigation side effect, separated from the repeated render predicate
    // and issued at most once.
    let redirected = RwSignal::new(false);
    Effect::new(move || {
        if redirected.get_untracked() {
            return;
        }
        if decide(RouteClass::Protected, authorized()) == RouteDecision::RedirectToSignIn {
            redirected.set(true);
            navigate(SIGN_IN_PATH, NavigateOptions::default());
        }
    });

    view! {
        <Show when=authorized>
            <HomeContent/>
        </Show>
    }
}

/// The protected content plus the logout action.
#[component]
fn HomeContent() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let api = expect_context::<std::rc::Rc<crate::net::api::GraphqlApi>>();
    #[cfg(feature = "hydrate")]
    let navigate = use_navigate();

    let on_logout = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let mut flow = crate::app::client_flow(api, move |path: &str| {
                    navigate(path, NavigateOptions::default());
                });
                flow.logout().await;
                auth.set(flow.state().clone());
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = auth;
        }
    };

    view! {
        <div class="home-page">
            <h1>"Home"</h1>
            <p>"You are signed in."</p>
            <button class="logout-button" on:click=on_logout disabled=move || busy.get()>
                "Logout"
            </button>
        </div>
    }
}
