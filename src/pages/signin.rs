//! Sign-in page hosting the identity-provider login widget.
//!
//! SYSTEM CONTEXT
//! ==============
//! This destination is public. A successful widget login hands
//! (identity token, display name) to the auth flow; the page stays put until
//! the exchange completes (the flow navigates on success) or surfaces a
//! fatal error, in which case the identity token is already persisted and a
//! retry skips the provider round trip.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::flow::ExchangeError;

#[cfg(any(test, feature = "hydrate"))]
fn exchange_failed_message(err: &ExchangeError) -> String {
    format!("Sign-in failed: {err}. Press login to retry.")
}

#[cfg(any(test, feature = "hydrate"))]
const EXCHANGING_MESSAGE: &str = "Signing in...";

/// Sign-in page: one button that shows the external login widget.
#[component]
pub fn SignInPage() -> impl IntoView {
    let busy = RwSignal::new(false);
    let info = RwSignal::new(String::new());

    // The widget is mounted and subscribed once per page; the button only
    // re-shows it, so repeated clicks never stack subscriptions or start
    // concurrent exchanges.
    #[cfg(feature = "hydrate")]
    let widget = {
        let auth = expect_context::<RwSignal<crate::flow::AuthState>>();
        let config = expect_context::<crate::config::AppConfig>();
        let api = expect_context::<std::rc::Rc<crate::net::api::GraphqlApi>>();
        let navigate = leptos_router::hooks::use_navigate();
        crate::util::widget::IdentityWidget::mount(
            &config.client_id,
            &config.domain,
            move |identity_token, display_name| {
                if busy.get_untracked() {
                    return;
                }
                busy.set(true);
                info.set(EXCHANGING_MESSAGE.to_owned());
                let api = api.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let mut flow = crate::app::client_flow(api, move |path: &str| {
                        navigate(path, leptos_router::NavigateOptions::default());
                    });
                    let result = flow.login(identity_token, display_name).await;
                    auth.set(flow.state().clone());
                    if let Err(err) = result {
                        info.set(exchange_failed_message(&err));
                    }
                    busy.set(false);
                });
            },
        )
    };

    let on_login = move |_| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "hydrate")]
        if let Some(widget) = widget.as_ref() {
            widget.show();
        }
    };

    view! {
        <div class="signin-page">
            <div class="signin-card">
                <h1>"Sign in"</h1>
                <button class="signin-button" on:click=on_login disabled=move || busy.get()>
                    "Login"
                </button>
                <Show when=move || !info.get().is_empty()>
                    <p class="signin-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
