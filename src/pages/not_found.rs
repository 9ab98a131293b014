//! Catch-all page for unmatched destinations.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

/// Not-found view; lowest routing priority, never access-controlled.
#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="not-found-page">
            <p>"Sorry, no page found at " {move || location.pathname.get()}</p>
            <a href="/">"Go Home"</a>
        </div>
    }
}
