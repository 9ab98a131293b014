//! Identity-provider login widget interop.
//!
//! SYSTEM CONTEXT
//! ==============
//! The provider ships its widget as a page-global constructor (`IdentityLock`
//! from its script tag); this app treats it as a black box that eventually
//! yields an opaque identity token and a display name. Profile problems are
//! logged and recovered with an absent name, never surfaced as errors.
//!
//! The widget is constructed and subscribed exactly once per page mount;
//! showing it again reuses the same subscription, so repeated login clicks
//! cannot stack callbacks or start concurrent exchanges.

use wasm_bindgen::{JsCast, JsValue, closure::Closure};

fn str_field(obj: &JsValue, key: &str) -> Option<String> {
    js_sys::Reflect::get(obj, &JsValue::from_str(key)).ok()?.as_string()
}

fn profile_name(payload: &JsValue) -> Option<String> {
    let profile = js_sys::Reflect::get(payload, &JsValue::from_str("profile")).ok()?;
    str_field(&profile, "name")
}

fn method(target: &JsValue, name: &str) -> Option<js_sys::Function> {
    js_sys::Reflect::get(target, &JsValue::from_str(name)).ok()?.dyn_into().ok()
}

/// Handle to a constructed, subscribed provider widget.
pub struct IdentityWidget {
    lock: js_sys::Object,
}

impl IdentityWidget {
    /// Construct the provider widget and subscribe to its `authenticated`
    /// event once. The callback receives the identity token and, when the
    /// profile yields one, the display name.
    ///
    /// Returns `None` when the provider script has not installed its global.
    pub fn mount(
        client_id: &str,
        domain: &str,
        on_authenticated: impl Fn(String, Option<String>) + 'static,
    ) -> Option<Self> {
        let window = web_sys::window()?;
        let Some(ctor) = js_sys::Reflect::get(&window, &JsValue::from_str("IdentityLock"))
            .ok()
            .and_then(|v| v.dyn_into::<js_sys::Function>().ok())
        else {
            leptos::logging::warn!("identity widget unavailable: no IdentityLock global");
            return None;
        };

        let args = js_sys::Array::of2(&JsValue::from_str(client_id), &JsValue::from_str(domain));
        let Ok(lock) = js_sys::Reflect::construct(&ctor, &args) else {
            leptos::logging::warn!("identity widget construction failed");
            return None;
        };

        let on_event = Closure::<dyn FnMut(JsValue)>::new(move |payload: JsValue| {
            let Some(token) = str_field(&payload, "idToken") else {
                leptos::logging::warn!("identity widget: authenticated event without idToken");
                return;
            };
            let name = profile_name(&payload);
            if name.is_none() {
                // Login proceeds with an absent display name.
                leptos::logging::warn!("identity widget: error fetching profile name");
            }
            on_authenticated(token, name);
        });

        if let Some(on_fn) = method(&lock, "on") {
            let _ = on_fn.call2(&lock, &JsValue::from_str("authenticated"), on_event.as_ref());
        }
        // The subscription must outlive this call; the widget owns it from
        // here and it is never re-registered.
        on_event.forget();

        Some(Self { lock })
    }

    /// Show the widget. Safe to call repeatedly; the single mount-time
    /// subscription is reused.
    pub fn show(&self) {
        if let Some(show_fn) = method(&self.lock, "show") {
            let _ = show_fn.call0(&self.lock);
        }
    }
}
