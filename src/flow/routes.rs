//! Pure route classification and the redirect decision.
//!
//! DESIGN
//! ======
//! Classification is data in, data out: the navigation side effect happens
//! once in the route guard, never inside repeated render evaluation. Priority
//! order is sign-in, then the exact protected root, then the catch-all.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

/// Public sign-in destination; hosts the identity-provider widget and is
/// never access-controlled itself.
pub const SIGN_IN_PATH: &str = "/signin";

/// Protected home destination, matched exactly.
pub const PROTECTED_PATH: &str = "/";

/// Which of the three destinations a path names.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteClass {
    /// `/signin` and anything beneath it.
    SignIn,
    /// The exact protected root.
    Protected,
    /// Lowest-priority catch-all.
    NotFound,
}

/// Classify a path. First match wins: sign-in before protected before
/// the catch-all.
#[must_use]
pub fn classify_path(path: &str) -> RouteClass {
    if path == SIGN_IN_PATH || path.starts_with("/signin/") {
        RouteClass::SignIn
    } else if path == PROTECTED_PATH {
        RouteClass::Protected
    } else {
        RouteClass::NotFound
    }
}

/// What the router should do for a classified destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteDecision {
    /// Render the destination's view.
    Render(RouteClass),
    /// Redirect to sign-in; the protected view must not render, even
    /// transiently.
    RedirectToSignIn,
}

/// Decide rendering for a destination given the authorization predicate's
/// result. Only the protected destination is gated.
#[must_use]
pub fn decide(class: RouteClass, authorized: bool) -> RouteDecision {
    match class {
        RouteClass::Protected if !authorized => RouteDecision::RedirectToSignIn,
        _ => RouteDecision::Render(class),
    }
}
