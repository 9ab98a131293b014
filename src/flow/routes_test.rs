use super::*;

#[test]
fn signin_path_classifies_as_sign_in() {
    assert_eq!(classify_path("/signin"), RouteClass::SignIn);
    assert_eq!(classify_path("/signin/callback"), RouteClass::SignIn);
}

#[test]
fn root_classifies_as_protected_exact_only() {
    assert_eq!(classify_path("/"), RouteClass::Protected);
    assert_eq!(classify_path("/home"), RouteClass::NotFound);
    assert_eq!(classify_path("//"), RouteClass::NotFound);
}

#[test]
fn unknown_paths_fall_through_to_not_found() {
    assert_eq!(classify_path("/nope"), RouteClass::NotFound);
    assert_eq!(classify_path(""), RouteClass::NotFound);
    assert_eq!(classify_path("/signinx"), RouteClass::NotFound);
}

#[test]
fn sign_in_renders_regardless_of_authorization() {
    assert_eq!(decide(RouteClass::SignIn, false), RouteDecision::Render(RouteClass::SignIn));
    assert_eq!(decide(RouteClass::SignIn, true), RouteDecision::Render(RouteClass::SignIn));
}

#[test]
fn protected_renders_only_when_authorized() {
    assert_eq!(decide(RouteClass::Protected, true), RouteDecision::Render(RouteClass::Protected));
    assert_eq!(decide(RouteClass::Protected, false), RouteDecision::RedirectToSignIn);
}

#[test]
fn not_found_renders_regardless_of_authorization() {
    assert_eq!(decide(RouteClass::NotFound, false), RouteDecision::Render(RouteClass::NotFound));
    assert_eq!(decide(RouteClass::NotFound, true), RouteDecision::Render(RouteClass::NotFound));
}
