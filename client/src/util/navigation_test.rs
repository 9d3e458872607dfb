use super::*;

#[test]
fn normalize_path_strips_query_fragment_and_trailing_slash() {
    assert_eq!(normalize_path("/login/"), "/login");
    assert_eq!(normalize_path("/login?next=/budgets"), "/login");
    assert_eq!(normalize_path("/budgets/new#form"), "/budgets/new");
    assert_eq!(normalize_path("/"), "/");
    assert_eq!(normalize_path(""), "/");
}

#[test]
fn login_and_register_are_public() {
    assert!(is_public_route("/login"));
    assert!(is_public_route("/register/"));
    assert!(!is_protected_route("/login?x=1"));
}

#[test]
fn every_listed_route_is_protected() {
    for route in PROTECTED_ROUTES {
        assert!(is_protected_route(route), "{route} should be protected");
    }
}

#[test]
fn unknown_routes_are_protected() {
    assert!(is_protected_route("/"));
    assert!(is_protected_route("/settings"));
    assert!(is_protected_route("/loginx"));
}

#[test]
fn login_route_detection_ignores_register() {
    assert!(is_login_route("/login/"));
    assert!(!is_login_route("/register"));
}

fn with_owner(f: impl FnOnce()) {
    Owner::new().with(f);
}

#[test]
fn router_navigator_queues_one_replace() {
    with_owner(|| {
        let navigator = RouterNavigator::new();
        navigator.arrived("/dashboard".to_owned());

        navigator.replace(LOGIN_PATH);
        navigator.replace("/login/");

        assert_eq!(navigator.take_pending().as_deref(), Some(LOGIN_PATH));
        assert_eq!(navigator.take_pending(), None);
        assert_eq!(navigator.current_path().as_deref(), Some(LOGIN_PATH));
    });
}

#[test]
fn replace_to_current_path_is_dropped() {
    with_owner(|| {
        let navigator = RouterNavigator::new();
        navigator.arrived("/login".to_owned());
        navigator.replace(LOGIN_PATH);
        assert_eq!(navigator.take_pending(), None);
    });
}

#[test]
fn a_later_target_can_follow_once_taken() {
    with_owner(|| {
        let navigator = RouterNavigator::new();
        navigator.replace(LOGIN_PATH);
        assert_eq!(navigator.take_pending().as_deref(), Some(LOGIN_PATH));
        navigator.replace(DASHBOARD_PATH);
        assert_eq!(navigator.take_pending().as_deref(), Some(DASHBOARD_PATH));
    });
}
