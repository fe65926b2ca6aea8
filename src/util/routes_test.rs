use super::*;

// =============================================================
// is_under
// =============================================================

#[test]
fn is_under_requires_slash_boundary() {
    assert!(is_under("/roles/5", "/roles"));
    assert!(is_under("/roles/5/edit", "/roles"));
    assert!(!is_under("/rolesextra", "/roles"));
    assert!(!is_under("/roles", "/roles"));
}

// =============================================================
// is_public_route
// =============================================================

#[test]
fn public_route_matches_by_prefix() {
    let public = ["/login", "/register"];
    assert!(is_public_route("/login", &public));
    assert!(is_public_route("/login/sso", &public));
    assert!(is_public_route("/register", &public));
    assert!(!is_public_route("/roles", &public));
}

#[test]
fn public_route_empty_list_matches_nothing() {
    let public: [&str; 0] = [];
    assert!(!is_public_route("/login", &public));
}

// =============================================================
// is_resource_detail_page
// =============================================================

#[test]
fn numeric_id_is_detail_page() {
    assert!(is_resource_detail_page("/roles/5"));
    assert!(is_resource_detail_page("/roles/5/"));
    assert!(is_resource_detail_page("/dashboard/42"));
}

#[test]
fn uuid_and_object_id_are_detail_pages() {
    assert!(is_resource_detail_page("/users/3f2504e0-4f89-41d3-9a0c-0305e82c3301"));
    assert!(is_resource_detail_page("/tickets/507f1f77bcf86cd799439011"));
}

#[test]
fn named_sub_page_is_not_detail_page() {
    assert!(!is_resource_detail_page("/dashboard/settings"));
    assert!(!is_resource_detail_page("/roles/permissions"));
}

#[test]
fn list_and_nested_paths_are_not_detail_pages() {
    assert!(!is_resource_detail_page("/roles"));
    assert!(!is_resource_detail_page("/roles/"));
    assert!(!is_resource_detail_page("/roles/5/edit"));
    assert!(!is_resource_detail_page("/"));
    assert!(!is_resource_detail_page(""));
    assert!(!is_resource_detail_page("roles/5"));
    assert!(!is_resource_detail_page("//5"));
}

#[test]
fn create_path_is_never_detail_page() {
    assert!(!is_resource_detail_page("/roles/create"));
    assert!(!is_resource_detail_page("/create/5"));
}

// =============================================================
// is_always_allowed
// =============================================================

#[test]
fn always_allowed_exact_match() {
    assert!(is_always_allowed("/dashboard", &["/dashboard"]));
}

#[test]
fn always_allowed_covers_named_sub_page() {
    assert!(is_always_allowed("/dashboard/settings", &["/dashboard"]));
}

#[test]
fn always_allowed_excludes_detail_sub_page() {
    assert!(!is_always_allowed("/dashboard/42", &["/dashboard"]));
}

#[test]
fn always_allowed_requires_boundary() {
    assert!(!is_always_allowed("/dashboards", &["/dashboard"]));
}

#[test]
fn root_entry_only_allows_root() {
    assert!(is_always_allowed("/", &["/"]));
    assert!(!is_always_allowed("/roles", &["/"]));
}

// =============================================================
// classify
// =============================================================

#[test]
fn classify_orders_public_before_always_allowed() {
    let config = GateConfig {
        public_routes: vec!["/login".to_owned()],
        always_allowed_routes: vec!["/login".to_owned(), "/dashboard".to_owned()],
        ..GateConfig::default()
    };
    assert_eq!(classify("/login", &config), RouteClass::Public);
    assert_eq!(classify("/dashboard", &config), RouteClass::AlwaysAllowed);
    assert_eq!(classify("/dashboard/42", &config), RouteClass::ResourceDetail);
    assert_eq!(classify("/roles", &config), RouteClass::Ordinary);
}
