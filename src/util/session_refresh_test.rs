use super::*;
use crate::net::types::ApiError;
use crate::test_helpers::{MockSessionSource, user};
use futures::executor::block_on;

fn refresher(source: &Rc<MockSessionSource>) -> SessionRefresher {
    SessionRefresher::new(source.clone())
}

fn permissions(names: &[&str]) -> PermissionSet {
    PermissionSet { permissions: names.iter().map(|n| (*n).to_owned()).collect() }
}

#[test]
fn path_change_runs_both_calls() {
    let source = Rc::new(MockSessionSource::new(Ok(Some(user("u1"))), Ok(permissions(&["roles.edit"]))));
    let refresher = refresher(&source);

    let report = block_on(refresher.on_path_change("/roles", true, &GateConfig::default()));

    assert_eq!(
        report,
        Some(RefreshReport { session: SessionCheck::Valid(user("u1")), permissions: Some(permissions(&["roles.edit"])) })
    );
    assert_eq!(source.auth_calls.get(), 1);
    assert_eq!(source.permission_calls.get(), 1);
}

#[test]
fn calls_run_concurrently() {
    let source = Rc::new(MockSessionSource::new(Ok(Some(user("u1"))), Ok(permissions(&[]))));
    let refresher = refresher(&source);
    let config = GateConfig::default();

    let observed = block_on(async {
        // Both mocks suspend once; both counters are bumped before either resumes.
        let counters = async { (source.auth_calls.get(), source.permission_calls.get()) };
        let (_, counts) = futures::join!(refresher.on_path_change("/roles", true, &config), counters);
        counts
    });

    assert_eq!(observed, (1, 1));
}

#[test]
fn same_path_does_not_trigger_again() {
    let source = Rc::new(MockSessionSource::new(Ok(Some(user("u1"))), Ok(permissions(&[]))));
    let refresher = refresher(&source);
    let config = GateConfig::default();

    block_on(refresher.on_path_change("/roles", true, &config));
    assert_eq!(block_on(refresher.on_path_change("/roles", true, &config)), None);
    assert!(block_on(refresher.on_path_change("/users", true, &config)).is_some());
    assert_eq!(source.auth_calls.get(), 2);
}

#[test]
fn returning_from_public_route_triggers_again() {
    let source = Rc::new(MockSessionSource::new(Ok(Some(user("u1"))), Ok(permissions(&[]))));
    let refresher = refresher(&source);
    let config = GateConfig::default();

    assert!(block_on(refresher.on_path_change("/dashboard", true, &config)).is_some());
    assert_eq!(block_on(refresher.on_path_change("/login", true, &config)), None);
    assert!(block_on(refresher.on_path_change("/dashboard", true, &config)).is_some());
    assert_eq!(source.auth_calls.get(), 2);
    assert_eq!(source.permission_calls.get(), 2);
}

#[test]
fn new_session_on_same_path_triggers_again() {
    let source = Rc::new(MockSessionSource::new(Ok(Some(user("u1"))), Ok(permissions(&[]))));
    let refresher = refresher(&source);
    let config = GateConfig::default();

    assert!(block_on(refresher.on_path_change("/roles", true, &config)).is_some());
    assert_eq!(block_on(refresher.on_path_change("/roles", false, &config)), None);
    assert!(block_on(refresher.on_path_change("/roles", true, &config)).is_some());
    assert_eq!(source.permission_calls.get(), 2);
}

#[test]
fn first_sign_in_triggers_on_current_path() {
    let source = Rc::new(MockSessionSource::new(Ok(Some(user("u1"))), Ok(permissions(&[]))));
    let refresher = refresher(&source);
    let config = GateConfig::default();

    // Session still resolving: the path is seen signed out.
    assert_eq!(block_on(refresher.on_path_change("/roles", false, &config)), None);
    assert!(block_on(refresher.on_path_change("/roles", true, &config)).is_some());
    assert_eq!(source.auth_calls.get(), 1);
}

#[test]
fn skipped_for_public_route_and_signed_out_user() {
    let source = Rc::new(MockSessionSource::new(Ok(Some(user("u1"))), Ok(permissions(&[]))));
    let refresher = refresher(&source);
    let config = GateConfig::default();

    assert_eq!(block_on(refresher.on_path_change("/login", true, &config)), None);
    assert_eq!(block_on(refresher.on_path_change("/roles", false, &config)), None);
    assert_eq!(source.auth_calls.get(), 0);
    assert_eq!(source.permission_calls.get(), 0);
}

#[test]
fn failures_are_swallowed() {
    let source = Rc::new(MockSessionSource::new(
        Err(ApiError::Request("offline".into())),
        Err(ApiError::Status { status: 500 }),
    ));
    let refresher = refresher(&source);

    let report = block_on(refresher.on_path_change("/roles", true, &GateConfig::default()));

    assert_eq!(report, Some(RefreshReport { session: SessionCheck::Unknown, permissions: None }));
}

#[test]
fn expired_session_is_reported_invalid() {
    let source = Rc::new(MockSessionSource::new(Ok(None), Ok(permissions(&[]))));
    let refresher = refresher(&source);

    let report = block_on(refresher.on_path_change("/roles", true, &GateConfig::default()));

    assert_eq!(report.map(|r| r.session), Some(SessionCheck::Invalid));
}
