//! Shared mocks for unit tests.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use async_trait::async_trait;

use crate::net::source::{RouteSource, SessionSource};
use crate::net::types::{ApiError, PermissionSet, RouteCatalogResponse, RouteEntry, User};
use crate::util::gate_controller::Navigator;

/// Returns `Pending` once, so a concurrent future gets polled in between.
pub struct YieldNow(bool);

impl Future for YieldNow {
    type Output = ();

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<()> {
        if self.0 {
            Poll::Ready(())
        } else {
            self.0 = true;
            cx.waker().wake_by_ref();
            Poll::Pending
        }
    }
}

pub fn yield_now() -> YieldNow {
    YieldNow(false)
}

pub fn routes(paths: &[&str]) -> RouteCatalogResponse {
    RouteCatalogResponse {
        routes: paths
            .iter()
            .map(|p| RouteEntry { path: (*p).to_owned(), component: None })
            .collect(),
    }
}

pub fn user(id: &str) -> User {
    User { id: id.to_owned(), name: format!("user {id}"), email: None }
}

// =========================================================================
// MockRouteSource
// =========================================================================

/// Replays queued responses, then repeats `fallback`.
pub struct MockRouteSource {
    queued: RefCell<VecDeque<Result<RouteCatalogResponse, ApiError>>>,
    fallback: Result<RouteCatalogResponse, ApiError>,
    yields: bool,
    pub calls: Cell<usize>,
}

impl MockRouteSource {
    pub fn always(response: Result<RouteCatalogResponse, ApiError>) -> Self {
        Self { queued: RefCell::new(VecDeque::new()), fallback: response, yields: false, calls: Cell::new(0) }
    }

    pub fn sequence(
        responses: Vec<Result<RouteCatalogResponse, ApiError>>,
        fallback: Result<RouteCatalogResponse, ApiError>,
    ) -> Self {
        Self { queued: RefCell::new(responses.into()), fallback, yields: false, calls: Cell::new(0) }
    }

    /// Suspend once per call so concurrent callers interleave.
    pub fn yielding(mut self) -> Self {
        self.yields = true;
        self
    }
}

#[async_trait(?Send)]
impl RouteSource for MockRouteSource {
    async fn fetch_routes(&self) -> Result<RouteCatalogResponse, ApiError> {
        self.calls.set(self.calls.get() + 1);
        if self.yields {
            yield_now().await;
        }
        let next = self.queued.borrow_mut().pop_front();
        next.unwrap_or_else(|| self.fallback.clone())
    }
}

// =========================================================================
// MockSessionSource
// =========================================================================

pub struct MockSessionSource {
    pub session: Result<Option<User>, ApiError>,
    pub permissions: Result<PermissionSet, ApiError>,
    pub auth_calls: Cell<usize>,
    pub permission_calls: Cell<usize>,
}

impl MockSessionSource {
    pub fn new(session: Result<Option<User>, ApiError>, permissions: Result<PermissionSet, ApiError>) -> Self {
        Self { session, permissions, auth_calls: Cell::new(0), permission_calls: Cell::new(0) }
    }
}

#[async_trait(?Send)]
impl SessionSource for MockSessionSource {
    async fn check_auth(&self) -> Result<Option<User>, ApiError> {
        self.auth_calls.set(self.auth_calls.get() + 1);
        yield_now().await;
        self.session.clone()
    }

    async fn fetch_permissions(&self) -> Result<PermissionSet, ApiError> {
        self.permission_calls.set(self.permission_calls.get() + 1);
        yield_now().await;
        self.permissions.clone()
    }
}

// =========================================================================
// RecordingNavigator
// =========================================================================

#[derive(Default)]
pub struct RecordingNavigator {
    pub redirects: RefCell<Vec<(String, String)>>,
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, to: &str, attempted_path: &str) {
        self.redirects.borrow_mut().push((to.to_owned(), attempted_path.to_owned()));
    }
}
