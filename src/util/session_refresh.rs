//! Session re-validation on navigation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs beside the route gate, not inside it. On each new path the session is
//! re-checked and the permission set (used for hide/disable affordances) is
//! re-fetched. Nothing here feeds the gate's verdict; a dead session reaches
//! the gate only through the auth flag the caller updates.

#[cfg(test)]
#[path = "session_refresh_test.rs"]
mod session_refresh_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::GateConfig;
use crate::net::source::SessionSource;
use crate::net::types::{PermissionSet, User};
use crate::util::routes::is_public_route;

/// Result of the session re-check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionCheck {
    Valid(User),
    /// The server no longer recognizes the session.
    Invalid,
    /// The check failed; keep whatever state we had.
    Unknown,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RefreshReport {
    pub session: SessionCheck,
    /// `None` when the permission fetch failed.
    pub permissions: Option<PermissionSet>,
}

pub struct SessionRefresher {
    source: Rc<dyn SessionSource>,
    /// Path seen on the previous call, whether or not it triggered.
    last_path: RefCell<Option<String>>,
    authenticated: Cell<bool>,
}

impl SessionRefresher {
    pub fn new(source: Rc<dyn SessionSource>) -> Self {
        Self { source, last_path: RefCell::new(None), authenticated: Cell::new(false) }
    }

    /// Record `path` and the session flag; true when either moved since the
    /// previous call. A session change forgets the last path, so signing in
    /// again on the same page counts as new.
    fn observe(&self, path: &str, authenticated: bool) -> bool {
        if self.authenticated.replace(authenticated) != authenticated {
            self.reset();
        }
        self.last_path.replace(Some(path.to_owned())).as_deref() != Some(path)
    }

    /// Re-check the session and permissions if the path changed.
    ///
    /// Only signed-in users on non-public paths trigger, but every call is
    /// recorded, so `/roles` -> `/login` -> `/roles` refreshes twice.
    /// Returns `None` when nothing was triggered. Both calls run concurrently;
    /// failures are logged and reported as missing data, never returned.
    pub async fn on_path_change(&self, path: &str, authenticated: bool, config: &GateConfig) -> Option<RefreshReport> {
        let changed = self.observe(path, authenticated);
        if !changed || !authenticated || is_public_route(path, &config.public_routes) {
            return None;
        }

        let (session, permissions) = futures::join!(self.source.check_auth(), self.source.fetch_permissions());

        let session = match session {
            Ok(Some(user)) => SessionCheck::Valid(user),
            Ok(None) => SessionCheck::Invalid,
            Err(e) => {
                leptos::logging::warn!("session check failed on {path}: {e}");
                SessionCheck::Unknown
            }
        };
        let permissions = match permissions {
            Ok(set) => Some(set),
            Err(e) => {
                leptos::logging::warn!("permission fetch failed on {path}: {e}");
                None
            }
        };
        Some(RefreshReport { session, permissions })
    }

    fn reset(&self) {
        self.last_path.borrow_mut().take();
    }
}
