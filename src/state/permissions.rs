//! Permission set for UI affordances (hide or disable actions).
//!
//! DESIGN
//! ======
//! Kept apart from the route catalog: this set never decides whether a page
//! may be viewed, only which controls on it are usable.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use crate::net::types::PermissionSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PermissionsState {
    pub set: PermissionSet,
    pub loaded: bool,
}

impl PermissionsState {
    pub fn replace(&mut self, set: PermissionSet) {
        self.set = set;
        self.loaded = true;
    }

    /// Forget the set on logout so the next user starts from nothing.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
