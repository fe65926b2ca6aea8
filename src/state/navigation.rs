#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

/// Per-visit bookkeeping for the current path.
///
/// Both one-shot flags reset whenever the path changes, which bounds the gate
/// to one forced refresh and one redirect per visit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavigationAttempt {
    pub path: String,
    pub previous_path: String,
    pub refreshed_for_path: bool,
    pub redirected_for_path: bool,
}

impl NavigationAttempt {
    /// Record the current path. Returns true if it changed.
    pub fn observe(&mut self, path: &str) -> bool {
        if self.path == path {
            return false;
        }
        self.previous_path = std::mem::replace(&mut self.path, path.to_owned());
        self.refreshed_for_path = false;
        self.redirected_for_path = false;
        true
    }

    /// Returns true the first time it is called for this path.
    pub fn mark_refreshed(&mut self) -> bool {
        !std::mem::replace(&mut self.refreshed_for_path, true)
    }

    /// Returns true the first time it is called for this path.
    pub fn mark_redirected(&mut self) -> bool {
        !std::mem::replace(&mut self.redirected_for_path, true)
    }
}
