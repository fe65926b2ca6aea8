//! Session-scoped cache over the route catalog endpoint.
//!
//! DESIGN
//! ======
//! The cache is an explicit object injected into the gate controller rather
//! than ambient global state. Clones share one catalog.
//!
//! ERROR HANDLING
//! ==============
//! Fetch failures never propagate. They are logged, counted, and kept in
//! `last_error`, and the catalog keeps whatever it held before.

#[cfg(test)]
#[path = "catalog_cache_test.rs"]
mod catalog_cache_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::net::source::RouteSource;
use crate::state::catalog::RouteCatalog;

/// What a call to [`RouteCatalogCache::fetch`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    /// Already fetched; no request issued.
    Cached,
    /// Another fetch is running; no request issued.
    InFlight,
    Loaded,
    Failed,
    /// The session ended while the request was running; result dropped.
    Discarded,
}

#[derive(Clone)]
pub struct RouteCatalogCache {
    catalog: Rc<RefCell<RouteCatalog>>,
    source: Rc<dyn RouteSource>,
    epoch: Rc<Cell<u64>>,
}

impl RouteCatalogCache {
    pub fn new(source: Rc<dyn RouteSource>) -> Self {
        Self {
            catalog: Rc::new(RefCell::new(RouteCatalog::default())),
            source,
            epoch: Rc::new(Cell::new(0)),
        }
    }

    /// Snapshot of the current catalog.
    pub fn get(&self) -> RouteCatalog {
        self.catalog.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&RouteCatalog) -> R) -> R {
        f(&self.catalog.borrow())
    }

    /// First-fetch policy: never fetched, nothing cached, idle, no error.
    ///
    /// The error check stops a failing endpoint from being hammered on every
    /// navigation; only a forced refresh retries it.
    pub fn should_auto_fetch(&self) -> bool {
        self.with(|c| !c.fetched && c.permitted_paths.is_empty() && !c.loading && c.last_error.is_none())
    }

    /// Load the catalog unless it is cached or already loading.
    pub async fn fetch(&self) -> FetchOutcome {
        {
            let mut catalog = self.catalog.borrow_mut();
            if catalog.loading {
                return FetchOutcome::InFlight;
            }
            if catalog.fetched {
                return FetchOutcome::Cached;
            }
            catalog.loading = true;
        }
        let epoch = self.epoch.get();

        let result = self.source.fetch_routes().await;

        if self.epoch.get() != epoch {
            leptos::logging::log!("route catalog response dropped: session ended");
            return FetchOutcome::Discarded;
        }
        let mut catalog = self.catalog.borrow_mut();
        catalog.loading = false;
        match result {
            Ok(response) => {
                catalog.apply(response);
                FetchOutcome::Loaded
            }
            Err(e) => {
                catalog.failures += 1;
                leptos::logging::warn!("route catalog fetch failed ({} so far): {e}", catalog.failures);
                catalog.last_error = Some(e);
                FetchOutcome::Failed
            }
        }
    }

    /// Mark the catalog stale so the next [`fetch`](Self::fetch) hits the network.
    pub fn invalidate(&self) {
        self.catalog.borrow_mut().invalidate();
    }

    /// Forced refresh: invalidate, then fetch.
    pub async fn refresh(&self) -> FetchOutcome {
        self.invalidate();
        self.fetch().await
    }

    /// Forget everything on logout. In-flight responses are discarded.
    pub fn clear(&self) {
        self.epoch.set(self.epoch.get() + 1);
        *self.catalog.borrow_mut() = RouteCatalog::default();
    }
}
