//! Event-driven driver around [`evaluate`].
//!
//! SYSTEM CONTEXT
//! ==============
//! The UI layer reports path and auth changes; the controller owns the
//! per-visit one-shot flags, runs the catalog fetches the decision asks for,
//! and applies redirects through a [`Navigator`]. Everything is single-threaded:
//! state lives in `Rc<RefCell<_>>` and no borrow is held across an `.await`.

#[cfg(test)]
#[path = "gate_controller_test.rs"]
mod gate_controller_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::config::GateConfig;
use crate::state::catalog_cache::RouteCatalogCache;
use crate::state::navigation::NavigationAttempt;
use crate::util::gate::{GateDecision, GateEffect, GateInput, GateVerdict, evaluate};

/// Router seam. Implementations must use replace semantics so the back
/// button does not return to the denied page.
pub trait Navigator {
    fn redirect(&self, to: &str, attempted_path: &str);
}

struct Inner {
    config: GateConfig,
    cache: RouteCatalogCache,
    navigator: Rc<dyn Navigator>,
    authenticated: Cell<bool>,
    attempt: RefCell<NavigationAttempt>,
    verdict: Cell<GateVerdict>,
}

/// Cheap to clone; clones drive the same gate.
#[derive(Clone)]
pub struct GateController {
    inner: Rc<Inner>,
}

impl GateController {
    pub fn new(config: GateConfig, cache: RouteCatalogCache, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            inner: Rc::new(Inner {
                config,
                cache,
                navigator,
                authenticated: Cell::new(false),
                attempt: RefCell::new(NavigationAttempt::default()),
                verdict: Cell::new(GateVerdict::Checking),
            }),
        }
    }

    pub fn cache(&self) -> &RouteCatalogCache {
        &self.inner.cache
    }

    pub fn config(&self) -> &GateConfig {
        &self.inner.config
    }

    /// Verdict of the most recent evaluation.
    pub fn verdict(&self) -> GateVerdict {
        self.inner.verdict.get()
    }

    pub fn path(&self) -> String {
        self.inner.attempt.borrow().path.clone()
    }

    /// What to render for `path` given the last `reported` verdict.
    ///
    /// A path the gate has not observed yet is still checking, whatever was
    /// reported for the previous one.
    pub fn verdict_for(&self, path: &str, reported: GateVerdict) -> GateVerdict {
        if self.inner.attempt.borrow().path == path { reported } else { GateVerdict::Checking }
    }

    /// Record the current pathname. A new path re-arms the one-shot refresh.
    pub fn set_path(&self, path: &str) {
        if self.inner.attempt.borrow_mut().observe(path) {
            self.inner.verdict.set(GateVerdict::Checking);
        }
    }

    /// Record the session flag. Logging out drops the cached catalog.
    pub fn set_authenticated(&self, authenticated: bool) {
        let was = self.inner.authenticated.replace(authenticated);
        if was && !authenticated {
            leptos::logging::log!("session ended; clearing route catalog");
            self.inner.cache.clear();
        }
    }

    /// Bring the verdict up to date with the current inputs.
    pub async fn sync(&self) -> GateVerdict {
        self.sync_with(|_| {}).await
    }

    /// Like [`sync`](Self::sync), reporting every intermediate verdict.
    ///
    /// The first report happens before any network call, so the caller can
    /// show a spinner while the catalog loads.
    pub async fn sync_with(&self, mut report: impl FnMut(GateVerdict)) -> GateVerdict {
        loop {
            if self.inner.authenticated.get() && self.inner.cache.should_auto_fetch() {
                // The fetch raises the loading flag before suspending, so the
                // preview sees the catalog as loading.
                let preview = async { report(self.decide().verdict) };
                futures::join!(self.inner.cache.fetch(), preview);
            }

            let decision = self.evaluate_now();
            report(decision.verdict);
            if decision.effect != GateEffect::ForceRefresh {
                return decision.verdict;
            }
            self.inner.cache.refresh().await;
        }
    }

    /// Decision for the current inputs, with no side effects.
    fn decide(&self) -> GateDecision {
        let inner = &*self.inner;
        let attempt = inner.attempt.borrow();
        inner.cache.with(|catalog| {
            evaluate(&GateInput {
                path: &attempt.path,
                authenticated: inner.authenticated.get(),
                catalog,
                refreshed_for_path: attempt.refreshed_for_path,
                config: &inner.config,
            })
        })
    }

    /// One evaluation against current state, applying its effect except the
    /// forced refresh, which is returned for the caller to run.
    fn evaluate_now(&self) -> GateDecision {
        let inner = &*self.inner;
        let decision = self.decide();
        inner.verdict.set(decision.verdict);

        match &decision.effect {
            GateEffect::ForceRefresh => {
                let mut attempt = inner.attempt.borrow_mut();
                attempt.mark_refreshed();
                leptos::logging::log!("no catalog access for {}; refreshing once", attempt.path);
            }
            GateEffect::Redirect { to, attempted_path } => {
                let first = inner.attempt.borrow_mut().mark_redirected();
                if first {
                    leptos::logging::log!("access denied for {attempted_path}; redirecting to {to}");
                    inner.navigator.redirect(to, attempted_path);
                }
            }
            GateEffect::None => {}
        }
        decision
    }
}
