//! Route authorization decision.
//!
//! DESIGN
//! ======
//! `evaluate` is a pure function of its input. It never performs side effects;
//! it returns the effect the caller must apply (a one-shot forced refresh or a
//! redirect). Re-running it with identical input yields an identical decision,
//! so re-renders are harmless as long as the caller honors the one-shot flags.
//!
//! ORDER
//! =====
//! 1. Unauthenticated or public path: allowed.
//! 2. Always-allowed path: allowed.
//! 3. Catalog loading: checking.
//! 4. No catalog access and no refresh yet for this path: checking + refresh.
//! 5. Catalog access: allowed (or under construction per route metadata).
//! 6. Otherwise denied, redirecting to the access-denied page unless already there.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::config::GateConfig;
use crate::state::catalog::RouteCatalog;
use crate::util::routes::{RouteClass, classify};

/// What the renderer should show for the current path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateVerdict {
    /// Full-screen spinner while access is being resolved.
    #[default]
    Checking,
    Allowed,
    Denied,
    /// Access granted, but the route is flagged as not built yet.
    UnderConstruction,
}

/// Side effect requested by a decision.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum GateEffect {
    #[default]
    None,
    /// Invalidate and refetch the catalog, then evaluate again.
    ForceRefresh,
    /// Replace the current history entry with `to`.
    Redirect { to: String, attempted_path: String },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GateDecision {
    pub verdict: GateVerdict,
    pub effect: GateEffect,
}

impl GateDecision {
    fn verdict(verdict: GateVerdict) -> Self {
        Self { verdict, effect: GateEffect::None }
    }
}

/// Everything one evaluation depends on.
#[derive(Clone, Copy, Debug)]
pub struct GateInput<'a> {
    pub path: &'a str,
    pub authenticated: bool,
    pub catalog: &'a RouteCatalog,
    pub refreshed_for_path: bool,
    pub config: &'a GateConfig,
}

pub fn evaluate(input: &GateInput<'_>) -> GateDecision {
    let GateInput { path, authenticated, catalog, refreshed_for_path, config } = *input;

    if !authenticated {
        return GateDecision::verdict(GateVerdict::Allowed);
    }
    match classify(path, config) {
        RouteClass::Public | RouteClass::AlwaysAllowed => return GateDecision::verdict(GateVerdict::Allowed),
        RouteClass::ResourceDetail | RouteClass::Ordinary => {}
    }
    if catalog.loading {
        return GateDecision::verdict(GateVerdict::Checking);
    }

    let has_access = catalog.has_access(path);

    if !has_access && !refreshed_for_path {
        return GateDecision { verdict: GateVerdict::Checking, effect: GateEffect::ForceRefresh };
    }

    if has_access {
        if catalog.renders_component(path, &config.under_construction_component) {
            return GateDecision::verdict(GateVerdict::UnderConstruction);
        }
        return GateDecision::verdict(GateVerdict::Allowed);
    }

    if path == config.access_denied_path {
        return GateDecision::verdict(GateVerdict::Denied);
    }
    GateDecision {
        verdict: GateVerdict::Denied,
        effect: GateEffect::Redirect { to: config.access_denied_path.clone(), attempted_path: path.to_owned() },
    }
}
