//! Route gate component wrapping the routed page area.
//!
//! SYSTEM CONTEXT
//! ==============
//! Bridges Leptos reactivity to [`GateController`]. Two effects watch the
//! pathname and the auth state: one drives the gate, the other the session
//! refresher. Both run their network work in `spawn_local` tasks.

use std::rc::Rc;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::GateConfig;
use crate::net::api::HttpApi;
use crate::pages::access_denied::AccessDeniedPage;
use crate::pages::under_construction::UnderConstructionPage;
use crate::state::auth::AuthState;
use crate::state::catalog_cache::RouteCatalogCache;
use crate::state::permissions::PermissionsState;
use crate::state::ui::{DeniedState, NavLinks};
use crate::util::gate::GateVerdict;
use crate::util::gate_controller::{GateController, Navigator};
use crate::util::session_refresh::{RefreshReport, SessionCheck, SessionRefresher};

/// [`Navigator`] over the router's `navigate` function.
struct RouterNavigator<F> {
    navigate: F,
    denied: RwSignal<DeniedState>,
}

impl<F> Navigator for RouterNavigator<F>
where
    F: Fn(&str, NavigateOptions),
{
    fn redirect(&self, to: &str, attempted_path: &str) {
        self.denied.set(DeniedState { attempted_path: Some(attempted_path.to_owned()) });
        (self.navigate)(to, NavigateOptions { replace: true, ..NavigateOptions::default() });
    }
}

/// Renders `children` only when the current user may view the current path.
#[component]
pub fn RouteGate(children: ChildrenFn) -> impl IntoView {
    let config = expect_context::<GateConfig>();
    let api = expect_context::<HttpApi>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let permissions = expect_context::<RwSignal<PermissionsState>>();
    let denied = expect_context::<RwSignal<DeniedState>>();
    let nav_links = expect_context::<RwSignal<NavLinks>>();
    let pathname = use_location().pathname;

    let api = Rc::new(api);
    let navigator = RouterNavigator { navigate: use_navigate(), denied };
    let controller = StoredValue::new_local(GateController::new(
        config.clone(),
        RouteCatalogCache::new(api.clone()),
        Rc::new(navigator),
    ));
    let refresher = StoredValue::new_local(Rc::new(SessionRefresher::new(api)));
    let verdict = RwSignal::new(GateVerdict::Checking);

    // Gate: re-evaluate on path or auth change.
    Effect::new(move || {
        let path = pathname.get();
        let state = auth.get();
        if state.loading {
            verdict.set(GateVerdict::Checking);
            return;
        }
        let gate = controller.get_value();
        gate.set_authenticated(state.is_authenticated());
        gate.set_path(&path);
        // A new path is back to checking until the task reports.
        verdict.set(gate.verdict());
        leptos::task::spawn_local(async move {
            gate.sync_with(|v| verdict.set(v)).await;
            nav_links.set(gate.cache().with(NavLinks::from_catalog));
        });
    });

    // Session + permission refresh: independent of the verdict.
    Effect::new(move || {
        let path = pathname.get();
        let authenticated = auth.with(AuthState::is_authenticated);
        if !authenticated && permissions.with_untracked(|p| p.loaded) {
            permissions.update(PermissionsState::clear);
        }
        let refresher = refresher.get_value();
        let config = config.clone();
        leptos::task::spawn_local(async move {
            if let Some(report) = refresher.on_path_change(&path, authenticated, &config).await {
                apply_report(report, auth, permissions);
            }
        });
    });

    move || {
        let reported = verdict.get();
        let path = pathname.get();
        match controller.with_value(|gate| gate.verdict_for(&path, reported)) {
            GateVerdict::Checking => view! {
                <div class="route-gate route-gate--checking" role="status" aria-live="polite">
                    <div class="route-gate__spinner"></div>
                </div>
            }
            .into_any(),
            GateVerdict::Denied => view! { <AccessDeniedPage/> }.into_any(),
            GateVerdict::UnderConstruction => view! { <UnderConstructionPage/> }.into_any(),
            GateVerdict::Allowed => children().into_any(),
        }
    }
}

fn apply_report(report: RefreshReport, auth: RwSignal<AuthState>, permissions: RwSignal<PermissionsState>) {
    match report.session {
        SessionCheck::Valid(user) => {
            if auth.with_untracked(|a| a.user.as_ref() != Some(&user)) {
                auth.update(|a| a.resolve(Some(user)));
            }
        }
        SessionCheck::Invalid => {
            leptos::logging::log!("session no longer valid; signing out");
            auth.update(|a| a.resolve(None));
        }
        SessionCheck::Unknown => {}
    }
    // A report landing after sign-out must not bring the old set back.
    if let Some(set) = report.permissions.filter(|_| auth.with_untracked(AuthState::is_authenticated)) {
        permissions.update(|p| p.replace(set));
    }
}
