//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::route_gate::RouteGate;
use crate::net::api::HttpApi;
use crate::net::source::SessionSource;
use crate::pages::{access_denied::AccessDeniedPage, dashboard::DashboardPage};
use crate::state::{
    auth::AuthState,
    permissions::PermissionsState,
    ui::{DeniedState, NavLinks},
};

/// Root application component.
///
/// Provides all shared state contexts, resolves the session once, and mounts
/// every route behind the [`RouteGate`].
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = crate::config::load();
    let api = HttpApi::new(config.api_base.clone());

    let auth = RwSignal::new(AuthState::pending());
    let permissions = RwSignal::new(PermissionsState::default());
    let denied = RwSignal::new(DeniedState::default());
    let nav_links = RwSignal::new(NavLinks::default());

    provide_context(config);
    provide_context(api.clone());
    provide_context(auth);
    provide_context(permissions);
    provide_context(denied);
    provide_context(nav_links);

    leptos::task::spawn_local(async move {
        let user = match api.check_auth().await {
            Ok(user) => user,
            Err(e) => {
                leptos::logging::warn!("initial session check failed: {e}");
                None
            }
        };
        auth.update(|a| a.resolve(user));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/apexscouty.css"/>
        <Title text="ApexScouty"/>

        <Router>
            <RouteGate>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=DashboardPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                    <Route path=StaticSegment("access-denied") view=AccessDeniedPage/>
                </Routes>
            </RouteGate>
        </Router>
    }
}
