//! Dashboard landing page listing the pages the user may open.
//!
//! SYSTEM CONTEXT
//! ==============
//! Always allowed for signed-in users. Links come from the route catalog via
//! `NavLinks`, so the list matches what the gate will let through.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{NavLinks, link_label};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let links = expect_context::<RwSignal<NavLinks>>();

    let greeting = move || {
        auth.with(|a| {
            a.user
                .as_ref()
                .map_or_else(|| "Welcome".to_owned(), |user| format!("Welcome, {}", user.name))
        })
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>{greeting}</h1>
            </header>
            <nav class="dashboard-page__links">
                <For
                    each=move || links.get().paths
                    key=|path: &String| path.clone()
                    children=move |path: String| {
                        let label = link_label(&path);
                        view! {
                            <a class="dashboard-page__link" href=path>
                                {label}
                            </a>
                        }
                    }
                />
            </nav>
        </div>
    }
}
