//! Access-denied view, shown by the gate and reachable at `/access-denied`.

use leptos::prelude::*;

use crate::state::ui::DeniedState;

#[component]
pub fn AccessDeniedPage() -> impl IntoView {
    let denied = expect_context::<RwSignal<DeniedState>>();
    let attempted = move || denied.with(|d| d.attempted_path.clone());

    view! {
        <div class="access-denied-page">
            <h1>"Access denied"</h1>
            <p>"You do not have permission to view this page."</p>
            <Show when=move || attempted().is_some()>
                <p class="access-denied-page__path">
                    "Requested: "
                    <code>{move || attempted().unwrap_or_default()}</code>
                </p>
            </Show>
            <a class="btn btn--primary" href="/dashboard">
                "Back to dashboard"
            </a>
        </div>
    }
}
