//! Placeholder for routes the catalog marks as `UnderConstruction`.

use leptos::prelude::*;

#[component]
pub fn UnderConstructionPage() -> impl IntoView {
    view! {
        <div class="under-construction-page">
            <h1>"Under construction"</h1>
            <p>"This page is not available yet. Check back soon."</p>
        </div>
    }
}
