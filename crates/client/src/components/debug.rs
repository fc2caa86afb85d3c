use leptos::{component, view, IntoView};

use crate::store::Store;

/// Collapsible log of every dispatched action, as JSON
#[component]
pub fn DebugPanel() -> impl IntoView {
    let store = Store::use_store();

    view! {
        <details class="debug">
            <summary>{move || format!("Debug: {} ações despachadas", store.action_count())}</summary>
            <pre>{move || store.action_log_json()}</pre>
        </details>
    }
}
