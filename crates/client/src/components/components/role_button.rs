use leptos::{component, view, Callable, Callback, IntoView};

#[component]
pub fn RoleButton(label: &'static str, #[prop(into)] on_press: Callback<()>) -> impl IntoView {
    view! {
        <button class="role-button" on:click=move |_| on_press.call(())>
            {label}
        </button>
    }
}
