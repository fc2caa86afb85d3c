use leptos::{component, view, Callable, Callback, IntoView};
use shared::session::Session;

use crate::store::Store;

#[component]
pub fn Header(session: Session, on_logout: Callback<()>) -> impl IntoView {
    let student_name = Store::use_store()
        .roster()
        .with_value(|roster| session.subtitle(roster).map(str::to_owned));

    view! {
        <header class="header">
            <div>
                <h1>"App Academia"</h1>
                <p class="header-role">{session.role_label()}</p>
                {student_name.map(|name| view! { <p class="header-student">{name}</p> })}
            </div>
            <button class="logout" on:click=move |_| on_logout.call(())>
                "Sair"
            </button>
        </header>
    }
}
