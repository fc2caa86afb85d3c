use leptos::{
    component, create_signal, view, Callable, Callback, CollectView, IntoView, Show, SignalGet,
    SignalUpdate,
};
use shared::session::Session;

use crate::{components::RoleButton, store::Store};

/// Role picker. There are no credentials: students only pick their name
#[component]
pub fn LoginScreen(on_login: Callback<Session>) -> impl IntoView {
    let roster = Store::use_store().roster();
    let (show_students, set_show_students) = create_signal(false);

    view! {
        <div class="login">
            <h1>"Bem-vindo!"</h1>
            <p class="login-subtitle">"Escolha o tipo de acesso:"</p>

            <RoleButton label="Administrador" on_press=move |_: ()| on_login.call(Session::Admin)/>
            <RoleButton label="Professor" on_press=move |_: ()| on_login.call(Session::Teacher)/>
            <RoleButton
                label="Aluno"
                on_press=move |_: ()| set_show_students.update(|show| *show = !*show)
            />

            <Show when=move || show_students.get()>
                <div class="student-selector">
                    <p class="login-subtitle">"Escolha seu nome:"</p>
                    {roster.with_value(|roster| {
                        roster
                            .iter()
                            .cloned()
                            .map(|student| {
                                let session = Session::Student(student.id);
                                view! {
                                    <button
                                        class="student-button"
                                        on:click=move |_| on_login.call(session.clone())
                                    >
                                        {student.name}
                                    </button>
                                }
                            })
                            .collect_view()
                    })}
                </div>
            </Show>
        </div>
    }
}
