use leptos::{component, view, For, IntoView};

use crate::{
    components::{Card, ExerciseItem, NewExerciseForm},
    store::Store,
};

#[component]
pub fn AdminDashboard() -> impl IntoView {
    let store = Store::use_store();

    view! {
        <Card title="Cadastro de exercícios">
            <NewExerciseForm/>
            <h3 class="card-subtitle">"Exercícios cadastrados"</h3>
            <For
                each=move || store.with(|state| state.exercises().to_vec())
                key=|exercise| exercise.id.clone()
                children=|exercise| view! { <ExerciseItem exercise/> }
            />
        </Card>
    }
}
