use leptos::{component, create_memo, view, For, IntoView, Show, SignalGet, SignalWith};
use shared::types::StudentId;

use crate::{
    components::{Card, WorkoutCard},
    store::Store,
};

/// Read only list of the workouts assigned to the logged in student
#[component]
pub fn UserDashboard(student_id: StudentId) -> impl IntoView {
    let store = Store::use_store();

    let workouts = create_memo(move |_| {
        store.with(|state| {
            state
                .student_workouts(&student_id)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <Card title="Treinos disponíveis">
            <Show
                when=move || workouts.with(|w| !w.is_empty())
                fallback=|| view! { <p class="empty-state">"Nenhum treino atribuído no momento."</p> }
            >
                <For
                    each=move || workouts.get()
                    key=|workout| workout.id.clone()
                    children=|workout| view! { <WorkoutCard workout with_timers=true/> }
                />
            </Show>
        </Card>
    }
}
