use leptos::{component, store_value, view, CollectView, IntoView};
use shared::{
    store::Action,
    types::{StudentId, WorkoutId},
};
use tracing::info;

use crate::{store::Store, utils::alert};

/// Assign buttons for every student of the roster, followed by who already
/// has the workout. Repeated clicks are fine, the store ignores duplicates
#[component]
pub fn AssignmentPanel(workout_id: WorkoutId) -> impl IntoView {
    let store = Store::use_store();
    let roster = store.roster();
    let workout_id = store_value(workout_id);

    let assign = move |student_id: StudentId| {
        let workout_id = workout_id.get_value();
        info!(%student_id, %workout_id, "Assigning workout");
        store.dispatch(Action::AssignWorkout {
            student_id,
            workout_id,
        });
        alert("Treino atribuído", "Plano disponível para o aluno selecionado.");
    };

    let assigned_names = move || {
        store.with(|state| {
            workout_id.with_value(|id| {
                roster.with_value(|roster| {
                    state
                        .assigned_students(id, roster)
                        .into_iter()
                        .map(|student| student.name.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                })
            })
        })
    };

    let buttons = roster.with_value(|roster| {
        roster
            .iter()
            .cloned()
            .map(|student| {
                let student_id = student.id;
                view! {
                    <button
                        class="assignment-button"
                        on:click=move |_| assign(student_id.clone())
                    >
                        {student.name}
                    </button>
                }
            })
            .collect_view()
    });

    view! {
        <p class="assignment-title">"Atribuir para:"</p>
        <div class="assignment-row">{buttons}</div>
        {move || {
            let names = assigned_names();
            (!names.is_empty())
                .then(|| view! { <p class="assigned-list">{format!("Atribuído para: {names}")}</p> })
        }}
    }
}
