use leptos::{
    component, create_rw_signal, view, For, IntoView, Show, Signal, SignalUpdate, SignalWith,
};
use shared::{forms::WorkoutDraft, store::Action};
use tracing::{info, warn};

use crate::{
    components::{AssignmentPanel, Card, DraftEditor, TextField, WorkoutCard},
    store::Store,
    utils::{alert, alert_form_error},
};

/// Workout composer plus the list of saved workouts with their assignments.
/// The draft lives here and never reaches the store until it is saved
#[component]
pub fn TeacherDashboard() -> impl IntoView {
    let store = Store::use_store();
    let draft = create_rw_signal(WorkoutDraft::default());

    let save = move |_| match draft.with(WorkoutDraft::build_workout) {
        Ok(workout) => {
            info!(id = %workout.id, exercises = workout.exercises.len(), "Saving workout");
            store.dispatch(Action::CreateWorkout(workout));
            draft.update(WorkoutDraft::clear);
            alert("Treino salvo", "O treino foi criado com sucesso.");
        }
        Err(err) => {
            warn!("Workout rejected: {err}");
            alert_form_error(&err);
        }
    };

    view! {
        <Card title="Montagem de fichas">
            <TextField
                label="Nome do treino"
                placeholder="Treino A - Força"
                value=Signal::derive(move || draft.with(|d| d.name.clone()))
                on_input=move |v: String| draft.update(|d| d.name = v)
            />
            <TextField
                label="Objetivo"
                placeholder="Hipertrofia superior"
                value=Signal::derive(move || draft.with(|d| d.goal.clone()))
                on_input=move |v: String| draft.update(|d| d.goal = v)
            />

            <h3 class="card-subtitle">"Adicionar exercícios"</h3>
            <For
                each=move || store.with(|state| state.exercises().to_vec())
                key=|exercise| exercise.id.clone()
                children=move |exercise| {
                    let name = exercise.name.clone();
                    let muscle_group = exercise.muscle_group.clone();
                    view! {
                        <button
                            class="exercise-selector"
                            on:click=move |_| draft.update(|d| {
                                d.add_exercise(&exercise);
                            })
                        >
                            <span class="exercise-name">{name}</span>
                            <span class="exercise-meta">{muscle_group}</span>
                            <span class="exercise-selector-action">"Adicionar"</span>
                        </button>
                    }
                }
            />

            <h3 class="card-subtitle">"Ficha em edição"</h3>
            <DraftEditor draft/>
            <button class="primary" on:click=save>"Salvar treino"</button>

            <h3 class="card-subtitle">"Treinos criados"</h3>
            <Show
                when=move || store.with(|state| !state.workouts().is_empty())
                fallback=|| view! { <p class="empty-state">"Nenhuma ficha cadastrada ainda."</p> }
            >
                <For
                    each=move || store.with(|state| state.workouts().to_vec())
                    key=|workout| workout.id.clone()
                    children=|workout| {
                        let workout_id = workout.id.clone();
                        view! {
                            <WorkoutCard workout>
                                <AssignmentPanel workout_id/>
                            </WorkoutCard>
                        }
                    }
                />
            </Show>
        </Card>
    }
}
