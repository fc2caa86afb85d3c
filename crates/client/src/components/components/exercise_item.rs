use leptos::{component, view, IntoView};
use shared::model::Exercise;

#[component]
pub fn ExerciseItem(exercise: Exercise) -> impl IntoView {
    let description = exercise
        .description()
        .map(|d| view! { <p class="exercise-description">{d.to_owned()}</p> });

    view! {
        <div class="exercise-item">
            <p class="exercise-name">{exercise.name}</p>
            <p class="exercise-meta">{exercise.muscle_group}</p>
            <p class="exercise-meta">{exercise.equipment}</p>
            {description}
        </div>
    }
}
