use leptos::{component, view, Children, CollectView, IntoView};
use shared::model::Workout;

use crate::components::RestTimer;

/// A saved workout and its exercises. Students get a rest timer per exercise,
/// teachers see the rest as text
#[component]
pub fn WorkoutCard(
    workout: Workout,
    #[prop(optional)] with_timers: bool,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let goal = workout.goal.map(|goal| view! { <p class="workout-goal">{goal}</p> });

    let exercises = workout
        .exercises
        .into_iter()
        .map(|exercise| {
            let summary = exercise.summary();
            if with_timers {
                view! {
                    <div class="workout-exercise with-timer">
                        <p class="exercise-name">{exercise.name}</p>
                        <p class="exercise-meta">{summary}</p>
                        <RestTimer seconds=exercise.rest/>
                    </div>
                }
            } else {
                view! {
                    <div class="workout-exercise">
                        <p class="exercise-name">{exercise.name}</p>
                        <p class="exercise-meta">
                            {format!("{summary} • descanso {}s", exercise.rest)}
                        </p>
                    </div>
                }
            }
        })
        .collect_view();

    view! {
        <div class="workout-card">
            <h3 class="workout-name">{workout.name}</h3>
            {goal}
            {exercises}
            {children.map(|children| children())}
        </div>
    }
}
