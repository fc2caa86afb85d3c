use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    model::{Assignments, Exercise, Roster, Student, Workout},
    seed::SeedConfig,
    store::{resolve_assigned, Action, WorkoutIndex},
    types::{StudentId, WorkoutId},
};

/// Everything the app knows while it runs. Only changes through [Action]s
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AppState {
    exercises: Vec<Exercise>,
    workouts: Vec<Workout>,
    assignments: Assignments,
}

impl AppState {
    pub fn new(seed: &SeedConfig) -> Self {
        Self {
            exercises: seed.exercises.clone(),
            workouts: Vec::new(),
            assignments: Assignments::for_students(seed.students.iter().map(|s| &s.id)),
        }
    }

    /// Folds `actions` over the state built from `seed`
    pub fn replay<I>(seed: &SeedConfig, actions: I) -> Self
    where
        I: IntoIterator<Item = Action>,
    {
        actions.into_iter().fold(Self::new(seed), Self::apply)
    }

    pub fn apply(mut self, action: Action) -> Self {
        self.reduce(action);
        self
    }

    /// Applies `action` in place and reports whether anything changed
    pub fn reduce(&mut self, action: Action) -> bool {
        match action {
            Action::AddExercise(exercise) => {
                debug!(id = %exercise.id, name = %exercise.name, "Adding exercise");
                self.exercises.push(exercise);
                true
            }
            Action::CreateWorkout(workout) => {
                debug!(id = %workout.id, name = %workout.name, "Creating workout");
                self.workouts.push(workout);
                true
            }
            Action::AssignWorkout {
                student_id,
                workout_id,
            } => {
                debug!(%student_id, %workout_id, "Assigning workout");
                self.assignments.assign(student_id, workout_id)
            }
            Action::Unrecognized => {
                debug!("Ignoring unrecognized action");
                false
            }
        }
    }

    pub fn exercises(&self) -> &[Exercise] {
        &self.exercises
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn workouts_by_id(&self) -> WorkoutIndex<'_> {
        WorkoutIndex::new(&self.workouts)
    }

    pub fn assigned_workout_ids(&self, student_id: &StudentId) -> &[WorkoutId] {
        self.assignments.workouts_of(student_id)
    }

    /// The workouts assigned to a student, in assignment order
    pub fn student_workouts(&self, student_id: &StudentId) -> Vec<&Workout> {
        let ids = self.assigned_workout_ids(student_id);
        if ids.is_empty() {
            return Vec::new();
        }
        resolve_assigned(ids, &self.workouts_by_id())
    }

    /// Roster students that have `workout_id` assigned, in roster order
    pub fn assigned_students<'r>(
        &self,
        workout_id: &WorkoutId,
        roster: &'r Roster,
    ) -> Vec<&'r Student> {
        let assigned: Vec<_> = self.assignments.students_with(workout_id).collect();
        roster.iter().filter(|student| assigned.contains(&&student.id)).collect()
    }
}
