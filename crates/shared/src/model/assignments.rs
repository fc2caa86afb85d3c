use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{StudentId, WorkoutId};

/// Workouts handed to each student. Every list keeps insertion order and
/// holds a workout at most once
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignments(BTreeMap<StudentId, Vec<WorkoutId>>);

impl Assignments {
    /// Starts every given student with an empty list
    pub fn for_students<'a, I>(students: I) -> Self
    where
        I: IntoIterator<Item = &'a StudentId>,
    {
        Self(students.into_iter().map(|id| (id.clone(), Vec::new())).collect())
    }

    pub fn workouts_of(&self, student_id: &StudentId) -> &[WorkoutId] {
        self.0.get(student_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, student_id: &StudentId, workout_id: &WorkoutId) -> bool {
        self.workouts_of(student_id).contains(workout_id)
    }

    /// Appends `workout_id` to the student's list. Returns `false` and leaves
    /// the list alone when it is already there
    pub fn assign(&mut self, student_id: StudentId, workout_id: WorkoutId) -> bool {
        if self.contains(&student_id, &workout_id) {
            return false;
        }
        self.0.entry(student_id).or_default().push(workout_id);
        true
    }

    /// Students whose list contains `workout_id`
    pub fn students_with<'a>(
        &'a self,
        workout_id: &'a WorkoutId,
    ) -> impl Iterator<Item = &'a StudentId> + 'a {
        self.0
            .iter()
            .filter(move |(_, workouts)| workouts.contains(workout_id))
            .map(|(student_id, _)| student_id)
    }
}
