use serde::{Deserialize, Serialize};

use crate::types::{ExerciseId, WorkoutId};

/// One prescribed exercise inside a workout. `name` is copied from the
/// catalogue when the entry is drafted
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutExercise {
    pub exercise_id: ExerciseId,
    pub name: String,
    pub load: String,
    pub repetitions: String,
    /// Rest between sets in seconds
    pub rest: u32,
}

impl WorkoutExercise {
    /// "12 reps • 20 kg"
    pub fn summary(&self) -> String {
        format!("{} reps • {} kg", self.repetitions, self.load)
    }
}

/// A named, ordered list of exercises composed by a teacher
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workout {
    pub id: WorkoutId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    pub exercises: Vec<WorkoutExercise>,
}
