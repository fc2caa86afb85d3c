use serde::{Deserialize, Serialize};

use crate::{
    model::{Exercise, Workout},
    types::{StudentId, WorkoutId},
};

/// Every change the store accepts. Serialized with a `type` tag, so a
/// recorded log reads as `{"type": "ASSIGN_WORKOUT", "studentId": ..}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    AddExercise(Exercise),
    CreateWorkout(Workout),
    #[serde(rename_all = "camelCase")]
    AssignWorkout {
        student_id: StudentId,
        workout_id: WorkoutId,
    },
    /// Any tag this version doesn't know. Applying it changes nothing
    #[serde(other)]
    Unrecognized,
}
