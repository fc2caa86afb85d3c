use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::{
    error::SeedError,
    model::{Exercise, Roster, ValidateModel},
};

const BUNDLED_SEED: &str = include_str!("../seed/academia.json");

/// Data the app starts with: the exercise catalogue and the student roster.
/// Passed to [AppState::new](crate::store::AppState::new), never mutated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    pub exercises: Vec<Exercise>,
    pub students: Roster,
}

impl SeedConfig {
    /// The seed compiled into the binary
    pub fn bundled() -> Result<Self, SeedError> {
        Self::from_json(BUNDLED_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: Self = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }
}

impl ValidateModel for SeedConfig {
    type Error = SeedError;

    fn validate(&self) -> Result<(), SeedError> {
        if self.students.is_empty() {
            return Err(SeedError::EmptyRoster);
        }

        let mut exercise_ids = HashSet::new();
        for exercise in &self.exercises {
            if exercise.name.trim().is_empty() {
                return Err(SeedError::UnnamedExercise(exercise.id.clone()));
            }
            if !exercise_ids.insert(&exercise.id) {
                return Err(SeedError::DuplicateExercise(exercise.id.clone()));
            }
        }

        let mut student_ids = HashSet::new();
        for student in self.students.iter() {
            if !student_ids.insert(&student.id) {
                return Err(SeedError::DuplicateStudent(student.id.clone()));
            }
        }

        Ok(())
    }
}
