use crate::{
    error::FormError,
    model::{
        constants::{DEFAULT_EQUIPMENT, DEFAULT_MUSCLE_GROUP},
        Exercise, ValidateModel,
    },
    types::ExerciseId,
};

/// The admin's "new exercise" form, holding raw input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseForm {
    pub name: String,
    pub muscle_group: String,
    pub equipment: String,
    pub description: String,
}

impl ExerciseForm {
    /// Builds the exercise to register, with trimmed fields and a fresh id
    pub fn submit(&self) -> Result<Exercise, FormError> {
        self.validate()?;

        Ok(Exercise {
            id: ExerciseId::new_v4(),
            name: self.name.trim().to_string(),
            muscle_group: or_default(&self.muscle_group, DEFAULT_MUSCLE_GROUP),
            equipment: or_default(&self.equipment, DEFAULT_EQUIPMENT),
            description: self.description.trim().to_string(),
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ValidateModel for ExerciseForm {
    type Error = FormError;

    fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::ExerciseNameRequired);
        }
        Ok(())
    }
}

fn or_default(value: &str, fallback: &str) -> String {
    match value.trim() {
        "" => fallback.to_string(),
        trimmed => trimmed.to_string(),
    }
}
