use thiserror::Error;

use crate::types::{ExerciseId, StudentId};

/// Rejections raised by the admin and teacher forms. The form keeps its
/// content so the user can fix it and submit again
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Exercise name is required")]
    ExerciseNameRequired,
    #[error("Workout name is required")]
    WorkoutNameRequired,
    #[error("Workout has no exercises")]
    NoExercises,
    #[error("Every exercise needs load, repetitions and rest")]
    IncompleteFields,
    #[error("Rest of {exercise} is not a whole number of seconds: {value:?}")]
    InvalidRest { exercise: String, value: String },
}

impl FormError {
    /// Title of the alert shown to the user
    pub fn title(&self) -> &'static str {
        use FormError::*;
        match self {
            ExerciseNameRequired | WorkoutNameRequired => "Nome obrigatório",
            NoExercises => "Sem exercícios",
            IncompleteFields => "Campos pendentes",
            InvalidRest { .. } => "Descanso inválido",
        }
    }

    /// Body of the alert shown to the user
    pub fn message(&self) -> String {
        use FormError::*;
        match self {
            ExerciseNameRequired => "Informe o nome do exercício.".to_string(),
            WorkoutNameRequired => "Dê um nome ao treino.".to_string(),
            NoExercises => "Adicione pelo menos um exercício ao treino.".to_string(),
            IncompleteFields => "Preencha carga, repetições e descanso para todos.".to_string(),
            InvalidRest { exercise, .. } => {
                format!("Informe o descanso de {exercise} em segundos, como número inteiro.")
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Seed JSON Error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Seed roster has no students")]
    EmptyRoster,
    #[error("Duplicate exercise id in seed: {0}")]
    DuplicateExercise(ExerciseId),
    #[error("Duplicate student id in seed: {0}")]
    DuplicateStudent(StudentId),
    #[error("Seed exercise {0} has no name")]
    UnnamedExercise(ExerciseId),
}
