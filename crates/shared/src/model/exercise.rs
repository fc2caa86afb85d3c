use serde::{Deserialize, Serialize};

use crate::types::ExerciseId;

/// An entry of the exercise catalogue. Registered by the admin and never
/// changed afterwards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub muscle_group: String,
    pub equipment: String,
    #[serde(default)]
    pub description: String,
}

impl Exercise {
    pub fn description(&self) -> Option<&str> {
        (!self.description.is_empty()).then_some(self.description.as_str())
    }
}
