use crate::{
    error::FormError,
    model::{constants::DEFAULT_REST_SECONDS, Exercise, ValidateModel, Workout, WorkoutExercise},
    types::{DraftEntryId, ExerciseId, WorkoutId},
};

/// Editable columns of a draft entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Load,
    Repetitions,
    Rest,
}

/// One row of the workout being composed. All values are kept as typed so the
/// teacher can fix them before saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftEntry {
    pub id: DraftEntryId,
    pub exercise_id: ExerciseId,
    pub name: String,
    pub load: String,
    pub repetitions: String,
    pub rest: String,
}

impl DraftEntry {
    fn new(exercise: &Exercise) -> Self {
        Self {
            id: DraftEntryId::new_v4(),
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            load: String::new(),
            repetitions: String::new(),
            rest: DEFAULT_REST_SECONDS.to_string(),
        }
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Load => &self.load,
            DraftField::Repetitions => &self.repetitions,
            DraftField::Rest => &self.rest,
        }
    }

    fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Load => &mut self.load,
            DraftField::Repetitions => &mut self.repetitions,
            DraftField::Rest => &mut self.rest,
        }
    }

    fn is_complete(&self) -> bool {
        [&self.load, &self.repetitions, &self.rest]
            .iter()
            .all(|value| !value.trim().is_empty())
    }

    fn rest_seconds(&self) -> Result<u32, FormError> {
        let value = self.rest.trim();
        value.parse().map_err(|_| FormError::InvalidRest {
            exercise: self.name.clone(),
            value: value.to_string(),
        })
    }

    fn to_workout_exercise(&self) -> Result<WorkoutExercise, FormError> {
        Ok(WorkoutExercise {
            exercise_id: self.exercise_id.clone(),
            name: self.name.clone(),
            load: self.load.trim().to_string(),
            repetitions: self.repetitions.trim().to_string(),
            rest: self.rest_seconds()?,
        })
    }
}

/// The teacher's unsaved workout
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutDraft {
    pub name: String,
    pub goal: String,
    entries: Vec<DraftEntry>,
}

impl WorkoutDraft {
    pub fn entries(&self) -> &[DraftEntry] {
        &self.entries
    }

    pub fn entry(&self, id: &DraftEntryId) -> Option<&DraftEntry> {
        self.entries.iter().find(|entry| &entry.id == id)
    }

    /// Appends a new row for `exercise`. The same exercise may be added any
    /// number of times
    pub fn add_exercise(&mut self, exercise: &Exercise) -> DraftEntryId {
        let entry = DraftEntry::new(exercise);
        let id = entry.id.clone();
        self.entries.push(entry);
        id
    }

    /// Returns `false` when no entry has that id
    pub fn update_entry<S: Into<String>>(
        &mut self,
        id: &DraftEntryId,
        field: DraftField,
        value: S,
    ) -> bool {
        match self.entries.iter_mut().find(|entry| &entry.id == id) {
            Some(entry) => {
                *entry.field_mut(field) = value.into();
                true
            }
            None => false,
        }
    }

    /// Returns `false` when no entry has that id
    pub fn remove_entry(&mut self, id: &DraftEntryId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| &entry.id != id);
        self.entries.len() != before
    }

    /// The saved form of the draft, with a fresh id. The draft itself is left
    /// untouched either way
    pub fn build_workout(&self) -> Result<Workout, FormError> {
        self.validate()?;
        let exercises = self
            .entries
            .iter()
            .map(DraftEntry::to_workout_exercise)
            .collect::<Result<Vec<_>, FormError>>()?;
        let goal = self.goal.trim();

        Ok(Workout {
            id: WorkoutId::new_v4(),
            name: self.name.trim().to_string(),
            goal: (!goal.is_empty()).then(|| goal.to_string()),
            exercises,
        })
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

impl ValidateModel for WorkoutDraft {
    type Error = FormError;

    /// Name first, then entries, then their fields, then each rest
    fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() {
            return Err(FormError::WorkoutNameRequired);
        }
        if self.entries.is_empty() {
            return Err(FormError::NoExercises);
        }
        if !self.entries.iter().all(DraftEntry::is_complete) {
            return Err(FormError::IncompleteFields);
        }
        self.entries
            .iter()
            .try_for_each(|entry| entry.rest_seconds().map(|_| ()))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn exercise(id: &str, name: &str) -> Exercise {
        Exercise {
            id: id.into(),
            name: name.to_string(),
            muscle_group: "Peitoral".to_string(),
            equipment: "Barra".to_string(),
            description: String::new(),
        }
    }

    fn complete(draft: &mut WorkoutDraft, id: &DraftEntryId, load: &str, reps: &str, rest: &str) {
        draft.update_entry(id, DraftField::Load, load);
        draft.update_entry(id, DraftField::Repetitions, reps);
        draft.update_entry(id, DraftField::Rest, rest);
    }

    #[test]
    fn test_new_entry_defaults() {
        let mut draft = WorkoutDraft::default();
        let id = draft.add_exercise(&exercise("supino_reto", "Supino Reto"));

        let entry = draft.entry(&id).unwrap();
        assert_eq!(entry.exercise_id.as_str(), "supino_reto");
        assert_eq!(entry.name, "Supino Reto");
        assert_eq!(entry.load, "");
        assert_eq!(entry.repetitions, "");
        assert_eq!(entry.rest, "60");
    }

    #[test]
    fn test_same_exercise_added_twice_is_two_entries() {
        let supino = exercise("supino_reto", "Supino Reto");
        let mut draft = WorkoutDraft::default();

        let first = draft.add_exercise(&supino);
        let second = draft.add_exercise(&supino);

        assert_ne!(first, second);
        assert_eq!(draft.entries().len(), 2);
    }

    #[test]
    fn test_update_entry_only_touches_that_entry() {
        let supino = exercise("supino_reto", "Supino Reto");
        let mut draft = WorkoutDraft::default();
        let first = draft.add_exercise(&supino);
        let second = draft.add_exercise(&supino);

        assert!(draft.update_entry(&second, DraftField::Load, "40"));

        assert_eq!(draft.entry(&first).unwrap().field(DraftField::Load), "");
        assert_eq!(draft.entry(&second).unwrap().field(DraftField::Load), "40");
        assert!(!draft.update_entry(&"missing".into(), DraftField::Load, "10"));
    }

    #[test]
    fn test_remove_entry_keeps_order() {
        let mut draft = WorkoutDraft::default();
        let a = draft.add_exercise(&exercise("a", "A"));
        let b = draft.add_exercise(&exercise("b", "B"));
        let c = draft.add_exercise(&exercise("c", "C"));

        assert!(draft.remove_entry(&b));

        let ids: Vec<_> = draft.entries().iter().map(|e| e.id.clone()).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn test_remove_unknown_entry_is_noop() {
        let mut draft = WorkoutDraft::default();
        draft.add_exercise(&exercise("a", "A"));
        let before = draft.clone();

        assert!(!draft.remove_entry(&"missing".into()));
        assert_eq!(draft, before);
    }

    #[test]
    fn test_name_is_checked_first() {
        let draft = WorkoutDraft {
            name: "  ".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.build_workout(), Err(FormError::WorkoutNameRequired));
    }

    #[test]
    fn test_empty_draft_has_no_exercises() {
        let draft = WorkoutDraft {
            name: "Treino A".to_string(),
            ..Default::default()
        };
        assert_eq!(draft.build_workout(), Err(FormError::NoExercises));
        assert_eq!(draft.validate(), Err(FormError::NoExercises));
    }

    #[test]
    fn test_incomplete_entry_is_rejected() {
        let mut draft = WorkoutDraft {
            name: "Treino A".to_string(),
            ..Default::default()
        };
        let id = draft.add_exercise(&exercise("a", "A"));
        complete(&mut draft, &id, "20", "   ", "60");

        assert_eq!(draft.build_workout(), Err(FormError::IncompleteFields));
    }

    #[test]
    fn test_incomplete_is_reported_before_invalid_rest() {
        let mut draft = WorkoutDraft {
            name: "Treino A".to_string(),
            ..Default::default()
        };
        let first = draft.add_exercise(&exercise("a", "A"));
        let second = draft.add_exercise(&exercise("b", "B"));
        complete(&mut draft, &first, "20", "12", "abc");
        complete(&mut draft, &second, "", "12", "60");

        assert_eq!(draft.build_workout(), Err(FormError::IncompleteFields));
    }

    #[test]
    fn test_non_numeric_rest_is_rejected() {
        for rest in ["abc", "-10", "1.5"] {
            let mut draft = WorkoutDraft {
                name: "Treino A".to_string(),
                ..Default::default()
            };
            let id = draft.add_exercise(&exercise("a", "Agachamento"));
            complete(&mut draft, &id, "20", "12", rest);

            assert_eq!(
                draft.build_workout(),
                Err(FormError::InvalidRest {
                    exercise: "Agachamento".to_string(),
                    value: rest.to_string(),
                })
            );
        }
    }

    #[test]
    fn test_rest_accepts_leading_plus() {
        let mut draft = WorkoutDraft {
            name: "Treino A".to_string(),
            ..Default::default()
        };
        let id = draft.add_exercise(&exercise("a", "Agachamento"));
        complete(&mut draft, &id, "20", "12", "+60");

        assert_eq!(draft.validate(), Ok(()));
        assert_eq!(draft.build_workout().unwrap().exercises[0].rest, 60);
    }

    #[test]
    fn test_complete_draft_builds_workout() {
        let mut draft = WorkoutDraft {
            name: " Treino A - Força ".to_string(),
            goal: " Hipertrofia superior ".to_string(),
            ..Default::default()
        };
        let id = draft.add_exercise(&exercise("supino_reto", "Supino Reto"));
        complete(&mut draft, &id, " 20 ", "12", " 60 ");

        let workout = draft.build_workout().unwrap();

        assert_eq!(workout.name, "Treino A - Força");
        assert_eq!(workout.goal.as_deref(), Some("Hipertrofia superior"));
        assert_eq!(
            workout.exercises,
            vec![WorkoutExercise {
                exercise_id: "supino_reto".into(),
                name: "Supino Reto".to_string(),
                load: "20".to_string(),
                repetitions: "12".to_string(),
                rest: 60,
            }]
        );
        assert_ne!(draft.build_workout().unwrap().id, workout.id);
    }

    #[test]
    fn test_blank_goal_is_none() {
        let mut draft = WorkoutDraft {
            name: "Treino B".to_string(),
            goal: "   ".to_string(),
            ..Default::default()
        };
        let id = draft.add_exercise(&exercise("a", "A"));
        complete(&mut draft, &id, "10", "15", "0");

        let workout = draft.build_workout().unwrap();
        assert_eq!(workout.goal, None);
        assert_eq!(workout.exercises[0].rest, 0);
    }

    #[test]
    fn test_failed_build_leaves_draft_untouched() {
        let mut draft = WorkoutDraft {
            name: "Treino A".to_string(),
            ..Default::default()
        };
        let id = draft.add_exercise(&exercise("a", "A"));
        draft.update_entry(&id, DraftField::Load, "20");
        let before = draft.clone();

        assert!(draft.build_workout().is_err());
        assert_eq!(draft, before);
    }

    #[test]
    fn test_clear_empties_draft() {
        let mut draft = WorkoutDraft {
            name: "Treino A".to_string(),
            goal: "Força".to_string(),
            ..Default::default()
        };
        draft.add_exercise(&exercise("a", "A"));

        draft.clear();

        assert_eq!(draft, WorkoutDraft::default());
    }
}
