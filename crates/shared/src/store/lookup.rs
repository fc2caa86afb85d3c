use std::collections::HashMap;

use tracing::debug;

use crate::{model::Workout, types::WorkoutId};

/// Resolves workout ids to workouts living for `'a`
pub trait WorkoutLookup<'a> {
    fn workout(&self, id: &WorkoutId) -> Option<&'a Workout>;
}

/// Id keyed view over a workout list
#[derive(Debug, Default)]
pub struct WorkoutIndex<'a>(HashMap<&'a WorkoutId, &'a Workout>);

impl<'a> WorkoutIndex<'a> {
    pub fn new(workouts: &'a [Workout]) -> Self {
        Self(workouts.iter().map(|workout| (&workout.id, workout)).collect())
    }
}

impl<'a> WorkoutLookup<'a> for WorkoutIndex<'a> {
    fn workout(&self, id: &WorkoutId) -> Option<&'a Workout> {
        self.0.get(id).copied()
    }
}

/// Resolves `ids` in order. Ids the lookup doesn't know are skipped
pub fn resolve_assigned<'a, L>(ids: &[WorkoutId], lookup: &L) -> Vec<&'a Workout>
where
    L: WorkoutLookup<'a> + ?Sized,
{
    ids.iter()
        .filter_map(|id| {
            let workout = lookup.workout(id);
            if workout.is_none() {
                debug!(%id, "Skipping assignment of unknown workout");
            }
            workout
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn workout(id: &str) -> Workout {
        Workout {
            id: id.into(),
            name: format!("Treino {id}"),
            goal: None,
            exercises: Vec::new(),
        }
    }

    #[test]
    fn test_resolve_keeps_assignment_order() {
        let workouts = vec![workout("a"), workout("b")];
        let index = WorkoutIndex::new(&workouts);

        let resolved = resolve_assigned(&["b".into(), "a".into()], &index);

        let names: Vec<_> = resolved.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, vec!["Treino b", "Treino a"]);
    }

    #[test]
    fn test_resolve_skips_unknown_ids() {
        let workouts = vec![workout("a")];
        let index = WorkoutIndex::new(&workouts);

        let resolved = resolve_assigned(&["gone".into(), "a".into()], &index);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].id.as_str(), "a");
    }

    #[test]
    fn test_resolved_workouts_outlive_the_index() {
        let workouts = vec![workout("a"), workout("b")];

        let resolved = resolve_assigned(&["a".into()], &WorkoutIndex::new(&workouts));

        assert_eq!(resolved, vec![&workouts[0]]);
    }
}
