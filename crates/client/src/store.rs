use leptos::{
    create_rw_signal, provide_context, store_value, use_context, RwSignal, SignalUpdate,
    SignalUpdateUntracked, SignalWith, StoredValue,
};
use shared::{
    model::Roster,
    seed::SeedConfig,
    store::{Action, AppState},
};
use tracing::debug;

/// Reactive handle over the app state, shared through the leptos context.
/// Components read with [Store::with] and write with [Store::dispatch] only
#[derive(Clone, Copy)]
pub struct Store {
    state: RwSignal<AppState>,
    roster: StoredValue<Roster>,
    #[cfg(feature = "debug-signals")]
    log: RwSignal<Vec<Action>>,
}

impl Store {
    fn new(seed: &SeedConfig) -> Self {
        Self {
            state: create_rw_signal(AppState::new(seed)),
            roster: store_value(seed.students.clone()),
            #[cfg(feature = "debug-signals")]
            log: create_rw_signal(Vec::new()),
        }
    }

    pub fn provide_context(seed: &SeedConfig) -> Self {
        let store = Self::new(seed);
        provide_context(store);
        store
    }

    pub fn use_store() -> Self {
        use_context().expect("Store missing from context!")
    }

    pub fn dispatch(&self, action: Action) {
        #[cfg(feature = "debug-signals")]
        self.log.update(|log| log.push(action.clone()));

        // Readers are only notified when the reducer changed something
        let changed = self
            .state
            .try_update_untracked(|state| state.reduce(action))
            .unwrap_or_default();
        debug!(changed, "Action applied");
        if changed {
            self.state.update(|_| {});
        }
    }

    /// Tracked read of the state
    pub fn with<O>(&self, f: impl FnOnce(&AppState) -> O) -> O {
        self.state.with(f)
    }

    pub fn roster(&self) -> StoredValue<Roster> {
        self.roster
    }

    #[cfg(feature = "debug-signals")]
    pub fn action_count(&self) -> usize {
        self.log.with(Vec::len)
    }

    #[cfg(feature = "debug-signals")]
    pub fn action_log_json(&self) -> String {
        self.log
            .with(serde_json::to_string_pretty)
            .unwrap_or_else(|err| format!("Failed to serialize action log: {err}"))
    }
}

#[cfg(test)]
mod test {
    use std::{cell::Cell, rc::Rc};

    use leptos::{create_effect, create_runtime};
    use shared::model::Workout;

    use super::*;

    fn workout(id: &str) -> Workout {
        Workout {
            id: id.into(),
            name: format!("Treino {id}"),
            goal: None,
            exercises: Vec::new(),
        }
    }

    fn assign(student: &str, workout: &str) -> Action {
        Action::AssignWorkout {
            student_id: student.into(),
            workout_id: workout.into(),
        }
    }

    #[test]
    fn test_unchanged_state_does_not_notify_readers() {
        let runtime = create_runtime();
        let store = Store::new(&SeedConfig::bundled().unwrap());

        let runs = Rc::new(Cell::new(0));
        create_effect({
            let runs = runs.clone();
            move |_| {
                store.with(|state| state.workouts().len());
                runs.set(runs.get() + 1);
            }
        });
        assert_eq!(runs.get(), 1);

        store.dispatch(Action::CreateWorkout(workout("w1")));
        store.dispatch(assign("ana", "w1"));
        assert_eq!(runs.get(), 3);

        store.dispatch(assign("ana", "w1"));
        store.dispatch(Action::Unrecognized);
        assert_eq!(runs.get(), 3);
        assert_eq!(
            store.with(|state| state.assigned_workout_ids(&"ana".into()).len()),
            1
        );

        runtime.dispose();
    }
}
