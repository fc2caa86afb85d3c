use leptos::{component, create_rw_signal, view, IntoView, Signal, SignalUpdate, SignalWith};
use shared::{forms::ExerciseForm, store::Action};
use tracing::{info, warn};

use crate::{
    components::TextField,
    store::Store,
    utils::alert_form_error,
};

/// Admin form registering a new exercise in the catalogue
#[component]
pub fn NewExerciseForm() -> impl IntoView {
    let store = Store::use_store();
    let form = create_rw_signal(ExerciseForm::default());

    let field = move |get: fn(&ExerciseForm) -> &String| {
        Signal::derive(move || form.with(|f| get(f).clone()))
    };

    let submit = move |_| match form.with(ExerciseForm::submit) {
        Ok(exercise) => {
            info!(id = %exercise.id, name = %exercise.name, "Registering exercise");
            store.dispatch(Action::AddExercise(exercise));
            form.update(ExerciseForm::clear);
        }
        Err(err) => {
            warn!("Exercise rejected: {err}");
            alert_form_error(&err);
        }
    };

    view! {
        <TextField
            label="Nome"
            placeholder="Supino inclinado"
            value=field(|f| &f.name)
            on_input=move |v: String| form.update(|f| f.name = v)
        />
        <TextField
            label="Grupo muscular"
            placeholder="Peitoral"
            value=field(|f| &f.muscle_group)
            on_input=move |v: String| form.update(|f| f.muscle_group = v)
        />
        <TextField
            label="Equipamento"
            placeholder="Halteres"
            value=field(|f| &f.equipment)
            on_input=move |v: String| form.update(|f| f.equipment = v)
        />
        <TextField
            label="Descrição"
            placeholder="Detalhes ou dicas de execução"
            multiline=true
            value=field(|f| &f.description)
            on_input=move |v: String| form.update(|f| f.description = v)
        />
        <button class="primary" on:click=submit>"Adicionar exercício"</button>
    }
}
