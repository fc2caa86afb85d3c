use leptos::{
    component, store_value, view, For, IntoView, RwSignal, Show, Signal, SignalUpdate, SignalWith,
};
use shared::{
    forms::{DraftField, WorkoutDraft},
    types::DraftEntryId,
};

use crate::components::TextField;

/// Rows of the workout being composed. Rows are keyed by entry id so typing
/// in one row doesn't rebuild the others
#[component]
pub fn DraftEditor(draft: RwSignal<WorkoutDraft>) -> impl IntoView {
    let rows = move || {
        draft.with(|d| {
            d.entries()
                .iter()
                .map(|entry| (entry.id.clone(), entry.name.clone()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show
            when=move || draft.with(|d| !d.entries().is_empty())
            fallback=|| view! { <p class="empty-state">"Nenhum exercício adicionado ainda."</p> }
        >
            <For
                each=rows
                key=|(id, _)| id.clone()
                children=move |(id, name)| view! { <DraftEntryRow draft id name/> }
            />
        </Show>
    }
}

#[component]
fn DraftEntryRow(draft: RwSignal<WorkoutDraft>, id: DraftEntryId, name: String) -> impl IntoView {
    let id = store_value(id);

    let value = move |field: DraftField| {
        Signal::derive(move || {
            draft.with(|d| {
                id.with_value(|id| d.entry(id).map(|e| e.field(field).to_owned()))
                    .unwrap_or_default()
            })
        })
    };
    let edit = move |field: DraftField| {
        move |value: String| {
            draft.update(|d| {
                id.with_value(|id| d.update_entry(id, field, value));
            })
        }
    };
    let remove = move |_| {
        draft.update(|d| {
            id.with_value(|id| d.remove_entry(id));
        })
    };

    view! {
        <div class="workout-entry">
            <p class="exercise-name">{name}</p>
            <div class="entry-row">
                <TextField
                    label="Carga (kg)"
                    placeholder="20"
                    numeric=true
                    compact=true
                    value=value(DraftField::Load)
                    on_input=edit(DraftField::Load)
                />
                <TextField
                    label="Repetições"
                    placeholder="12"
                    numeric=true
                    compact=true
                    value=value(DraftField::Repetitions)
                    on_input=edit(DraftField::Repetitions)
                />
                <TextField
                    label="Descanso (s)"
                    placeholder="60"
                    numeric=true
                    compact=true
                    value=value(DraftField::Rest)
                    on_input=edit(DraftField::Rest)
                />
            </div>
            <button class="remove-button" on:click=remove>"Remover"</button>
        </div>
    }
}
