use leptos::{component, event_target_value, view, Callable, Callback, IntoView, Signal, SignalGet};

/// Labelled text input bound to a signal. Changes are reported through
/// `on_input`, the field owns no state
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] placeholder: String,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
    /// Shows the numeric keyboard on mobile. The value stays free text
    #[prop(optional)]
    numeric: bool,
    #[prop(optional)] multiline: bool,
    /// Narrow variant used inside draft entry rows
    #[prop(optional)]
    compact: bool,
) -> impl IntoView {
    let input = if multiline {
        view! {
            <textarea
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        }
        .into_view()
    } else {
        view! {
            <input
                type="text"
                inputmode=if numeric { "numeric" } else { "text" }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.call(event_target_value(&ev))
            />
        }
        .into_view()
    };

    view! {
        <div class="field" class:compact=compact>
            <label>{label}</label>
            {input}
        </div>
    }
}
