use gloo::timers::callback::Interval;
use leptos::{
    component, create_effect, create_rw_signal, on_cleanup, store_value, view, IntoView,
    MaybeSignal, SignalGet, SignalGetUntracked, SignalUpdate, SignalWith, SignalWithUntracked,
    StoredValue,
};
use shared::timer::{RestTimer as Countdown, TimerEvent, TimerStatus, TICK_MILLIS};
use tracing::info;
use wasm_bindgen_futures::spawn_local;

use crate::utils::alert;

/// Pending tick of a timer. Dropping the interval cancels it
type Ticker = StoredValue<Option<Interval>>;

/// Rest countdown for one exercise. Every instance has its own interval,
/// which never outlives the component
#[component]
pub fn RestTimer(#[prop(into)] seconds: MaybeSignal<u32>) -> impl IntoView {
    let countdown = create_rw_signal(Countdown::new(seconds.get_untracked()));
    let ticker: Ticker = store_value(None);

    let on_event = move |event: Option<TimerEvent>| {
        if let Some(TimerEvent::Expired) = event {
            cancel(ticker);
            info!("Rest finished");
            alert("Tempo!", "Descanso finalizado, vamos para a próxima série.");
        }
    };

    let schedule = move || {
        cancel(ticker);
        let interval = Interval::new(TICK_MILLIS, move || {
            on_event(countdown.try_update(Countdown::tick).flatten());
        });
        ticker.set_value(Some(interval));
    };

    let start = move |_| match countdown.try_update(Countdown::start).flatten() {
        Some(event) => on_event(Some(event)),
        None => schedule(),
    };

    // A new duration restarts the count, and the tick phase if it is running
    create_effect(move |previous: Option<u32>| {
        let duration = seconds.get();
        if previous.is_some_and(|previous| previous != duration) {
            match countdown.try_update(|c| c.set_duration(duration)).flatten() {
                Some(event) => on_event(Some(event)),
                None if countdown.with_untracked(Countdown::is_running) => schedule(),
                None => {}
            }
        }
        duration
    });

    on_cleanup(move || cancel(ticker));

    view! {
        <div
            class="timer"
            class:running=move || countdown.with(Countdown::is_running)
            class:expired=move || countdown.with(Countdown::status) == TimerStatus::Expired
        >
            <span class="timer-label">
                {move || format!("Descanso: {}s", countdown.with(Countdown::remaining))}
            </span>
            <button class="primary" on:click=start>"Iniciar"</button>
        </div>
    }
}

/// Stops the pending tick, if any. The cancelled callback may be the one
/// running right now, so it is dropped from the microtask queue instead of in
/// place
fn cancel(ticker: Ticker) {
    if let Some(interval) = ticker.try_update_value(Option::take).flatten() {
        let callback = interval.cancel();
        spawn_local(async move { drop(callback) });
    }
}
