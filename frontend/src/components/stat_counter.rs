use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::effects::counter::{counter_value, COUNTER_DURATION_MS};

const FRAME_MS: u32 = 16;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub label: &'static str,
    /// Set by the stats block, for all counters at once
    pub started: bool,
    #[prop_or_default]
    pub suffix: &'static str,
}

fn animate(target: u32, value: UseStateHandle<u32>, alive: Rc<Cell<bool>>) {
    wasm_bindgen_futures::spawn_local(async move {
        let start = js_sys::Date::now();
        while alive.get() {
            let elapsed = js_sys::Date::now() - start;
            value.set(counter_value(target, elapsed));
            if elapsed >= COUNTER_DURATION_MS {
                break;
            }
            TimeoutFuture::new(FRAME_MS).await;
        }
    });
}

/// Number that counts up from 0 once `started` turns true
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let value = use_state(|| 0u32);
    {
        let value = value.clone();
        use_effect_with_deps(
            move |(started, target): &(bool, u32)| {
                let alive = Rc::new(Cell::new(true));
                if *started {
                    animate(*target, value, alive.clone());
                }
                move || alive.set(false)
            },
            (props.started, props.target),
        );
    }
    html! {
        <div class="stat">
            <span class="stat-num">{ *value }{ props.suffix }</span>
            <span class="stat-label">{ props.label }</span>
        </div>
    }
}
