use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::applications::controller::Toaster;

pub const TOAST_DURATION_MS: u32 = 3500;

/// Single-slot toast. Showing a message replaces the current one and
/// restarts the hide timer.
#[hook]
pub fn use_toast() -> (Option<String>, Callback<String>) {
    let message = use_state(|| None::<String>);
    let hide_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    let show = {
        let message = message.clone();
        Callback::from(move |text: String| {
            message.set(Some(text));
            let message = message.clone();
            // dropping the previous handle cancels its timeout
            *hide_timer.borrow_mut() = Some(Timeout::new(TOAST_DURATION_MS, move || {
                message.set(None);
            }));
        })
    };

    ((*message).clone(), show)
}

impl Toaster for Callback<String> {
    fn show(&self, message: &str) {
        self.emit(message.to_string());
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: Option<String>,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    html! {
        <div
            class={classes!("toast", props.message.is_some().then_some("show"))}
            role="status"
            aria-live="polite"
        >
            { props.message.clone().unwrap_or_default() }
        </div>
    }
}
