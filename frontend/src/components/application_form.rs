use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::applications::controller::{
    ApplicationController, FormView, Phase, BUSY_LABEL, IDLE_LABEL,
};
use crate::applications::form::ApplicationForm;
use crate::applications::http_store::HttpRecordStore;

const INTERESTS: [&str; 5] = ["Algorithms", "AI", "Web", "Security", "Other"];

/// State handles for every field plus the submit control
#[derive(Clone)]
struct FormHandles {
    name: UseStateHandle<String>,
    student_id: UseStateHandle<String>,
    dept: UseStateHandle<String>,
    phone: UseStateHandle<String>,
    interest: UseStateHandle<String>,
    message: UseStateHandle<String>,
    busy: UseStateHandle<bool>,
}

impl FormHandles {
    fn snapshot(&self) -> ApplicationForm {
        ApplicationForm {
            name: (*self.name).clone(),
            student_id: (*self.student_id).clone(),
            dept: (*self.dept).clone(),
            phone: (*self.phone).clone(),
            interest: (*self.interest).clone(),
            message: (*self.message).clone(),
        }
    }
}

impl FormView for FormHandles {
    fn set_phase(&self, phase: Phase) {
        self.busy.set(phase == Phase::Submitting);
    }

    fn reset_fields(&self) {
        for field in [&self.name, &self.student_id, &self.dept, &self.phone, &self.interest, &self.message] {
            field.set(String::new());
        }
    }
}

fn on_text_input(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        handle.set(input.value());
    })
}

#[derive(Properties, PartialEq)]
pub struct ApplicationFormProps {
    pub on_toast: Callback<String>,
}

#[function_component(JoinForm)]
pub fn join_form(props: &ApplicationFormProps) -> Html {
    let handles = FormHandles {
        name: use_state(String::new),
        student_id: use_state(String::new),
        dept: use_state(String::new),
        phone: use_state(String::new),
        interest: use_state(String::new),
        message: use_state(String::new),
        busy: use_state(|| false),
    };

    let controller = {
        let view = handles.clone();
        let toaster = props.on_toast.clone();
        use_memo(move |_| ApplicationController::new(HttpRecordStore, view, toaster), ())
    };

    let onsubmit = {
        let handles = handles.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *handles.busy {
                return;
            }
            let form = handles.snapshot();
            let controller = controller.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.submit(form).await;
            });
        })
    };

    let on_interest = {
        let interest = handles.interest.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            interest.set(select.value());
        })
    };

    let on_message = {
        let message = handles.message.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            message.set(area.value());
        })
    };

    let busy = *handles.busy;
    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <label for="name">{"Name *"}</label>
                <input id="name" type="text" required=true
                    value={(*handles.name).clone()}
                    oninput={on_text_input(&handles.name)} />
            </div>
            <div class="form-row">
                <label for="studentId">{"Student ID *"}</label>
                <input id="studentId" type="text" required=true inputmode="numeric"
                    value={(*handles.student_id).clone()}
                    oninput={on_text_input(&handles.student_id)} />
            </div>
            <div class="form-row">
                <label for="dept">{"Department"}</label>
                <input id="dept" type="text"
                    value={(*handles.dept).clone()}
                    oninput={on_text_input(&handles.dept)} />
            </div>
            <div class="form-row">
                <label for="phone">{"Phone"}</label>
                <input id="phone" type="tel" placeholder="010-0000-0000"
                    value={(*handles.phone).clone()}
                    oninput={on_text_input(&handles.phone)} />
            </div>
            <div class="form-row">
                <label for="interest">{"Area of interest"}</label>
                <select id="interest" onchange={on_interest}>
                    <option value="" selected={handles.interest.is_empty()}>{"Choose one"}</option>
                    { for INTERESTS.iter().map(|option| html! {
                        <option value={*option} selected={*handles.interest == *option}>{ *option }</option>
                    }) }
                </select>
            </div>
            <div class="form-row">
                <label for="message">{"Message"}</label>
                <textarea id="message" rows="4"
                    value={(*handles.message).clone()}
                    oninput={on_message} />
            </div>
            <button type="submit" class="btn-primary" disabled={busy}>
                { if busy { BUSY_LABEL } else { IDLE_LABEL } }
            </button>
        </form>
    }
}
