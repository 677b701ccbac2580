use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::future::TimeoutFuture;
use yew::prelude::*;

use crate::effects::typing::TypingEffect;

#[function_component(TypedText)]
pub fn typed_text() -> Html {
    let text = use_state(String::new);
    {
        let text = text.clone();
        use_effect_with_deps(
            move |_| {
                let alive = Rc::new(Cell::new(true));
                {
                    let alive = alive.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let mut effect = TypingEffect::default();
                        while alive.get() {
                            let (shown, delay) = effect.tick();
                            text.set(shown);
                            TimeoutFuture::new(delay).await;
                        }
                    });
                }
                move || alive.set(false)
            },
            (),
        );
    }
    html! {
        <>
            <span class="typed-text">{ (*text).clone() }</span>
            <span class="typed-cursor" aria-hidden="true">{"|"}</span>
        </>
    }
}
