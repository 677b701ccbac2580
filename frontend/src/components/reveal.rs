use web_sys::Element;
use yew::prelude::*;

use crate::components::visibility::VisibilityObserver;
use crate::effects::reveal::{card_delay_ms, CARD_REVEAL_THRESHOLD, SECTION_REVEAL_THRESHOLD};

/// `true` from the first time `threshold` of the referenced element is on
/// screen. Without IntersectionObserver support it is `true` right away.
#[hook]
pub fn use_once_visible(node: NodeRef, threshold: f64) -> bool {
    let visible = use_state(|| false);
    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let observer = node.cast::<Element>().and_then(|element| {
                    let visible = visible.clone();
                    VisibilityObserver::observe_once(&element, threshold, move || visible.set(true))
                });
                if observer.is_none() {
                    visible.set(true);
                }
                move || drop(observer)
            },
            node,
        );
    }
    *visible
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    pub id: &'static str,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Page section that fades and slides in the first time it scrolls into view
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let visible = use_once_visible(node.clone(), SECTION_REVEAL_THRESHOLD);

    html! {
        <section
            ref={node}
            id={props.id}
            class={classes!("section", "reveal", props.class.clone(), visible.then_some("visible"))}
        >
            { for props.children.iter() }
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    /// Position in its row, sets the stagger
    pub index: usize,
    pub title: &'static str,
    pub body: &'static str,
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let node = use_node_ref();
    let visible = use_once_visible(node.clone(), CARD_REVEAL_THRESHOLD);

    html! {
        <article
            ref={node}
            class={classes!("activity-card", visible.then_some("visible"))}
            style={format!("transition-delay: {}ms", card_delay_ms(props.index))}
        >
            <h3>{ props.title }</h3>
            <p>{ props.body }</p>
        </article>
    }
}
