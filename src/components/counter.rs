use log::info;
use web_sys::Element;
use yew::prelude::*;

use crate::dom::FrameLoop;
use crate::hooks::use_in_view;
use crate::motion::counter::{animate, CounterSpec};

/// How much of a counter has to be on screen before it starts.
const COUNTER_VISIBILITY_THRESHOLD: f64 = 0.35;

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    /// Raw `data-target` text; anything that isn't a finite number leaves the counter alone.
    pub target: AttrValue,
    #[prop_or_default]
    pub duration: Option<AttrValue>,
    #[prop_or_default]
    pub decimals: Option<AttrValue>,
    #[prop_or_default]
    pub compact: bool,
    #[prop_or_default]
    pub prefix: Option<AttrValue>,
    #[prop_or_default]
    pub suffix: Option<AttrValue>,
}

/// A stat number that counts up from zero the first time it scrolls into view.
/// The animation reads its settings back off the rendered `data-*` attributes.
#[function_component(Counter)]
pub fn counter(props: &CounterProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), COUNTER_VISIBILITY_THRESHOLD);
    let text = use_state(|| "0".to_string());
    let running = use_mut_ref(|| None::<FrameLoop>);

    {
        let node = node.clone();
        let set_text = text.setter();
        use_effect_with_deps(
            move |in_view| {
                if *in_view && running.borrow().is_none() {
                    let spec = node
                        .cast::<Element>()
                        .and_then(|el| CounterSpec::from_attributes(|name| el.get_attribute(name)));
                    if let Some(spec) = spec {
                        info!("Counting up to {} over {}ms", spec.target, spec.duration_ms);
                        *running.borrow_mut() =
                            animate(spec, move |frame| set_text.set(frame.to_string()));
                    }
                }
                || ()
            },
            in_view,
        );
    }

    html! {
        <span
            class="counter"
            ref={node}
            data-target={props.target.clone()}
            data-duration={props.duration.clone()}
            data-decimals={props.decimals.clone()}
            data-compact={props.compact.then(|| AttrValue::from("1"))}
            data-prefix={props.prefix.clone()}
            data-suffix={props.suffix.clone()}
        >
            {(*text).clone()}
        </span>
    }
}
