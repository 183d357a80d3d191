use yew::prelude::*;

use crate::config::FADE_UP_THRESHOLD;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct FadeUpProps {
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Section wrapper that slides its content up once it enters the viewport.
#[function_component(FadeUp)]
pub fn fade_up(props: &FadeUpProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_view(node.clone(), FADE_UP_THRESHOLD);

    html! {
        <section
            id={props.id.clone()}
            ref={node}
            class={classes!(props.class.clone(), "animate-fade-up", visible.then(|| "visible"))}
        >
            { for props.children.iter() }
        </section>
    }
}
