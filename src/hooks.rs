use web_sys::Element;
use yew::prelude::*;

use crate::dom::ViewportWatch;

/// `true` from the moment `node` first scrolls into view; never flips back.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let seen = use_state(|| false);

    {
        let seen = seen.setter();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let watch = node
                    .cast::<Element>()
                    .and_then(|el| ViewportWatch::once(&el, threshold, move || seen.set(true)));
                move || drop(watch)
            },
            node,
        );
    }

    *seen
}
