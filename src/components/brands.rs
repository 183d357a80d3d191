use web_sys::MouseEvent;
use yew::prelude::*;

use crate::state::brands::BrandsView;

const BRANDS: [&str; 10] = [
    "Lumen Skincare",
    "Northwind Audio",
    "Koda Coffee",
    "Parallel Fitness",
    "Oak & Ivy",
    "Velo Bikes",
    "Mira Labs",
    "Saltline Apparel",
    "Fable Games",
    "Harbor Foods",
];

#[function_component(BrandsStrip)]
pub fn brands_strip() -> Html {
    let view = use_state(BrandsView::default);

    let toggle = {
        let view = view.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            view.set(view.toggled());
        })
    };

    let brand_items = || {
        BRANDS
            .iter()
            .map(|name| html! { <li class="brand-logo">{*name}</li> })
            .collect::<Html>()
    };

    html! {
        <div class="brands">
            <div class="brands-header">
                <h2>{"Brands we've worked with"}</h2>
                <button
                    class="brands-toggle"
                    aria-expanded={if view.is_expanded() { "true" } else { "false" }}
                    aria-controls="brandsGrid"
                    onclick={toggle}
                >
                    {view.label()}
                </button>
            </div>

            <div
                id="brandsMarquee"
                class={classes!("brands-marquee", view.marquee_paused().then(|| "paused"))}
                hidden={view.marquee_hidden()}
            >
                // Listed twice so the scroll animation loops without a gap.
                <ul class="marquee-track">
                    { brand_items() }
                    { brand_items() }
                </ul>
            </div>

            <ul id="brandsGrid" class="brands-grid" hidden={view.grid_hidden()}>
                { brand_items() }
            </ul>
        </div>
    }
}
