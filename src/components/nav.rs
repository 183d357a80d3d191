use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::state::nav::NavMenu;

const LINKS: [(&str, &str); 5] = [
    ("#campaigns", "Campaigns"),
    ("#results", "Results"),
    ("#brands", "Brands"),
    ("#testimonials", "Testimonials"),
    ("#contact", "Contact"),
];

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu = use_state(NavMenu::default);
    let navbar = use_node_ref();

    // A click anywhere outside the bar closes an open menu.
    {
        let menu = menu.clone();
        use_click_away(navbar.clone(), move |_: Event| {
            if menu.is_open() {
                menu.set(menu.closed());
            }
        });
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.toggled());
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu.closed());
        })
    };

    html! {
        <nav class="navbar" ref={navbar}>
            <div class="nav-content">
                <a href="#top" class="nav-logo">{"Echove Media"}</a>

                <button
                    class="nav-toggle"
                    aria-label="Toggle navigation"
                    aria-expanded={menu.aria_expanded()}
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>

                <div class={classes!("nav-links", menu.is_open().then(|| "open"))}>
                    { for LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} onclick={close_menu.clone()}>{*label}</a>
                    }) }
                </div>
            </div>
        </nav>
    }
}
