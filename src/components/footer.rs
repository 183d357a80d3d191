use chrono::{Datelike, Local};
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="site-footer">
            <p>
                {"© "}<span id="year">{year}</span>{" Echove Media. All rights reserved."}
            </p>
            <div class="footer-links">
                <a href="#campaigns">{"Campaigns"}</a>
                <a href="#testimonials">{"Testimonials"}</a>
                <a href="#contact">{"Contact"}</a>
            </div>
        </footer>
    }
}
