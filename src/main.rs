use yew::prelude::*;
use log::info;

mod config;
mod dom;
mod hooks;
mod storage;
mod motion {
    pub mod carousel;
    pub mod counter;
    pub mod number_format;
}
mod state {
    pub mod brands;
    pub mod lead_modal;
    pub mod nav;
    pub mod video;
}
mod components {
    pub mod brands;
    pub mod counter;
    pub mod fade_up;
    pub mod footer;
    pub mod lead_modal;
    pub mod nav;
    pub mod testimonials;
    pub mod video_gallery;
}
mod pages {
    pub mod landing;
}

use components::{footer::Footer, nav::Nav};
use pages::landing::Landing;


#[function_component]
fn App() -> Html {
    html! {
        <>
            <Nav />
            <Landing />
            <Footer />
        </>
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting Echove site");
    yew::Renderer::<App>::new().render();
}
