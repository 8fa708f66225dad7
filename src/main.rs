use log::{info, Level};
use yew::prelude::*;

mod catalog;
mod config;
mod timer;
mod lead {
    pub mod state;
    pub mod submit;
    pub mod validate;
}
mod components {
    pub mod footer;
    pub mod hero;
    pub mod lead_form;
    pub mod trust;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
