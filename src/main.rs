use log::{error, info};

mod config;
mod controller;
mod dom;
mod error;
mod frame;
mod markup;
mod watch;

mod browser {
    pub mod element;
    pub mod observer;
    pub mod viewport;
}

mod features {
    pub mod anchors;
    pub mod entrance;
    pub mod hover;
    pub mod lazy_images;
    pub mod mobile_menu;
    pub mod modals;
    pub mod navbar;
    pub mod newsletter;
    pub mod parallax;
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging; the page's config block may adjust the level later
    console_log::init_with_level(config::default_log_level()).expect("error initializing log");

    info!("Starting page behavior");
    if let Err(e) = controller::boot() {
        error!("Page behavior not started: {}", e);
    }
}
