use log::LevelFilter;

use crate::app::App;

mod app;
mod components;
mod logger;

fn main() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Err(err) = logger::init(level) {
        gloo_console::error!(format!("logger already set: {err}"));
    }

    yew::Renderer::<App>::new().render();
}
