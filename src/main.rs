//! Item Manager Frontend Entry Point

use item_manager_ui::app::App;
use item_manager_ui::config::Config;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(Config::from_env().log_level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", err).into());
    }
    mount_to_body(App);
}
