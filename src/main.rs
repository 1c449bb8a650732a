//! Todo List Frontend Entry Point

use leptos::prelude::*;
use todo_list_ui::{App, AppConfig};

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    console_log::init_with_level(config.log_level).expect("error initializing logger");
    log::info!("[APP] Starting with storage key '{}'", config.storage_key);

    mount_to_body(move || view! { <App config=config.clone() /> });
}
