use std::cell::Cell;

use log::{info, warn, Level};
use wasm_bindgen::prelude::*;
use web_sys::Document;

pub mod analytics;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod dom;
pub mod forms;
pub mod keyboard;
pub mod menu;
pub mod reveal;
pub mod scroll;
pub mod service_worker;
pub mod stats;

use config::PageVariant;
use controller::{load_config, PageController};

thread_local! {
    static BOOTED: Cell<bool> = Cell::new(false);
}

fn manual_boot(document: &Document) -> bool {
    document
        .body()
        .and_then(|body| body.get_attribute("data-boot"))
        .is_some_and(|mode| mode == "manual")
}

fn install(document: &Document, forced: Option<PageVariant>) -> Result<(), JsValue> {
    if forced.is_none() && manual_boot(document) {
        info!("waiting for boot_page");
        return Ok(());
    }
    if BOOTED.with(|booted| booted.replace(true)) {
        warn!("page interactions already installed");
        return Ok(());
    }
    PageController::new(load_config(document, forced)).install()
}

/// Installs now, or after `DOMContentLoaded` while the document is still parsing.
fn boot(forced: Option<PageVariant>) -> Result<(), JsValue> {
    let window = dom::window()?;
    let document = dom::document()?;
    if document.ready_state() != "loading" {
        return install(&document, forced);
    }
    dom::listen(&window, "DOMContentLoaded", move |_| {
        if let Err(err) = install(&document, forced) {
            warn!("page interactions not installed: {:?}", err);
        }
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();
    // a second init (tests, double script tags) is harmless
    let _ = console_log::init_with_level(Level::Info);

    boot(None)
}

/// For pages with `data-boot="manual"` that pick their variant from script.
#[wasm_bindgen]
pub fn boot_page(name: &str) -> Result<(), JsValue> {
    let variant = name.parse::<PageVariant>().map_err(|err| JsValue::from_str(&err))?;
    boot(Some(variant))
}
