use js_sys::Reflect;
use log::{info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Window};

use crate::dom;

fn supported(window: &Window) -> bool {
    Reflect::has(&window.navigator(), &JsValue::from_str("serviceWorker")).unwrap_or(false)
}

fn register(window: &Window, path: &str) {
    let promise = window.navigator().service_worker().register(path);
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => info!("ServiceWorker registration successful"),
            Err(err) => warn!("ServiceWorker registration failed: {:?}", err),
        }
    });
}

/// Registers the worker once the page has loaded. Failure is only logged.
pub fn install(window: &Window, document: &Document, path: &str) -> Result<(), JsValue> {
    if !supported(window) {
        info!("service workers not supported");
        return Ok(());
    }
    // wasm can finish loading after the window load event
    if document.ready_state() == "complete" {
        register(window, path);
        return Ok(());
    }
    let window_clone = window.clone();
    let path = path.to_string();
    dom::listen(window, "load", move |_| register(&window_clone, &path))
}
