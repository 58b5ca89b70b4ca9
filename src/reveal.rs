use std::cell::Cell;
use std::rc::Rc;

use js_sys::Array;
use log::info;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::config::PageConfig;
use crate::dom;
use crate::stats;

fn observer<F>(threshold: f64, root_margin: Option<&str>, mut on_visible: F) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(IntersectionObserverEntry, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(entry, &observer);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    if let Some(margin) = root_margin {
        options.set_root_margin(margin);
    }
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();
    Ok(observer)
}

/// Adds the reveal class the first time each element scrolls into view.
pub fn install_fade_in(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let targets = dom::query_all(document, &config.reveal_selector);
    if targets.is_empty() {
        return Ok(());
    }
    let class = config.reveal_class.clone();
    let observer = observer(
        config.reveal_threshold,
        Some(&config.reveal_root_margin),
        move |entry, _| dom::add_class(&entry.target(), &class),
    )?;
    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

/// Starts the stat counters once, when the hero is half visible.
pub fn install_hero_stats(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(hero) = dom::query(document, &config.hero_selector) else {
        return Ok(());
    };
    let fired = Rc::new(Cell::new(false));
    let document = document.clone();
    let stats_config = config.clone();
    let observer = observer(config.hero_threshold, None, move |entry, observer| {
        observer.unobserve(&entry.target());
        if fired.replace(true) {
            return;
        }
        info!("hero visible, starting stat counters");
        stats::start_after_delay(document.clone(), stats_config.clone());
    })?;
    observer.observe(&hero);
    Ok(())
}
