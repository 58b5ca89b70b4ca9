use std::cell::RefCell;
use std::rc::Rc;

use log::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions, Window,
};

use crate::config::PageConfig;
use crate::debounce::Debouncer;
use crate::dom;
use crate::menu::MobileMenu;

pub fn is_scrolled(offset: f64, threshold: f64) -> bool {
    offset > threshold
}

pub fn parallax_transform(offset: f64, factor: f64) -> String {
    let rate = offset * factor;
    // avoid printing "-0px" at the top of the page
    let rate = if rate == 0.0 { 0.0 } else { rate };
    format!(
        "perspective(1000px) rotateY(-5deg) rotateX(5deg) translateY({}px)",
        rate
    )
}

/// Id an in-page link points at, `None` for a bare `#`.
pub fn anchor_target_id(href: &str) -> Option<&str> {
    let id = href.strip_prefix('#')?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

pub fn anchor_scroll_top(target_offset_top: f64, header_offset: f64) -> f64 {
    target_offset_top - header_offset
}

/// Shows the centered nav when scrolling up or near the top of the page.
#[derive(Debug, Clone, Default)]
pub struct NavDirection {
    last: f64,
    reveal_zone: f64,
}

impl NavDirection {
    pub fn new(reveal_zone: f64) -> Self {
        NavDirection {
            last: 0.0,
            reveal_zone,
        }
    }

    /// Records `offset` and returns whether the nav should be visible.
    pub fn update(&mut self, offset: f64) -> bool {
        let visible = offset < self.last || offset <= self.reveal_zone;
        self.last = offset;
        visible
    }
}

/// Runs `f` with the scroll offset at fire time, debounced.
fn on_scroll_debounced<F>(window: &Window, wait_ms: u32, f: F) -> Result<(), JsValue>
where
    F: Fn(f64) + 'static,
{
    let f = Rc::new(f);
    let debouncer = Debouncer::new(wait_ms);
    let window_clone = window.clone();
    dom::listen(window, "scroll", move |_| {
        let f = f.clone();
        let window = window_clone.clone();
        debouncer.call(move || f(dom::scroll_y(&window)));
    })
}

pub fn install_navbar(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(navbar) = dom::query(document, &config.navbar_selector) else {
        return Ok(());
    };
    let class = config.navbar_scrolled_class.clone();
    let threshold = config.navbar_threshold;
    let update = move |offset: f64| {
        dom::set_class(&navbar, &class, is_scrolled(offset, threshold));
    };

    update(dom::scroll_y(window));
    on_scroll_debounced(window, config.scroll_debounce_ms, update)
}

pub fn install_parallax(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(hero_image) = dom::query(document, &config.hero_image_selector) else {
        return Ok(());
    };
    let Ok(hero_image) = hero_image.dyn_into::<HtmlElement>() else {
        return Ok(());
    };
    let factor = config.parallax_factor;
    on_scroll_debounced(window, config.scroll_debounce_ms, move |offset| {
        let _ = hero_image
            .style()
            .set_property("transform", &parallax_transform(offset, factor));
    })
}

pub fn install_nav_direction(window: &Window, document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    let Some(selector) = config.centered_nav_selector.as_deref() else {
        return Ok(());
    };
    let Some(nav) = dom::query(document, selector) else {
        return Ok(());
    };
    let tracker = Rc::new(RefCell::new(NavDirection::new(config.nav_reveal_zone)));
    let hidden_class = config.nav_hidden_class.clone();
    let window_clone = window.clone();
    dom::listen(window, "scroll", move |_| {
        let visible = tracker.borrow_mut().update(dom::scroll_y(&window_clone));
        dom::set_class(&nav, &hidden_class, !visible);
    })
}

fn scroll_to_anchor(window: &Window, target: &Element, header_offset: Option<f64>) -> bool {
    match header_offset {
        Some(offset) => {
            let Some(target) = target.dyn_ref::<HtmlElement>() else {
                return false;
            };
            let options = ScrollToOptions::new();
            options.set_top(anchor_scroll_top(f64::from(target.offset_top()), offset));
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
        None => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    true
}

pub fn install_anchor_links(
    window: &Window,
    document: &Document,
    config: &PageConfig,
    menu: Option<MobileMenu>,
) -> Result<(), JsValue> {
    for link in dom::query_all(document, "a[href^=\"#\"]") {
        let window = window.clone();
        let document = document.clone();
        let menu = menu.clone();
        let header_offset = config.anchor_offset;
        let link_clone = link.clone();
        dom::listen(&link, "click", move |event| {
            event.prevent_default();
            let href = link_clone.get_attribute("href").unwrap_or_default();
            let Some(target) = anchor_target_id(&href).and_then(|id| document.get_element_by_id(id)) else {
                debug!("no anchor target for {}", href);
                return;
            };
            if scroll_to_anchor(&window, &target, header_offset) {
                if let Some(menu) = menu.as_ref() {
                    menu.close();
                }
            }
        })?;
    }
    Ok(())
}
