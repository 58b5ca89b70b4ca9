use wasm_bindgen::prelude::*;
use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::dom;

/// The burger control and the panel it opens. Both carry the open class
/// together, so every path goes through `toggle`/`close`.
#[derive(Clone)]
pub struct MobileMenu {
    toggle: Element,
    panel: Element,
    open_class: String,
}

impl MobileMenu {
    pub fn find(document: &Document, config: &PageConfig) -> Option<Self> {
        let toggle = dom::query(document, &config.menu_toggle_selector)?;
        let panel = dom::query(document, &config.nav_links_selector)?;
        Some(MobileMenu {
            toggle,
            panel,
            open_class: config.menu_open_class.clone(),
        })
    }

    pub fn is_open(&self) -> bool {
        dom::has_class(&self.panel, &self.open_class)
    }

    pub fn toggle(&self) {
        dom::toggle_class(&self.panel, &self.open_class);
        dom::toggle_class(&self.toggle, &self.open_class);
    }

    pub fn close(&self) {
        if self.is_open() {
            dom::remove_class(&self.panel, &self.open_class);
            dom::remove_class(&self.toggle, &self.open_class);
        }
    }

    pub fn control(&self) -> &Element {
        &self.toggle
    }
}

pub fn install_toggle(menu: &MobileMenu) -> Result<(), JsValue> {
    let menu_clone = menu.clone();
    dom::listen(menu.control(), "click", move |_| menu_clone.toggle())
}
