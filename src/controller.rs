use log::{info, warn};
use wasm_bindgen::prelude::*;
use web_sys::Document;

use crate::analytics;
use crate::config::{ConfigOverrides, PageConfig, PageVariant};
use crate::dom;
use crate::forms;
use crate::keyboard;
use crate::menu::{self, MobileMenu};
use crate::reveal;
use crate::scroll;
use crate::service_worker;

const WELCOME: &str = "
    🗓️  Welcome to Calendar Peek!

    Smart calendar integration for modern productivity.

    For support: support@joshhou.com
    GitHub: https://github.com/joshhou/calendar-peek

    Made with ❤️ for productivity
";

/// Variant from `<body data-page>`, then overrides from `#page-config` if present.
pub fn load_config(document: &Document, forced: Option<PageVariant>) -> PageConfig {
    let variant = forced.unwrap_or_else(|| {
        let name = document
            .body()
            .and_then(|body| body.get_attribute("data-page"))
            .unwrap_or_default();
        name.parse::<PageVariant>().unwrap_or_else(|err| {
            warn!("{}, falling back to calendar-peek", err);
            PageVariant::CalendarPeek
        })
    });

    let mut config = PageConfig::for_variant(variant);
    if let Some(raw) = document
        .get_element_by_id("page-config")
        .and_then(|el| el.text_content())
    {
        match ConfigOverrides::from_json(&raw) {
            Ok(overrides) => config.apply(overrides),
            Err(err) => warn!("ignoring malformed page-config: {}", err),
        }
    }
    config
}

fn step(name: &str, result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!("{} not installed: {:?}", name, err);
    }
}

pub struct PageController {
    config: PageConfig,
}

impl PageController {
    pub fn new(config: PageConfig) -> Self {
        PageController { config }
    }

    /// Binds every behaviour the variant uses. A failing binding is logged
    /// and skipped so the rest of the page still works.
    pub fn install(&self) -> Result<(), JsValue> {
        let window = dom::window()?;
        let document = dom::document()?;
        let config = &self.config;
        info!("installing {} page interactions", config.variant.as_str());

        let menu = if config.is_landing() {
            MobileMenu::find(&document, config)
        } else {
            None
        };
        if let Some(menu) = menu.as_ref() {
            step("mobile menu", menu::install_toggle(menu));
        }
        step(
            "anchor links",
            scroll::install_anchor_links(&window, &document, config, menu.clone()),
        );

        if !config.is_landing() {
            return Ok(());
        }

        step("navbar", scroll::install_navbar(&window, &document, config));
        step("nav direction", scroll::install_nav_direction(&window, &document, config));
        step("fade in", reveal::install_fade_in(&document, config));
        step("parallax", scroll::install_parallax(&window, &document, config));
        step("stat counters", reveal::install_hero_stats(&document, config));
        step("forms", forms::install_forms(&document, config));
        step("keyboard", keyboard::install_shortcuts(&document, menu));
        step("analytics", analytics::install_tracking(&document, config));
        if let Some(path) = config.service_worker_path.as_deref() {
            step("service worker", service_worker::install(&window, &document, path));
        }
        if config.welcome_banner {
            gloo_console::log!(WELCOME);
        }
        Ok(())
    }
}
