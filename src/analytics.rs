use js_sys::{Function, Reflect};
use log::debug;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element};

use crate::config::PageConfig;
use crate::dom;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AnalyticsEvent {
    CtaClick {
        button_text: String,
        location: String,
    },
    FeatureInteraction {
        feature_name: Option<String>,
    },
}

impl AnalyticsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            AnalyticsEvent::CtaClick { .. } => "cta_click",
            AnalyticsEvent::FeatureInteraction { .. } => "feature_interaction",
        }
    }

    pub fn cta_click(button_text: &str, section_id: Option<String>) -> Self {
        AnalyticsEvent::CtaClick {
            button_text: button_text.trim().to_string(),
            location: section_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| "unknown".to_string()),
        }
    }
}

fn gtag() -> Option<Function> {
    Reflect::get(&js_sys::global(), &JsValue::from_str("gtag"))
        .ok()?
        .dyn_into::<Function>()
        .ok()
}

/// Forwards to `gtag("event", ...)` when the page loaded it, otherwise does nothing.
pub fn track_event(event: &AnalyticsEvent) {
    let Some(gtag) = gtag() else {
        debug!("gtag missing, dropping {}", event.name());
        return;
    };
    let Ok(properties) = serde_wasm_bindgen::to_value(event) else {
        return;
    };
    let _ = gtag.call3(
        &JsValue::NULL,
        &JsValue::from_str("event"),
        &JsValue::from_str(event.name()),
        &properties,
    );
}

fn section_id(element: &Element) -> Option<String> {
    element.closest("section").ok().flatten().map(|section| section.id())
}

pub fn install_tracking(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    for button in dom::query_all(document, &config.cta_selector) {
        let button_clone = button.clone();
        dom::listen(&button, "click", move |_| {
            let text = button_clone.text_content().unwrap_or_default();
            track_event(&AnalyticsEvent::cta_click(&text, section_id(&button_clone)));
        })?;
    }

    for card in dom::query_all(document, &config.feature_card_selector) {
        let card_clone = card.clone();
        dom::listen(&card, "click", move |_| {
            let feature_name = dom::query_within(&card_clone, "h3").and_then(|h| h.text_content());
            track_event(&AnalyticsEvent::FeatureInteraction { feature_name });
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cta_properties() {
        let event = AnalyticsEvent::cta_click("  Get Early Access \n", Some("pricing".to_string()));
        assert_eq!(event.name(), "cta_click");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"button_text": "Get Early Access", "location": "pricing"})
        );
    }

    #[test]
    fn cta_outside_a_section_is_unknown() {
        let no_section = AnalyticsEvent::cta_click("Try it", None);
        let blank_id = AnalyticsEvent::cta_click("Try it", Some(String::new()));
        for event in [no_section, blank_id] {
            assert_eq!(
                serde_json::to_value(&event).unwrap()["location"],
                json!("unknown")
            );
        }
    }

    #[test]
    fn feature_properties() {
        let event = AnalyticsEvent::FeatureInteraction {
            feature_name: Some("Peek at any day".to_string()),
        };
        assert_eq!(event.name(), "feature_interaction");
        assert_eq!(
            serde_json::to_value(&event).unwrap(),
            json!({"feature_name": "Peek at any day"})
        );
    }
}
