use gloo_timers::callback::Timeout;
use log::{info, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::config::PageConfig;
use crate::dom;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    InvalidEmail,
    Accepted,
}

/// Forms without an email field are always accepted.
pub fn check_submission(email: Option<&str>) -> FormOutcome {
    match email {
        Some(value) if !is_valid_email(value) => FormOutcome::InvalidEmail,
        _ => FormOutcome::Accepted,
    }
}

#[derive(Debug, Clone, Copy)]
enum Banner {
    Error,
    Success,
}

impl Banner {
    fn class(self) -> &'static str {
        match self {
            Banner::Error => "error-message",
            Banner::Success => "success-message",
        }
    }

    fn color(self) -> &'static str {
        match self {
            Banner::Error => "var(--error-color)",
            Banner::Success => "var(--success-color)",
        }
    }
}

/// Appends a message under `parent` that removes itself after `timeout_ms`.
fn show_banner(
    document: &Document,
    parent: &Element,
    kind: Banner,
    message: &str,
    timeout_ms: u32,
) -> Result<(), JsValue> {
    let banner = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    banner.set_class_name(kind.class());
    banner.set_text_content(Some(message));
    let style = banner.style();
    style.set_property("color", kind.color())?;
    style.set_property("font-size", "var(--font-size-sm)")?;
    style.set_property("margin-top", "var(--spacing-2)")?;

    parent.append_child(&banner)?;
    Timeout::new(timeout_ms, move || banner.remove()).forget();
    Ok(())
}

pub fn install_forms(document: &Document, config: &PageConfig) -> Result<(), JsValue> {
    for form in dom::query_all(document, &config.form_selector) {
        let document = document.clone();
        let form_clone = form.clone();
        let email_selector = config.email_selector.clone();
        let error_message = config.error_message.clone();
        let success_message = config.success_message.clone();
        let error_timeout = config.error_timeout_ms;
        let success_timeout = config.success_timeout_ms;

        dom::listen(&form, "submit", move |event| {
            event.prevent_default();
            let email = dom::query_within(&form_clone, &email_selector)
                .and_then(|el| el.dyn_into::<HtmlInputElement>().ok());
            let value = email.as_ref().map(|input| input.value());

            let shown = match (check_submission(value.as_deref()), email) {
                (FormOutcome::InvalidEmail, Some(input)) => {
                    let parent = input.parent_element().unwrap_or_else(|| form_clone.clone());
                    show_banner(&document, &parent, Banner::Error, &error_message, error_timeout)
                }
                _ => {
                    info!("form submitted");
                    show_banner(&document, &form_clone, Banner::Success, &success_message, success_timeout)
                }
            };
            if let Err(err) = shown {
                warn!("failed to show form message: {:?}", err);
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_addresses() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("first.last+tag@mail.co.uk"));
        assert!(is_valid_email("a@b.c"));
    }

    #[test]
    fn rejects_malformed_addresses() {
        assert!(!is_valid_email("not-an-email"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("user@example"));
        assert!(!is_valid_email("user @example.com"));
        assert!(!is_valid_email("user@@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("user@.com"));
    }

    #[test]
    fn outcome_depends_only_on_email_field() {
        assert_eq!(check_submission(Some("not-an-email")), FormOutcome::InvalidEmail);
        assert_eq!(check_submission(Some("user@example.com")), FormOutcome::Accepted);
        assert_eq!(check_submission(None), FormOutcome::Accepted);
    }
}
