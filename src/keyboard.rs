use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, KeyboardEvent};

use crate::dom;
use crate::menu::MobileMenu;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    CloseMenu,
    ClickButton,
}

pub fn key_action(key: &str, target_tag: Option<&str>, menu_open: bool) -> Option<KeyAction> {
    match key {
        "Escape" if menu_open => Some(KeyAction::CloseMenu),
        " " | "Enter" if target_tag.is_some_and(|tag| tag.eq_ignore_ascii_case("button")) => {
            Some(KeyAction::ClickButton)
        }
        _ => None,
    }
}

pub fn install_shortcuts(document: &Document, menu: Option<MobileMenu>) -> Result<(), JsValue> {
    dom::listen(document, "keydown", move |event| {
        let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let target = event
            .target()
            .and_then(|t| t.dyn_into::<HtmlElement>().ok());
        let tag = target.as_ref().map(|el| el.tag_name());
        let menu_open = menu.as_ref().is_some_and(MobileMenu::is_open);

        match key_action(&key_event.key(), tag.as_deref(), menu_open) {
            Some(KeyAction::CloseMenu) => {
                if let Some(menu) = menu.as_ref() {
                    menu.close();
                }
            }
            Some(KeyAction::ClickButton) => {
                event.prevent_default();
                if let Some(button) = target {
                    button.click();
                }
            }
            None => {}
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_only_matters_with_open_menu() {
        assert_eq!(key_action("Escape", None, true), Some(KeyAction::CloseMenu));
        assert_eq!(key_action("Escape", Some("BUTTON"), false), None);
    }

    #[test]
    fn space_and_enter_click_buttons() {
        assert_eq!(key_action(" ", Some("BUTTON"), false), Some(KeyAction::ClickButton));
        assert_eq!(key_action("Enter", Some("BUTTON"), true), Some(KeyAction::ClickButton));
        assert_eq!(key_action("Enter", Some("A"), false), None);
        assert_eq!(key_action(" ", None, false), None);
        assert_eq!(key_action("Tab", Some("BUTTON"), false), None);
    }
}
