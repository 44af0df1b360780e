use crate::dom::{WebDocument, WebElement};
use crate::keys::{aria_expanded_value, is_dismiss_key};
use navbar_core::{MenuElement, ToggleConfig, ARIA_EXPANDED};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Close every menu controlled by `triggers`.
pub fn dismiss_all(document: &web::Document, triggers: &[web::Element]) {
    let doc = WebDocument(document.clone());
    for trigger in triggers {
        let trigger = WebElement(trigger.clone());
        if let Err(e) = navbar_core::remove_active(&doc, &trigger) {
            log::error!("[navbar] dismiss failed: {}", e);
            continue;
        }
        _ = trigger.set_attribute(ARIA_EXPANDED, aria_expanded_value(false));
    }
}

/// Listen for dismiss keys on `document`. Triggers whose target does not
/// resolve now are dropped up front.
pub fn wire_escape_dismiss(document: &web::Document, triggers: Vec<web::Element>) {
    let wrapped: Vec<WebElement> = triggers.into_iter().map(WebElement).collect();
    let triggers: Vec<web::Element> = ToggleConfig::default()
        .resolvable_triggers(&WebDocument(document.clone()), wrapped)
        .into_iter()
        .map(|t| t.0)
        .collect();
    if triggers.is_empty() {
        return;
    }
    let doc = document.clone();
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
            if is_dismiss_key(&ev.key()) {
                dismiss_all(&doc, &triggers);
            }
        }) as Box<dyn FnMut(_)>);
    _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
    closure.forget();
}
