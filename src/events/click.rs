use crate::dom::{self, WebDocument, WebElement};
use crate::keys::aria_expanded_value;
use navbar_core::{MenuElement, ToggleConfig, ARIA_EXPANDED, BURGER_SELECTOR};
use web_sys as web;

/// Toggle the menu named by `trigger` and mirror the result onto the
/// trigger's `aria-expanded`.
pub fn handle_burger_click(document: &web::Document, trigger: &web::Element) {
    let trigger = WebElement(trigger.clone());
    match navbar_core::toggle_active(&WebDocument(document.clone()), &trigger) {
        Ok(active) => {
            if let Err(e) = trigger.set_attribute(ARIA_EXPANDED, aria_expanded_value(active)) {
                log::warn!("[navbar] {}", e);
            }
        }
        Err(e) => log::error!("[navbar] toggle failed: {}", e),
    }
}

/// Attach a click listener to every hamburger trigger without an inline
/// `onclick`; returns the triggers that were wired.
pub fn wire_burger_triggers(document: &web::Document) -> anyhow::Result<Vec<web::Element>> {
    let config = ToggleConfig::default();
    let triggers: Vec<web::Element> = dom::query_all(document, BURGER_SELECTOR)
        .map_err(|e| anyhow::anyhow!("query {:?} failed: {:?}", BURGER_SELECTOR, e))?
        .into_iter()
        .filter(|el| {
            let wire = config.is_autowire_candidate(&WebElement(el.clone()));
            if !wire {
                log::debug!("[navbar] leaving inline-handled trigger alone");
            }
            wire
        })
        .collect();
    for trigger in &triggers {
        let doc = document.clone();
        let el = trigger.clone();
        dom::add_click_listener(trigger, move || handle_burger_click(&doc, &el));
        _ = trigger.set_attribute(ARIA_EXPANDED, aria_expanded_value(false));
    }
    Ok(triggers)
}
