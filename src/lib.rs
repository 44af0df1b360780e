#![cfg(target_arch = "wasm32")]
use navbar_core::ToggleError;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod dom;
mod events;
mod keys;

fn to_js(e: ToggleError) -> JsValue {
    js_sys::Error::new(&e.to_string()).into()
}

fn current_document() -> Result<dom::WebDocument, JsValue> {
    dom::window_document()
        .map(dom::WebDocument)
        .ok_or_else(|| js_sys::Error::new("no document").into())
}

/// Close the menu named by `elem`'s `data-target`. Throws if it cannot be
/// resolved.
#[wasm_bindgen(js_name = removeActive)]
pub fn remove_active(elem: &web::Element) -> Result<(), JsValue> {
    let document = current_document()?;
    navbar_core::remove_active(&document, &dom::WebElement(elem.clone())).map_err(to_js)
}

/// Open or close the menu named by `elem`'s `data-target`. Throws if it
/// cannot be resolved.
#[wasm_bindgen(js_name = toggleActive)]
pub fn toggle_active(elem: &web::Element) -> Result<(), JsValue> {
    let document = current_document()?;
    navbar_core::toggle_active(&document, &dom::WebElement(elem.clone()))
        .map(|_| ())
        .map_err(to_js)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("navbar-web starting");

    let dom::WebDocument(document) = current_document()?;
    if document.ready_state() == "loading" {
        // Module evaluated from <head>; triggers aren't parsed yet
        let doc = document.clone();
        let closure = Closure::once(move || run_init(&doc));
        _ = document.add_event_listener_with_callback(
            "DOMContentLoaded",
            closure.as_ref().unchecked_ref(),
        );
        closure.forget();
    } else {
        run_init(&document);
    }
    Ok(())
}

fn run_init(document: &web::Document) {
    if let Err(e) = init(document) {
        log::error!("init error: {:?}", e);
    }
}

fn init(document: &web::Document) -> anyhow::Result<()> {
    let triggers = events::wire_burger_triggers(document)?;
    log::info!("[navbar] wired {} trigger(s)", triggers.len());
    events::wire_escape_dismiss(document, triggers);
    Ok(())
}
