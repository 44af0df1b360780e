use navbar_core::{MenuDocument, MenuElement, ToggleError};
use wasm_bindgen::JsValue;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
fn host_error(e: JsValue) -> ToggleError {
    ToggleError::Host(format!("{:?}", e))
}

/// `web_sys::Document` seen through the toggle seam.
pub struct WebDocument(pub web::Document);

/// `web_sys::Element` seen through the toggle seam.
#[derive(Clone)]
pub struct WebElement(pub web::Element);

impl MenuDocument for WebDocument {
    type Element = WebElement;

    #[inline]
    fn element_by_id(&self, id: &str) -> Option<WebElement> {
        self.0.get_element_by_id(id).map(WebElement)
    }
}

impl MenuElement for WebElement {
    #[inline]
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ToggleError> {
        self.0.set_attribute(name, value).map_err(host_error)
    }

    #[inline]
    fn has_class(&self, class: &str) -> bool {
        self.0.class_list().contains(class)
    }

    fn remove_class(&self, class: &str) -> Result<(), ToggleError> {
        self.0.class_list().remove_1(class).map_err(host_error)
    }

    fn toggle_class(&self, class: &str) -> Result<bool, ToggleError> {
        self.0.class_list().toggle(class).map_err(host_error)
    }
}

/// All elements matching `selector`, in tree order.
pub fn query_all(document: &web::Document, selector: &str) -> Result<Vec<web::Element>, JsValue> {
    use wasm_bindgen::JsCast;
    let list = document.query_selector_all(selector)?;
    let mut out = Vec::with_capacity(list.length() as usize);
    for i in 0..list.length() {
        if let Some(el) = list.item(i).and_then(|n| n.dyn_into::<web::Element>().ok()) {
            out.push(el);
        }
    }
    Ok(out)
}

#[inline]
pub fn add_click_listener(element: &web::Element, mut handler: impl FnMut() + 'static) {
    use wasm_bindgen::JsCast;
    let closure =
        wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
    _ = element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}
