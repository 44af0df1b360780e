//! In-memory element tree for hosts without a browser DOM.

use crate::{ClassList, MenuDocument, MenuElement, ToggleError};
use fnv::FnvHashMap;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct ElementData {
    tag: String,
    attributes: FnvHashMap<String, String>,
    classes: ClassList,
}

/// Shared handle; clones alias the same element.
#[derive(Clone, Debug)]
pub struct MemoryElement(Rc<RefCell<ElementData>>);

impl MemoryElement {
    pub fn new(tag: &str) -> Self {
        Self(Rc::new(RefCell::new(ElementData {
            tag: tag.to_string(),
            ..Default::default()
        })))
    }

    pub fn with_attribute(self, name: &str, value: &str) -> Self {
        self.store_attribute(name, value);
        self
    }

    pub fn with_id(self, id: &str) -> Self {
        self.with_attribute("id", id)
    }

    pub fn with_class(self, value: &str) -> Self {
        self.with_attribute("class", value)
    }

    pub fn tag(&self) -> String {
        self.0.borrow().tag.clone()
    }

    pub fn id(&self) -> Option<String> {
        self.attribute("id")
    }

    /// Serialized `class` attribute.
    pub fn class_name(&self) -> String {
        self.0.borrow().classes.to_string()
    }

    pub fn remove_attribute(&self, name: &str) {
        let mut data = self.0.borrow_mut();
        if name == "class" {
            data.classes = ClassList::default();
        }
        data.attributes.remove(name);
    }

    #[inline]
    pub fn same_element(&self, other: &MemoryElement) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    fn store_attribute(&self, name: &str, value: &str) {
        let mut data = self.0.borrow_mut();
        if name == "class" {
            data.classes = ClassList::parse(value);
        }
        data.attributes.insert(name.to_string(), value.to_string());
    }

    fn sync_class_attribute(data: &mut ElementData) {
        if data.classes.is_empty() && !data.attributes.contains_key("class") {
            return;
        }
        let serialized = data.classes.to_string();
        data.attributes.insert("class".to_string(), serialized);
    }
}

impl MenuElement for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.borrow().attributes.get(name).cloned()
    }

    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ToggleError> {
        if name.is_empty() {
            return Err(ToggleError::Host("empty attribute name".into()));
        }
        self.store_attribute(name, value);
        Ok(())
    }

    fn has_class(&self, class: &str) -> bool {
        self.0.borrow().classes.contains(class)
    }

    fn remove_class(&self, class: &str) -> Result<(), ToggleError> {
        let mut data = self.0.borrow_mut();
        data.classes.remove(class)?;
        Self::sync_class_attribute(&mut data);
        Ok(())
    }

    fn toggle_class(&self, class: &str) -> Result<bool, ToggleError> {
        let mut data = self.0.borrow_mut();
        let present = data.classes.toggle(class)?;
        Self::sync_class_attribute(&mut data);
        Ok(present)
    }
}

#[derive(Clone, Debug, Default)]
pub struct MemoryDocument {
    elements: Rc<RefCell<Vec<MemoryElement>>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `element` in tree order and hand back a handle to it.
    pub fn insert(&self, element: MemoryElement) -> MemoryElement {
        self.elements.borrow_mut().push(element.clone());
        element
    }

    pub fn len(&self) -> usize {
        self.elements.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.borrow().is_empty()
    }
}

impl MenuDocument for MemoryDocument {
    type Element = MemoryElement;

    fn element_by_id(&self, id: &str) -> Option<MemoryElement> {
        self.elements
            .borrow()
            .iter()
            .find(|el| el.id().as_deref() == Some(id))
            .cloned()
    }
}
