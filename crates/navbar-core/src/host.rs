//! Seam between the toggle logic and whatever owns the element tree.
//!
//! The browser front-end implements these over `web_sys` handles; the
//! in-memory document in [`crate::memory`] implements them for tests and
//! non-browser hosts. Handles are cheap references into a tree owned
//! elsewhere, so every method takes `&self`.

use crate::ToggleError;

pub trait MenuElement {
    fn attribute(&self, name: &str) -> Option<String>;
    fn set_attribute(&self, name: &str, value: &str) -> Result<(), ToggleError>;
    fn has_class(&self, class: &str) -> bool;
    fn remove_class(&self, class: &str) -> Result<(), ToggleError>;
    /// Returns whether `class` is present after the call.
    fn toggle_class(&self, class: &str) -> Result<bool, ToggleError>;
}

pub trait MenuDocument {
    type Element: MenuElement;

    /// First element in tree order whose `id` equals `id`.
    fn element_by_id(&self, id: &str) -> Option<Self::Element>;
}
