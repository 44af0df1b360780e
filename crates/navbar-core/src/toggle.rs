//! Show/hide a navbar menu from the trigger that names it.
//!
//! A trigger (usually the hamburger icon) carries `data-target="<id>"`. The
//! element with that id is the menu; its open state is the presence of
//! `is-active` in its class list. Resolution failures are returned as errors
//! rather than skipped so broken markup surfaces at the call site.

use crate::{
    MenuDocument, MenuElement, ToggleError, ACTIVE_CLASS, INLINE_CLICK_ATTR, TARGET_ATTR,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleConfig {
    pub target_attr: String,
    pub active_class: String,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            target_attr: TARGET_ATTR.to_string(),
            active_class: ACTIVE_CLASS.to_string(),
        }
    }
}

impl ToggleConfig {
    pub fn target_id(&self, trigger: &impl MenuElement) -> Result<String, ToggleError> {
        let id = trigger
            .attribute(&self.target_attr)
            .ok_or_else(|| ToggleError::MissingAttribute(self.target_attr.clone()))?;
        if !is_css_identifier(&id) {
            return Err(ToggleError::InvalidIdentifier(id));
        }
        Ok(id)
    }

    /// Triggers that already run an inline handler (`onclick="toggleActive(this)"`)
    /// must not get a second listener or every click toggles twice.
    #[inline]
    pub fn is_autowire_candidate(&self, trigger: &impl MenuElement) -> bool {
        trigger.attribute(&self.target_attr).is_some()
            && trigger.attribute(INLINE_CLICK_ATTR).is_none()
    }

    /// Keep the triggers whose target currently resolves; the rest are
    /// reported once here instead of on every later dismissal.
    pub fn resolvable_triggers<D: MenuDocument, E: MenuElement>(
        &self,
        document: &D,
        triggers: Vec<E>,
    ) -> Vec<E> {
        triggers
            .into_iter()
            .filter(|trigger| match self.resolve_target(document, trigger) {
                Ok(_) => true,
                Err(e) => {
                    log::warn!("[navbar] skipping trigger: {}", e);
                    false
                }
            })
            .collect()
    }

    pub fn resolve_target<D: MenuDocument>(
        &self,
        document: &D,
        trigger: &impl MenuElement,
    ) -> Result<D::Element, ToggleError> {
        let id = self.target_id(trigger)?;
        document.element_by_id(&id).ok_or_else(|| {
            log::warn!("[navbar] no element with id `{}`", id);
            ToggleError::TargetNotFound(id)
        })
    }

    /// Force the menu closed. Safe to call on an already closed menu.
    pub fn remove_active<D: MenuDocument>(
        &self,
        document: &D,
        trigger: &impl MenuElement,
    ) -> Result<(), ToggleError> {
        let target = self.resolve_target(document, trigger)?;
        target.remove_class(&self.active_class)?;
        log::debug!("[navbar] removed `{}`", self.active_class);
        Ok(())
    }

    /// Flip the menu open/closed; returns `true` if it is now open.
    pub fn toggle_active<D: MenuDocument>(
        &self,
        document: &D,
        trigger: &impl MenuElement,
    ) -> Result<bool, ToggleError> {
        let target = self.resolve_target(document, trigger)?;
        let active = target.toggle_class(&self.active_class)?;
        log::debug!("[navbar] toggled `{}` -> {}", self.active_class, active);
        Ok(active)
    }
}

/// Whether `id` can follow `#` in a selector without escaping: an
/// identifier that does not start with a digit or with `-` plus a digit,
/// made only of `[A-Za-z0-9_-]` and non-ASCII characters.
pub fn is_css_identifier(id: &str) -> bool {
    fn name_start(c: char) -> bool {
        c.is_ascii_alphabetic() || c == '_' || !c.is_ascii()
    }
    fn name_char(c: char) -> bool {
        name_start(c) || c.is_ascii_digit() || c == '-'
    }

    let mut chars = id.chars();
    let starts_ident = match chars.next() {
        Some('-') => matches!(chars.next(), Some(c) if c == '-' || name_start(c)),
        Some(c) => name_start(c),
        None => false,
    };
    starts_ident && id.chars().all(name_char)
}

#[inline]
pub fn target_id(trigger: &impl MenuElement) -> Result<String, ToggleError> {
    ToggleConfig::default().target_id(trigger)
}

#[inline]
pub fn resolve_target<D: MenuDocument>(
    document: &D,
    trigger: &impl MenuElement,
) -> Result<D::Element, ToggleError> {
    ToggleConfig::default().resolve_target(document, trigger)
}

#[inline]
pub fn remove_active<D: MenuDocument>(
    document: &D,
    trigger: &impl MenuElement,
) -> Result<(), ToggleError> {
    ToggleConfig::default().remove_active(document, trigger)
}

#[inline]
pub fn toggle_active<D: MenuDocument>(
    document: &D,
    trigger: &impl MenuElement,
) -> Result<bool, ToggleError> {
    ToggleConfig::default().toggle_active(document, trigger)
}
