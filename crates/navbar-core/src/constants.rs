// Markup contract shared by the core and the web front-end

/// Attribute on a trigger naming the id of the menu it controls.
pub const TARGET_ATTR: &str = "data-target";
/// Class whose presence marks a menu as open.
pub const ACTIVE_CLASS: &str = "is-active";
/// Triggers wired automatically at start-up.
pub const BURGER_SELECTOR: &str = ".navbar-burger[data-target]";
/// Mirrors the open state onto auto-wired triggers.
pub const ARIA_EXPANDED: &str = "aria-expanded";
/// Inline handler attribute; triggers carrying it are left to the page.
pub const INLINE_CLICK_ATTR: &str = "onclick";
