// Host-side behaviour tests for the navbar toggle against the in-memory document.

use navbar_core::{
    remove_active, toggle_active, MemoryDocument, MemoryElement, MenuElement, ToggleError,
    ACTIVE_CLASS, TARGET_ATTR,
};

fn page(menu_class: &str) -> (MemoryDocument, MemoryElement, MemoryElement) {
    let doc = MemoryDocument::new();
    let trigger = doc.insert(
        MemoryElement::new("a")
            .with_class("navbar-burger")
            .with_attribute(TARGET_ATTR, "menu"),
    );
    let menu = doc.insert(MemoryElement::new("div").with_id("menu").with_class(menu_class));
    (doc, trigger, menu)
}

#[test]
fn toggle_opens_then_closes() {
    let (doc, trigger, menu) = page("navbar-menu");

    assert!(toggle_active(&doc, &trigger).unwrap());
    assert_eq!(menu.class_name(), "navbar-menu is-active");

    assert!(!toggle_active(&doc, &trigger).unwrap());
    assert_eq!(menu.class_name(), "navbar-menu");
}

#[test]
fn remove_closes_open_menu() {
    let (doc, trigger, menu) = page("navbar-menu is-active");

    remove_active(&doc, &trigger).unwrap();
    assert_eq!(menu.class_name(), "navbar-menu");
}

#[test]
fn missing_target_fails_for_both_operations() {
    let doc = MemoryDocument::new();
    let trigger = doc.insert(MemoryElement::new("a").with_attribute(TARGET_ATTR, "missing"));
    doc.insert(MemoryElement::new("div").with_id("menu"));

    let expected = Err(ToggleError::TargetNotFound("missing".into()));
    assert_eq!(toggle_active(&doc, &trigger).map(|_| ()), expected);
    assert_eq!(remove_active(&doc, &trigger), expected);
}

#[test]
fn trigger_without_attribute_fails() {
    let doc = MemoryDocument::new();
    let trigger = doc.insert(MemoryElement::new("a"));
    assert!(matches!(
        toggle_active(&doc, &trigger),
        Err(ToggleError::MissingAttribute(_))
    ));
    assert!(matches!(
        remove_active(&doc, &trigger),
        Err(ToggleError::MissingAttribute(_))
    ));
}

#[test]
fn toggle_parity() {
    for start_active in [false, true] {
        for calls in 0..7 {
            let class = if start_active {
                "navbar-menu is-active"
            } else {
                "navbar-menu"
            };
            let (doc, trigger, menu) = page(class);
            for _ in 0..calls {
                toggle_active(&doc, &trigger).unwrap();
            }
            let flipped = calls % 2 == 1;
            assert_eq!(
                menu.has_class(ACTIVE_CLASS),
                start_active != flipped,
                "start_active={start_active} calls={calls}"
            );
        }
    }
}

#[test]
fn remove_is_idempotent_from_any_state() {
    for class in ["navbar-menu", "navbar-menu is-active", "is-active", ""] {
        let (doc, trigger, menu) = page(class);
        for _ in 0..3 {
            remove_active(&doc, &trigger).unwrap();
            assert!(!menu.has_class(ACTIVE_CLASS), "class={class:?}");
        }
    }
}

#[test]
fn remove_after_toggles_always_closes() {
    let (doc, trigger, menu) = page("navbar-menu");
    for n in 0..5 {
        for _ in 0..n {
            toggle_active(&doc, &trigger).unwrap();
        }
        remove_active(&doc, &trigger).unwrap();
        assert_eq!(menu.class_name(), "navbar-menu");
    }
}

#[test]
fn shared_target_toggles_compose() {
    let (doc, first, menu) = page("navbar-menu");
    let second = doc.insert(MemoryElement::new("button").with_attribute(TARGET_ATTR, "menu"));

    assert!(toggle_active(&doc, &first).unwrap());
    assert!(!toggle_active(&doc, &second).unwrap());
    assert!(!menu.has_class(ACTIVE_CLASS));
}

#[test]
fn trigger_state_is_untouched() {
    let (doc, trigger, _menu) = page("navbar-menu");
    toggle_active(&doc, &trigger).unwrap();
    assert_eq!(trigger.attribute("class").as_deref(), Some("navbar-burger"));
    assert_eq!(trigger.attribute(TARGET_ATTR).as_deref(), Some("menu"));
}

#[test]
fn only_named_menu_changes() {
    let (doc, trigger, menu) = page("navbar-menu");
    let other = doc.insert(MemoryElement::new("div").with_id("other").with_class("navbar-menu"));
    toggle_active(&doc, &trigger).unwrap();
    assert!(menu.has_class(ACTIVE_CLASS));
    assert!(!other.has_class(ACTIVE_CLASS));
}
