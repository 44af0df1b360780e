// Host-side tests for pure key handling.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod keys {
    include!("../src/keys.rs");
}

use keys::*;

#[test]
fn escape_dismisses() {
    assert!(is_dismiss_key("Escape"));
    assert!(is_dismiss_key("Esc"));
}

#[test]
fn other_keys_do_not_dismiss() {
    for key in ["Enter", " ", "escape", "ESC", "Tab", "h", ""] {
        assert!(!is_dismiss_key(key), "{key:?} should not dismiss");
    }
}

#[test]
fn aria_values() {
    assert_eq!(aria_expanded_value(true), "true");
    assert_eq!(aria_expanded_value(false), "false");
}
