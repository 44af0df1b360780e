// Pure key matching, kept free of web-sys so host tests can include it.

/// Keys that close every open menu. `Esc` is the pre-standard spelling
/// some older engines still report.
#[inline]
pub fn is_dismiss_key(key: &str) -> bool {
    matches!(key, "Escape" | "Esc")
}

#[inline]
pub fn aria_expanded_value(active: bool) -> &'static str {
    if active {
        "true"
    } else {
        "false"
    }
}
