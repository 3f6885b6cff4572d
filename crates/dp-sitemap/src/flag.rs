//! Boolean front matter flags.

use std::collections::HashMap;

/// Parse a boolean literal.
///
/// Accepts `true` and `false` in any ASCII case, ignoring surrounding
/// whitespace. Anything else (`yes`, `1`, `on`, empty) is not a boolean.
pub fn parse_bool_flag(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.eq_ignore_ascii_case("true") {
        Some(true)
    } else if value.eq_ignore_ascii_case("false") {
        Some(false)
    } else {
        None
    }
}

/// Read a boolean flag from front matter.
///
/// Returns `default` when the key is absent or its value is not a boolean
/// literal.
pub fn front_matter_flag(front_matter: &HashMap<String, String>, key: &str, default: bool) -> bool {
    front_matter
        .get(key)
        .and_then(|value| parse_bool_flag(value))
        .unwrap_or(default)
}
