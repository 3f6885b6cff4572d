//! YAML front matter extraction.
//!
//! A page's front matter is a leading block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Setup
//! noindex: true
//! ---
//! # Setup
//! ```
//!
//! Scalar values are kept as strings so consumers can apply their own parsing.

use std::collections::HashMap;

use serde_yaml::Value;

/// Front matter delimiter line.
const DELIMITER: &str = "---";

/// Split the raw YAML block off the start of a markdown document.
///
/// Returns `None` if the document doesn't open with a delimiter line or the
/// block is never closed.
pub(crate) fn split_front_matter(content: &str) -> Option<&str> {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            return Some(&content[start..offset]);
        }
        offset += line.len();
    }
    None
}

/// Parse front matter from a markdown document into string key/value pairs.
///
/// Scalars (strings, booleans, numbers) are stringified; nulls, sequences and
/// mappings are dropped. Documents without front matter yield an empty map.
///
/// # Errors
///
/// Returns an error if the front matter block is not valid YAML.
pub(crate) fn parse_front_matter(
    content: &str,
) -> Result<HashMap<String, String>, serde_yaml::Error> {
    let Some(block) = split_front_matter(content) else {
        return Ok(HashMap::new());
    };
    if block.trim().is_empty() {
        return Ok(HashMap::new());
    }

    let value: Value = serde_yaml::from_str(block)?;
    let Value::Mapping(mapping) = value else {
        return Ok(HashMap::new());
    };

    Ok(mapping
        .into_iter()
        .filter_map(|(key, value)| Some((scalar_to_string(key)?, scalar_to_string(value)?)))
        .collect())
}

/// Stringify a YAML scalar, returning `None` for anything else.
fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Tagged(tagged) => scalar_to_string(tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}
