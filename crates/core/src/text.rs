// ABOUTME: Small string helpers: truncation, emptiness checks, template filling.
// ABOUTME: All functions count characters (Unicode scalar values), never bytes.

use serde::Serialize;
use serde_json::Value;

use crate::error::{CoreError, Result};

/// Appended to truncated strings.
pub const ELLIPSIS: char = '…';

const ROMAN_NUMERAL_CHARACTERS: &[char] = &['I', 'V', 'X', 'L', 'C', 'D', 'M'];

/// Truncates a string to at most `length` characters, ending with an ellipsis
/// when anything was cut. Whitespace left dangling before the ellipsis is
/// trimmed, so the result may be shorter than `length`.
pub fn truncate(s: &str, length: usize) -> String {
    if s.chars().count() <= length {
        return s.to_string();
    }

    let kept: String = s.chars().take(length.saturating_sub(1)).collect();
    let mut result = kept.trim_end().to_string();
    result.push(ELLIPSIS);
    result
}

/// Returns true when the string is absent, has zero length, or is whitespace only.
pub fn is_string_empty(s: Option<&str>) -> bool {
    match s {
        None => true,
        Some(s) => s.trim().is_empty(),
    }
}

/// Checks whether the (trimmed) string consists solely of uppercase Roman numeral letters.
///
/// This is a character-set check, not a grammar check: "IIII" and "VX" pass.
pub fn is_roman_numeral(s: &str) -> bool {
    let s = s.trim();
    !s.is_empty() && s.chars().all(|c| ROMAN_NUMERAL_CHARACTERS.contains(&c))
}

/// Decodes bytes as UTF-8, replacing invalid sequences.
pub fn stringify_bytes(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Fills `@@@Name@@@` placeholders in `template` with the fields of `values`.
///
/// `values` must serialize to a map (a struct, a `HashMap`, a `json!` object).
/// Fields whose name starts with `_` are skipped. Strings are inserted as-is,
/// `null` becomes the empty string and every other value uses its JSON text.
pub fn fill_template<T: Serialize + ?Sized>(values: &T, template: &str) -> Result<String> {
    let fields = match serde_json::to_value(values).map_err(CoreError::template)? {
        Value::Object(map) => map,
        other => {
            return Err(CoreError::template(format!(
                "expected a map of values, got {}",
                value_kind(&other)
            )))
        }
    };

    let mut result = template.to_string();
    for (name, value) in fields.iter().filter(|(name, _)| !name.starts_with('_')) {
        let placeholder = format!("@@@{name}@@@");
        result = result.replace(&placeholder, &stringify_value(value));
    }

    Ok(result)
}

fn stringify_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a map",
    }
}
