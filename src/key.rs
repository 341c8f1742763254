//! Canonical lowerCamelCase keys derived from labels.
use crate::util::property_name;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORDS: OnceLock<Regex> = OnceLock::new();
    WORDS.get_or_init(|| Regex::new(r"[\p{L}\p{N}]+").expect("compile word pattern"))
}

/// Convert a label to a lookup key: `"All Done Yo"` becomes `"allDoneYo"`.
///
/// Words are runs of letters and digits; everything else separates words and
/// is dropped. The first word is lowercased, later words get an uppercase
/// first character and keep the rest as written.
pub fn to_key(input: &str) -> String {
    let mut key = String::with_capacity(input.len());
    for (index, word) in word_pattern().find_iter(input).enumerate() {
        let word = word.as_str();
        if index == 0 {
            key.push_str(&word.to_lowercase());
            continue;
        }
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            key.extend(first.to_uppercase());
            key.push_str(chars.as_str());
        }
    }
    key
}

/// Key for an arbitrary value; non-strings are coerced to text first.
pub fn key_for(value: &Value) -> String {
    match value {
        Value::String(text) => to_key(text),
        other => to_key(&property_name(other)),
    }
}
