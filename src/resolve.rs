//! Selector resolution.
//!
//! A selector may name a node by value, key or label. Strategies run in a
//! fixed order and the first hit wins; a numeral string gets one more chance
//! against numeric values after the direct matches fail.
use crate::node::Node;
use crate::util::{property_name, strict_eq};
use serde_json::Value;

/// Position of the node `selector` names, if any.
pub fn resolve(nodes: &[Node], selector: &Value) -> Option<usize> {
    if is_absent(selector) {
        return None;
    }
    find(nodes, selector, Node::value)
        .or_else(|| find(nodes, selector, Node::key))
        .or_else(|| find(nodes, selector, Node::label))
        .or_else(|| {
            let parsed = Value::from(parse_int(selector)?);
            find(nodes, &parsed, Node::value).or_else(|| find(nodes, &parsed, Node::key))
        })
}

fn find(nodes: &[Node], selector: &Value, field: fn(&Node) -> &Value) -> Option<usize> {
    nodes.iter().position(|node| strict_eq(field(node), selector))
}

/// Selectors that name nothing: null, `false`, the empty string, and
/// anything that is neither a string nor a number. `0` is a real selector.
pub fn is_absent(selector: &Value) -> bool {
    match selector {
        Value::String(text) => text.is_empty(),
        Value::Number(_) => false,
        _ => true,
    }
}

/// Leading base-10 integer of the selector's text, if it has one.
///
/// Leading whitespace and a sign are accepted and trailing garbage is
/// ignored, so `" 31px"` parses as `31` while `"px31"` does not parse.
pub fn parse_int(selector: &Value) -> Option<i64> {
    let text = match selector {
        Value::String(text) => text.clone(),
        Value::Number(_) => property_name(selector),
        _ => return None,
    };
    let trimmed = text.trim_start();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    let magnitude: i64 = rest[..digits_len].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
#[path = "resolve_tests.rs"]
mod tests;
