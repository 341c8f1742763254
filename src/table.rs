//! The built enum and its read-only query surface.
use crate::node::Node;
use crate::resolve::resolve;
use crate::util::property_name;
use serde::ser::{Serialize, Serializer};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::ops::Index;

/// Enum lookup table.
///
/// Nodes keep input order. Besides selector lookups, every node is reachable
/// by member name: its key always, and its value when the value is a string
/// or number. Members share one namespace and later registrations win, while
/// `by_key` and `by_value` keep the two kinds of names apart.
#[derive(Debug, Clone, Default)]
pub struct EnumTable {
    nodes: Vec<Node>,
    by_key: HashMap<String, usize>,
    by_value: HashMap<String, usize>,
    members: HashMap<String, usize>,
}

impl EnumTable {
    /// Append a node and bind its member names.
    pub(crate) fn register(&mut self, node: Node) -> usize {
        let index = self.nodes.len();
        let key_name = property_name(node.key());
        self.bind_key(key_name, index);
        if matches!(node.value(), Value::String(_) | Value::Number(_)) {
            self.bind_value(property_name(node.value()), index);
        }
        self.nodes.push(node);
        index
    }

    fn bind_key(&mut self, name: String, index: usize) {
        if let Some(previous) = self.by_key.insert(name.clone(), index) {
            tracing::debug!(member = %name, previous, index, "enum key rebound");
        }
        self.members.insert(name, index);
    }

    fn bind_value(&mut self, name: String, index: usize) {
        if let Some(previous) = self.by_value.insert(name.clone(), index) {
            tracing::debug!(member = %name, previous, index, "enum value rebound");
        }
        self.members.insert(name, index);
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.nodes.iter()
    }

    /// Position of the node a selector resolves to.
    pub fn position(&self, selector: impl Into<Value>) -> Option<usize> {
        resolve(&self.nodes, &selector.into())
    }

    /// Whole node for a selector.
    pub fn get(&self, selector: impl Into<Value>) -> Option<&Node> {
        self.position(selector).map(|index| &self.nodes[index])
    }

    /// One field of the node a selector resolves to; derived fields are
    /// invoked. `None` when nothing resolves or the node lacks the field.
    pub fn get_field(&self, selector: impl Into<Value>, field: &str) -> Option<Value> {
        self.get(selector)?.field(field)
    }

    pub fn get_or(
        &self,
        selector: impl Into<Value>,
        field: &str,
        default: impl Into<Value>,
    ) -> Value {
        self.get_field(selector, field).unwrap_or_else(|| default.into())
    }

    pub fn value(&self, selector: impl Into<Value>) -> Option<Value> {
        self.get_field(selector, "value")
    }

    pub fn value_or(&self, selector: impl Into<Value>, default: impl Into<Value>) -> Value {
        self.get_or(selector, "value", default)
    }

    pub fn label(&self, selector: impl Into<Value>) -> Option<Value> {
        self.get_field(selector, "label")
    }

    pub fn label_or(&self, selector: impl Into<Value>, default: impl Into<Value>) -> Value {
        self.get_or(selector, "label", default)
    }

    pub fn keys(&self) -> Vec<Value> {
        self.nodes.iter().map(|node| node.key().clone()).collect()
    }

    pub fn values(&self) -> Vec<Value> {
        self.nodes.iter().map(|node| node.value().clone()).collect()
    }

    pub fn labels(&self) -> Vec<Value> {
        self.nodes.iter().map(|node| node.label().clone()).collect()
    }

    /// Value to label, in table order. A repeated value keeps its first
    /// position but takes the later label.
    pub fn options(&self) -> Map<String, Value> {
        let mut options = Map::new();
        for node in &self.nodes {
            options.insert(property_name(node.value()), node.label().clone());
        }
        options
    }

    pub fn by_key(&self, key: &str) -> Option<&Node> {
        self.by_key.get(key).map(|&index| &self.nodes[index])
    }

    /// Node registered under a value; `1` and `"1"` name the same member.
    pub fn by_value(&self, value: impl Into<Value>) -> Option<&Node> {
        self.by_value
            .get(&property_name(&value.into()))
            .map(|&index| &self.nodes[index])
    }

    /// Node registered under a member name, key or value alike.
    pub fn member(&self, name: impl Into<Value>) -> Option<&Node> {
        self.members
            .get(&property_name(&name.into()))
            .map(|&index| &self.nodes[index])
    }
}

impl Index<&str> for EnumTable {
    type Output = Node;

    fn index(&self, name: &str) -> &Node {
        match self.members.get(name) {
            Some(&index) => &self.nodes[index],
            None => panic!("no enum member named {name:?}"),
        }
    }
}

impl<'a> IntoIterator for &'a EnumTable {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl Serialize for EnumTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(&self.nodes)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
