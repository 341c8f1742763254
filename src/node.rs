//! Normalized enum entries.
//!
//! A node always carries `key`, `value` and `label`; anything else the input
//! declared rides along as an extra field, either literal or derived.
use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Zero-argument producer for a derived field.
pub type DerivedFn = Arc<dyn Fn() -> Value + Send + Sync>;

/// Extra field carried by a node.
#[derive(Clone)]
pub enum Field {
    Literal(Value),
    /// Evaluated on every read.
    Derived(DerivedFn),
}

impl Field {
    pub fn derived<F>(producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        Field::Derived(Arc::new(producer))
    }

    /// Read the field, invoking the producer of a derived field.
    pub fn resolve(&self) -> Value {
        match self {
            Field::Literal(value) => value.clone(),
            Field::Derived(producer) => producer(),
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Literal(value) => f.debug_tuple("Literal").field(value).finish(),
            Field::Derived(_) => f.write_str("Derived(..)"),
        }
    }
}

impl From<Value> for Field {
    fn from(value: Value) -> Self {
        Field::Literal(value)
    }
}

/// One entry of an enum table.
#[derive(Debug, Clone)]
pub struct Node {
    key: Value,
    value: Value,
    label: Value,
    extra: IndexMap<String, Field>,
}

impl Node {
    pub(crate) fn new(
        key: Value,
        value: Value,
        label: Value,
        extra: IndexMap<String, Field>,
    ) -> Self {
        Self {
            key,
            value,
            label,
            extra,
        }
    }

    pub fn key(&self) -> &Value {
        &self.key
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn label(&self) -> &Value {
        &self.label
    }

    /// Read a field by name; derived fields are invoked.
    pub fn field(&self, name: &str) -> Option<Value> {
        match name {
            "key" => Some(self.key.clone()),
            "value" => Some(self.value.clone()),
            "label" => Some(self.label.clone()),
            other => self.extra.get(other).map(Field::resolve),
        }
    }

    /// Snapshot of the node as a JSON object, with derived fields evaluated.
    /// Extra fields follow the core three in declaration order.
    pub fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert("key".to_string(), self.key.clone());
        object.insert("value".to_string(), self.value.clone());
        object.insert("label".to_string(), self.label.clone());
        for (name, field) in &self.extra {
            object.insert(name.clone(), field.resolve());
        }
        Value::Object(object)
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(3 + self.extra.len()))?;
        map.serialize_entry("key", &self.key)?;
        map.serialize_entry("value", &self.value)?;
        map.serialize_entry("label", &self.label)?;
        for (name, field) in &self.extra {
            map.serialize_entry(name, &field.resolve())?;
        }
        map.end()
    }
}
