//! Input shapes accepted by the enum builder.
//!
//! Shapes are classified once, up front: the top level is a sequence or a
//! mapping, and each entry is a label, a number, a record, or something the
//! builder will skip.
use crate::node::Field;
use crate::util::json_kind;
use anyhow::Result;
use indexmap::IndexMap;
use serde_json::{Map, Number, Value};
use std::fmt;

/// Raised when the top-level input is neither a sequence nor a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputShapeError {
    found: &'static str,
}

impl InputShapeError {
    pub fn found(&self) -> &'static str {
        self.found
    }
}

impl fmt::Display for InputShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "enum input must be a sequence or a mapping (got {})",
            self.found
        )
    }
}

impl std::error::Error for InputShapeError {}

/// Find an invalid-shape failure anywhere in an error chain.
pub fn input_shape_failure(err: &anyhow::Error) -> Option<&InputShapeError> {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<InputShapeError>())
}

/// Partially specified node; missing fields are synthesized by the builder.
#[derive(Debug, Clone, Default)]
pub struct Record {
    pub key: Option<Value>,
    pub value: Option<Value>,
    pub label: Option<Value>,
    /// Extra fields in declaration order.
    pub extra: IndexMap<String, Field>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key(mut self, key: impl Into<Value>) -> Self {
        self.key = Some(key.into());
        self
    }

    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn label(mut self, label: impl Into<Value>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Attach a literal field. `key`, `value` and `label` land in their slots.
    pub fn field(mut self, name: &str, value: impl Into<Value>) -> Self {
        let value = value.into();
        match name {
            "key" => self.key = Some(value),
            "value" => self.value = Some(value),
            "label" => self.label = Some(value),
            _ => {
                self.extra.insert(name.to_string(), Field::Literal(value));
            }
        }
        self
    }

    /// Attach a field computed on every read.
    ///
    /// `key`, `value` and `label` are lookup slots and cannot be lazy: for
    /// those names the producer runs once, here, and the result fills the
    /// slot exactly as [`Record::field`] would.
    pub fn derived<F>(mut self, name: &str, producer: F) -> Self
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        if matches!(name, "key" | "value" | "label") {
            return self.field(name, producer());
        }
        self.extra.insert(name.to_string(), Field::derived(producer));
        self
    }

    pub fn from_map(map: Map<String, Value>) -> Self {
        map.into_iter()
            .fold(Record::new(), |record, (name, value)| record.field(&name, value))
    }

    /// Numeric `value` declared by the record itself.
    pub(crate) fn explicit_number(&self) -> Option<&Number> {
        match &self.value {
            Some(Value::Number(number)) => Some(number),
            _ => None,
        }
    }
}

/// One input entry after classification.
#[derive(Debug, Clone)]
pub enum Entry {
    /// Bare string: becomes the label, its position becomes the value.
    Label(String),
    /// Bare number: becomes the value, its position becomes the label.
    Number(Number),
    Record(Record),
    /// Anything else; skipped during build.
    Other(Value),
}

impl Entry {
    pub fn classify(value: Value) -> Self {
        match value {
            Value::String(label) => Entry::Label(label),
            Value::Number(number) => Entry::Number(number),
            Value::Object(map) => Entry::Record(Record::from_map(map)),
            other => Entry::Other(other),
        }
    }

    /// Numeric value this entry declares before any normalization.
    pub(crate) fn explicit_number(&self) -> Option<&Number> {
        match self {
            Entry::Number(number) => Some(number),
            Entry::Record(record) => record.explicit_number(),
            Entry::Label(_) | Entry::Other(_) => None,
        }
    }
}

impl From<Record> for Entry {
    fn from(record: Record) -> Self {
        Entry::Record(record)
    }
}

impl From<&str> for Entry {
    fn from(label: &str) -> Self {
        Entry::Label(label.to_string())
    }
}

impl From<String> for Entry {
    fn from(label: String) -> Self {
        Entry::Label(label)
    }
}

impl From<Value> for Entry {
    fn from(value: Value) -> Self {
        Entry::classify(value)
    }
}

/// Top-level input collection.
#[derive(Debug, Clone)]
pub enum EnumInput {
    /// Positions become the fallback value (labels) or label (numbers).
    Sequence(Vec<Entry>),
    /// Codes become the fallback value (labels) or label (numbers).
    Mapping(Vec<(Value, Entry)>),
}

impl EnumInput {
    /// `["Sunday", "Monday", ...]`
    pub fn labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        EnumInput::Sequence(
            labels
                .into_iter()
                .map(|label| Entry::Label(label.into()))
                .collect(),
        )
    }

    /// `{"su": "Sunday", "mo": "Monday", ...}`
    pub fn codes<I, C, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = (C, S)>,
        C: Into<Value>,
        S: Into<String>,
    {
        EnumInput::Mapping(
            codes
                .into_iter()
                .map(|(code, label)| (code.into(), Entry::Label(label.into())))
                .collect(),
        )
    }

    pub fn records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = Record>,
    {
        EnumInput::Sequence(records.into_iter().map(Entry::Record).collect())
    }

    /// Mapping of name to full record.
    pub fn keyed_records<I, K>(records: I) -> Self
    where
        I: IntoIterator<Item = (K, Record)>,
        K: Into<String>,
    {
        EnumInput::Mapping(
            records
                .into_iter()
                .map(|(name, record)| (Value::String(name.into()), Entry::Record(record)))
                .collect(),
        )
    }

    /// Classify a JSON document. Arrays are sequences, objects are mappings.
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Array(items) => Ok(EnumInput::Sequence(
                items.into_iter().map(Entry::classify).collect(),
            )),
            Value::Object(map) => Ok(EnumInput::Mapping(
                map.into_iter()
                    .map(|(code, item)| (Value::String(code), Entry::classify(item)))
                    .collect(),
            )),
            other => Err(InputShapeError {
                found: json_kind(&other),
            }
            .into()),
        }
    }

    pub(crate) fn entries(&self) -> Box<dyn Iterator<Item = &Entry> + '_> {
        match self {
            EnumInput::Sequence(entries) => Box::new(entries.iter()),
            EnumInput::Mapping(entries) => Box::new(entries.iter().map(|(_, entry)| entry)),
        }
    }

    /// Entries paired with their position (sequences) or code (mappings).
    pub(crate) fn into_positioned(self) -> Vec<(Value, Entry)> {
        match self {
            EnumInput::Sequence(entries) => entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| (Value::from(index), entry))
                .collect(),
            EnumInput::Mapping(entries) => entries,
        }
    }
}

#[cfg(test)]
#[path = "input_tests.rs"]
mod tests;
