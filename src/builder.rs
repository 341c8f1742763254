//! Normalization of raw input into an [`EnumTable`].
//!
//! Building never fails on a bad entry: anything that is not a label, a
//! number or a record is skipped. The only hard failure is a top-level JSON
//! document that is neither a sequence nor a mapping.
use crate::auto_value::AutoValue;
use crate::input::{EnumInput, Entry, Record};
use crate::key::{key_for, to_key};
use crate::node::Node;
use crate::table::EnumTable;
use crate::util::{json_kind, property_name};
use anyhow::Result;
use serde_json::Value;

/// Turns one input collection into one table.
pub struct EnumBuilder {
    input: EnumInput,
    auto: AutoValue,
}

impl EnumBuilder {
    pub fn new(input: EnumInput) -> Self {
        let auto = AutoValue::scan(&input);
        Self { input, auto }
    }

    pub fn build(self) -> EnumTable {
        let EnumBuilder { input, mut auto } = self;
        let mut table = EnumTable::default();
        for (position, entry) in input.into_positioned() {
            let Some(record) = partial_record(&position, entry) else {
                continue;
            };
            let node = complete(record, &mut auto);
            table.register(node);
        }
        tracing::debug!(nodes = table.len(), "enum built");
        table
    }
}

/// Wrap bare labels and numbers as records; `None` for skipped entries.
fn partial_record(position: &Value, entry: Entry) -> Option<Record> {
    match entry {
        Entry::Label(label) => Some(Record::new().value(position.clone()).label(label)),
        Entry::Number(number) => Some(Record::new().value(number).label(position.clone())),
        Entry::Record(record) => Some(record),
        Entry::Other(other) => {
            tracing::debug!(
                position = %property_name(position),
                kind = json_kind(&other),
                "skipping enum entry"
            );
            None
        }
    }
}

/// Fill in `value`, then `key`, then `label`, in that order.
fn complete(record: Record, auto: &mut AutoValue) -> Node {
    let Record {
        key,
        value,
        label,
        extra,
    } = record;
    let value = value.unwrap_or_else(|| {
        let assigned = auto.next();
        tracing::debug!(value = %assigned, "assigned automatic enum value");
        assigned
    });
    auto.observe(&value);
    let key = key.unwrap_or_else(|| {
        Value::String(match &label {
            Some(Value::String(text)) => to_key(text),
            _ => key_for(&value),
        })
    });
    let label = label.unwrap_or_else(|| key.clone());
    Node::new(key, value, label, extra)
}

/// Build a table from classified input.
pub fn build_enum(input: EnumInput) -> EnumTable {
    EnumBuilder::new(input).build()
}

/// Build a table from a JSON sequence or mapping.
pub fn build_enum_json(value: Value) -> Result<EnumTable> {
    Ok(build_enum(EnumInput::from_json(value)?))
}

#[cfg(test)]
#[path = "builder_tests.rs"]
mod tests;
