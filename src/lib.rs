//! Enum lookup tables built from loosely shaped input.
//!
//! An enum is declared as a list of labels, a mapping of codes to labels, or
//! a list (or mapping) of full records. Every entry is normalized into a
//! [`Node`] with a `key`, a `value` and a `label`, and the resulting
//! [`EnumTable`] resolves any of the three back to the node.
//!
//! ```
//! use serde_json::json;
//! use super_enum::build_enum_json;
//!
//! let days = build_enum_json(json!(["Sunday", "Monday", "Tuesday"])).unwrap();
//! assert_eq!(days.value("monday"), Some(json!(1)));
//! assert_eq!(days.label(2), Some(json!("Tuesday")));
//! assert_eq!(days["tuesday"].value(), &json!(2));
//! ```
mod auto_value;
pub mod builder;
pub mod catalog;
pub mod input;
pub mod key;
pub mod node;
pub mod resolve;
pub mod table;
pub mod util;

pub use builder::{build_enum, build_enum_json, EnumBuilder};
pub use catalog::EnumCatalog;
pub use input::{input_shape_failure, EnumInput, Entry, InputShapeError, Record};
pub use key::to_key;
pub use node::{Field, Node};
pub use table::EnumTable;
