//! Table schema → protobuf message translation.
//!
//! [`translate_schema`] is the entry point: it turns the top-level columns of
//! a table into a [`ProtoDocument`](bqproto_core::ProtoDocument) whose outer
//! message is named `Raw<EntityName>`. Field numbers are assigned by position,
//! starting at 1 in every message, so reordering columns renumbers fields.
//!
//! ```rust
//! use bqproto_core::ColumnDef;
//! use bqproto_translate::translate_schema;
//!
//! let columns = vec![ColumnDef::new("class_id", "INTEGER")];
//! let doc = translate_schema("classes", &columns).unwrap();
//! assert_eq!(doc.message.name, "RawClasses");
//! ```

mod naming;
mod translate;
mod type_map;

pub use naming::{MESSAGE_PREFIX, entity_message_name, nested_message_name};
pub use translate::{translate_field, translate_message, translate_schema};
pub use type_map::{SCALAR_TYPES, scalar_wire_type};
