//! Generate protobuf definitions from warehouse table schema files.
//!
//! [`generate_proto`] is the pure text entry point. The file helpers in this
//! crate are the only place that touches the filesystem: they read a JSON
//! schema export, derive the entity name from its file stem, and write the
//! generated document.

mod error;
mod file;

use bqproto_core::{ColumnDef, TranslateError};

pub use bqproto_core as core;
#[cfg(feature = "descriptor")]
pub use bqproto_descriptor as descriptor;
pub use bqproto_translate as translate;
pub use error::SchemaFileError;
pub use file::{
    SchemaDocument, entity_name_from_path, generate_proto_file, read_table_schema,
    schema_files_in_dir, translate_schema_file, write_document,
};

/// Translate `columns` and render the `.proto` document for `entity_name`.
pub fn generate_proto(entity_name: &str, columns: &[ColumnDef]) -> Result<String, TranslateError> {
    let doc = bqproto_translate::translate_schema(entity_name, columns)?;
    Ok(doc.to_string())
}
