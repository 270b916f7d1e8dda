//! Error types for schema translation.

/// Error returned when a table schema cannot be translated into a protobuf
/// message tree.
///
/// Column locations are dotted paths from the top-level column list
/// (e.g. `schedule.start_date`). Columns without a usable name are addressed
/// by their index (e.g. `schedule[1]`).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslateError {
    /// The column's `type` is neither a known scalar type nor `RECORD`.
    #[error("unknown type '{type_name}' for column '{column}'")]
    UnknownType { type_name: String, column: String },

    /// The column tree is structurally invalid (missing name or type, `RECORD`
    /// without sub-fields, names colliding within one message).
    #[error("malformed schema at '{path}': {detail}")]
    MalformedSchema { path: String, detail: String },
}

impl TranslateError {
    pub fn unknown_type(type_name: impl Into<String>, column: impl Into<String>) -> Self {
        Self::UnknownType {
            type_name: type_name.into(),
            column: column.into(),
        }
    }

    pub fn malformed(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::MalformedSchema {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
