//! Error types for schema file handling.

use bqproto_core::TranslateError;

/// Errors produced while reading, translating or writing schema files.
#[derive(Debug, thiserror::Error)]
pub enum SchemaFileError {
    /// The path does not name an existing `.json` file.
    #[error("schema file not found: {path}")]
    SchemaFileNotFound { path: String },

    /// The file stem is empty or not valid UTF-8.
    #[error("cannot derive an entity name from '{path}'")]
    EntityName { path: String },

    /// Reading an input or writing an output failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The schema file is not a JSON column list.
    #[error("failed to parse schema '{path}': {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// The schema parsed but could not be translated.
    #[error("failed to translate schema '{path}': {source}")]
    Translate {
        path: String,
        #[source]
        source: TranslateError,
    },
}
