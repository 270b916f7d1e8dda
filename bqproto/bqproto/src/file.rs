//! File boundary: JSON schema in, `.proto` document out.

use std::{
    fs,
    path::{Path, PathBuf},
};

use bqproto_core::{ProtoDocument, TableSchema};
use tracing::debug;

use crate::SchemaFileError;

const SCHEMA_EXTENSION: &str = "json";

/// Entity name of a schema file: its stem (`misc/schemas/students.json` →
/// `students`).
pub fn entity_name_from_path(path: &Path) -> Result<String, SchemaFileError> {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .filter(|stem| !stem.is_empty())
        .map(str::to_string)
        .ok_or_else(|| SchemaFileError::EntityName {
            path: path.display().to_string(),
        })
}

/// Read and parse a JSON schema export. The path must be an existing regular
/// file with a `.json` extension.
pub fn read_table_schema(path: &Path) -> Result<TableSchema, SchemaFileError> {
    let is_schema_file =
        path.is_file() && path.extension().is_some_and(|ext| ext == SCHEMA_EXTENSION);
    if !is_schema_file {
        return Err(SchemaFileError::SchemaFileNotFound {
            path: path.display().to_string(),
        });
    }

    debug!(path = %path.display(), "reading table schema");
    let text = fs::read_to_string(path).map_err(|source| SchemaFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| SchemaFileError::Json {
        path: path.display().to_string(),
        source,
    })
}

/// A translated schema file together with the entity name taken from its
/// stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaDocument {
    pub entity_name: String,
    pub document: ProtoDocument,
}

/// Read a schema file and translate it, naming the message after the file
/// stem.
pub fn translate_schema_file(path: &Path) -> Result<SchemaDocument, SchemaFileError> {
    let entity_name = entity_name_from_path(path)?;
    let schema = read_table_schema(path)?;
    let document = bqproto_translate::translate_schema(&entity_name, &schema).map_err(
        |source| SchemaFileError::Translate {
            path: path.display().to_string(),
            source,
        },
    )?;
    Ok(SchemaDocument {
        entity_name,
        document,
    })
}

/// Write `contents` to `path`, creating missing parent directories.
pub fn write_document(path: &Path, contents: impl AsRef<[u8]>) -> Result<(), SchemaFileError> {
    let io_error = |source| SchemaFileError::Io {
        path: path.display().to_string(),
        source,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(io_error)?;
    }
    debug!(path = %path.display(), "writing document");
    fs::write(path, contents).map_err(io_error)
}

/// Translate the schema at `input` and write the `.proto` text to `output`.
///
/// Nothing is written when translation fails.
pub fn generate_proto_file(input: &Path, output: &Path) -> Result<SchemaDocument, SchemaFileError> {
    let translated = translate_schema_file(input)?;
    write_document(output, translated.document.to_string())?;
    Ok(translated)
}

/// `.json` files directly inside `dir`, sorted by path.
pub fn schema_files_in_dir(dir: &Path) -> Result<Vec<PathBuf>, SchemaFileError> {
    let io_error = |source| SchemaFileError::Io {
        path: dir.display().to_string(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_error)? {
        let path = entry.map_err(io_error)?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == SCHEMA_EXTENSION) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
