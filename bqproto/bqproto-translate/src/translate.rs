//! Recursive column tree → message tree translation.

use std::collections::HashMap;

use bqproto_core::{
    ColumnDef, FieldType, Label, ProtoDocument, ProtoField, ProtoMessage, RECORD_TYPE,
    TranslateError,
};
use tracing::{debug, trace};

use crate::{entity_message_name, nested_message_name, scalar_wire_type};

/// Translate the top-level columns of `entity_name` into a document whose
/// message is named `Raw<EntityName>`.
///
/// Any error aborts the whole translation; no partial document is returned.
pub fn translate_schema(
    entity_name: &str,
    columns: &[ColumnDef],
) -> Result<ProtoDocument, TranslateError> {
    let message_name = entity_message_name(entity_name);
    debug!(
        entity = entity_name,
        message = %message_name,
        columns = columns.len(),
        "translating table schema"
    );
    let message = translate_message(columns, &message_name, "")?;
    Ok(ProtoDocument::new(message))
}

/// Translate `columns` into a message named `message_name`.
///
/// Each column gets its 1-based position as field number. `path` locates the
/// message in the source schema and is only used in error reports; it is
/// empty for the top-level message.
///
/// Field names and nested message names share one namespace per message; any
/// symbol claimed twice is rejected, including a `RECORD` column whose name
/// already starts with an upper-case letter.
pub fn translate_message(
    columns: &[ColumnDef],
    message_name: &str,
    path: &str,
) -> Result<ProtoMessage, TranslateError> {
    // symbol -> (position, path) of the column that declared it
    let mut symbols: HashMap<String, (usize, String)> = HashMap::new();
    let mut fields = Vec::with_capacity(columns.len());

    for (index, column) in columns.iter().enumerate() {
        let field = translate_field(column, index as u32 + 1, path)?;
        let column_path = join_path(path, &field.name);

        let mut claimed = vec![field.name.clone()];
        if let FieldType::Message(nested) = &field.field_type {
            claimed.push(nested.name.clone());
        }
        for symbol in claimed {
            if let Some((owner, owner_path)) = symbols.get(&symbol) {
                let detail = if *owner == index {
                    format!("nested message '{symbol}' has the same name as its field")
                } else {
                    format!(
                        "'{symbol}' is already defined by column '{owner_path}' in message '{message_name}'"
                    )
                };
                return Err(TranslateError::malformed(column_path, detail));
            }
            symbols.insert(symbol, (index, column_path.clone()));
        }

        fields.push(field);
    }

    Ok(ProtoMessage::new(message_name, fields))
}

/// Translate one column into a field numbered `field_number`.
///
/// `REPEATED` columns become repeated fields; every other mode is singular.
/// `RECORD` columns produce a nested message named after the column (first
/// character upper-cased) whose own numbering restarts at 1. Scalar types go
/// through [`SCALAR_TYPES`](crate::SCALAR_TYPES).
pub fn translate_field(
    column: &ColumnDef,
    field_number: u32,
    path: &str,
) -> Result<ProtoField, TranslateError> {
    let name = match column.name.as_deref() {
        Some(name) if !name.is_empty() => name,
        _ => {
            let position = format!("{path}[{}]", field_number.saturating_sub(1));
            return Err(TranslateError::malformed(position, "column has no name"));
        }
    };
    let column_path = join_path(path, name);

    if field_number == 0 {
        return Err(TranslateError::malformed(column_path, "field numbers start at 1"));
    }

    let type_name = column
        .type_name
        .as_deref()
        .ok_or_else(|| TranslateError::malformed(&column_path, "column has no type"))?;

    let label = if column.is_repeated() {
        Label::Repeated
    } else {
        Label::Singular
    };

    let field_type = if type_name == RECORD_TYPE {
        let children = match column.fields.as_deref() {
            Some(children) if !children.is_empty() => children,
            _ => {
                return Err(TranslateError::malformed(
                    column_path,
                    "RECORD column has no fields",
                ));
            }
        };
        let message_name = nested_message_name(name);
        trace!(column = %column_path, message = %message_name, "nested message");
        FieldType::Message(translate_message(children, &message_name, &column_path)?)
    } else {
        let wire = scalar_wire_type(type_name)
            .ok_or_else(|| TranslateError::unknown_type(type_name, &column_path))?;
        trace!(column = %column_path, wire = %wire, "scalar field");
        FieldType::Scalar(wire)
    };

    Ok(ProtoField::new(name, field_number, label, field_type))
}

fn join_path(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_string()
    } else {
        format!("{parent}.{name}")
    }
}
