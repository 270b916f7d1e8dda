use std::fmt::{Error, Result, Write as _};

use super::{FieldType, ProtoDocument, ProtoField, ProtoMessage};

const INDENT: &str = "    ";

/// Render a document as `.proto` text:
/// the syntax header, a blank line, then the top-level message.
/// The output ends with a newline.
pub fn format_proto_document(doc: &ProtoDocument) -> std::result::Result<String, Error> {
    let mut out = String::new();
    writeln!(out, "syntax = \"{}\";", doc.syntax)?;
    writeln!(out)?;
    format_message(&doc.message, 0, &mut out)?;
    Ok(out)
}

/// Render a single message block at top level.
pub fn format_proto_message(message: &ProtoMessage) -> std::result::Result<String, Error> {
    let mut out = String::new();
    format_message(message, 0, &mut out)?;
    Ok(out)
}

fn format_message(message: &ProtoMessage, depth: usize, out: &mut String) -> Result {
    let pad = INDENT.repeat(depth);
    writeln!(out, "{pad}message {} {{", message.name)?;
    for field in &message.fields {
        format_field(field, depth + 1, out)?;
    }
    writeln!(out, "{pad}}}")
}

// A nested message is declared at the field's depth, right before the field.
fn format_field(field: &ProtoField, depth: usize, out: &mut String) -> Result {
    if let FieldType::Message(nested) = &field.field_type {
        format_message(nested, depth, out)?;
    }

    let pad = INDENT.repeat(depth);
    let label = if field.label.is_repeated() {
        "repeated "
    } else {
        ""
    };
    writeln!(
        out,
        "{pad}{label}{} {} = {};",
        field.field_type.type_name(),
        field.name,
        field.number
    )
}
