use std::fmt::{Display, Formatter, Result};

/// Syntax literal written in the header of every generated document.
pub const PROTO3_SYNTAX: &str = "proto3";

/// Scalar wire types a column can be mapped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WireType {
    String,
    Bytes,
    Int64,
    Double,
    Bool,
}

impl WireType {
    /// Type keyword as written in `.proto` text.
    pub fn type_name(&self) -> &'static str {
        match self {
            WireType::String => "string",
            WireType::Bytes => "bytes",
            WireType::Int64 => "int64",
            WireType::Double => "double",
            WireType::Bool => "bool",
        }
    }
}

impl Display for WireType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.type_name())
    }
}

/// Field cardinality. proto3 has no presence tracking beyond repetition, so
/// `NULLABLE` and `REQUIRED` columns both end up [`Label::Singular`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Label {
    #[default]
    Singular,
    Repeated,
}

impl Label {
    pub fn is_repeated(&self) -> bool {
        matches!(self, Label::Repeated)
    }
}

/// Type of a message field: a scalar, or a message declared inline right
/// before the field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldType {
    Scalar(WireType),
    Message(ProtoMessage),
}

impl FieldType {
    /// Name used on the field line (`int64`, `Schedule`, ...).
    pub fn type_name(&self) -> &str {
        match self {
            FieldType::Scalar(wire) => wire.type_name(),
            FieldType::Message(message) => &message.name,
        }
    }

    pub fn as_message(&self) -> Option<&ProtoMessage> {
        match self {
            FieldType::Message(message) => Some(message),
            FieldType::Scalar(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoField {
    pub name: String,
    pub number: u32,
    pub label: Label,
    pub field_type: FieldType,
}

impl ProtoField {
    pub fn new(name: impl Into<String>, number: u32, label: Label, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            number,
            label,
            field_type,
        }
    }
}

/// A named message. Field numbers are scoped to the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoMessage {
    pub name: String,
    pub fields: Vec<ProtoField>,
}

impl ProtoMessage {
    pub fn new(name: impl Into<String>, fields: Vec<ProtoField>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn field(&self, name: &str) -> Option<&ProtoField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Messages declared directly inside this one, in declaration order.
    pub fn nested_messages(&self) -> impl Iterator<Item = &ProtoMessage> {
        self.fields.iter().filter_map(|f| f.field_type.as_message())
    }
}

impl Display for ProtoMessage {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_proto_message(self)?;
        f.write_str(&text)
    }
}

/// A complete `.proto` document holding a single top-level message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtoDocument {
    pub syntax: &'static str,
    pub message: ProtoMessage,
}

impl ProtoDocument {
    pub fn new(message: ProtoMessage) -> Self {
        Self {
            syntax: PROTO3_SYNTAX,
            message,
        }
    }
}

impl Display for ProtoDocument {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = super::format_proto_document(self)?;
        f.write_str(&text)
    }
}
