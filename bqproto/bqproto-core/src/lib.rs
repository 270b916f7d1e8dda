//! Core types shared by the `bqproto` crates.
//!
//! This crate holds both sides of the translation:
//! - the warehouse table schema as it appears in a JSON schema export
//!   ([`TableSchema`] / [`ColumnDef`]),
//! - the protobuf message tree produced from it ([`ProtoDocument`] /
//!   [`ProtoMessage`] / [`ProtoField`]),
//!
//! plus the `.proto` text renderer and the [`TranslateError`] taxonomy.

mod column;
mod error;
mod proto;

pub use column::{ColumnDef, RECORD_TYPE, REPEATED_MODE, TableSchema};
pub use error::TranslateError;
pub use proto::{
    FieldType, Label, PROTO3_SYNTAX, ProtoDocument, ProtoField, ProtoMessage, WireType,
    format_proto_document, format_proto_message,
};
