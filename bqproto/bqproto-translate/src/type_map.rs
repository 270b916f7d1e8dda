use bqproto_core::WireType;

/// Scalar column types and their wire types. Lookups are case-sensitive.
///
/// The wire format has no decimal, date or geography types; those travel as
/// their string form. `BIGNUMERIC` maps to `double` and loses precision.
pub static SCALAR_TYPES: &[(&str, WireType)] = &[
    ("STRING", WireType::String),
    ("BYTES", WireType::Bytes),
    ("INTEGER", WireType::Int64),
    ("INT64", WireType::Int64),
    ("FLOAT", WireType::Double),
    ("FLOAT64", WireType::Double),
    ("BOOLEAN", WireType::Bool),
    ("BOOL", WireType::Bool),
    ("TIMESTAMP", WireType::Int64),
    ("DATE", WireType::String),
    ("TIME", WireType::String),
    ("DATETIME", WireType::String),
    ("GEOGRAPHY", WireType::String),
    ("NUMERIC", WireType::String),
    ("BIGNUMERIC", WireType::Double),
    ("JSON", WireType::String),
];

/// Wire type for a scalar column type, or `None` for `RECORD` and unknown types.
pub fn scalar_wire_type(type_name: &str) -> Option<WireType> {
    SCALAR_TYPES
        .iter()
        .find(|(name, _)| *name == type_name)
        .map(|(_, wire)| *wire)
}
