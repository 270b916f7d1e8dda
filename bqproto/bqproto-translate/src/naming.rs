/// Prefix of every top-level message name.
pub const MESSAGE_PREFIX: &str = "Raw";

/// Name of the message generated for a `RECORD` column: the column name with
/// its first character upper-cased. Nothing else is normalized, so
/// `contact_info` becomes `Contact_info`.
pub fn nested_message_name(column_name: &str) -> String {
    let mut chars = column_name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Top-level message name for an entity: `student_record` → `RawStudentRecord`.
///
/// Each underscore-separated segment gets its first character upper-cased;
/// empty segments are dropped.
pub fn entity_message_name(entity_name: &str) -> String {
    let mut name = String::from(MESSAGE_PREFIX);
    for segment in entity_name.split('_').filter(|s| !s.is_empty()) {
        name.push_str(&nested_message_name(segment));
    }
    name
}
