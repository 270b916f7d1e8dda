use bqproto_core::{ColumnDef, TableSchema};

#[test]
fn parses_column_array_with_nested_record() -> Result<(), serde_json::Error> {
    let json = r#"[
        {"name": "class_id", "type": "INTEGER", "mode": "REQUIRED"},
        {"name": "schedule", "type": "RECORD", "mode": "REPEATED",
         "fields": [{"name": "start_date", "type": "DATE"}]}
    ]"#;

    let schema: TableSchema = serde_json::from_str(json)?;

    assert_eq!(schema.len(), 2);
    assert_eq!(schema[0], ColumnDef::new("class_id", "INTEGER").with_mode("REQUIRED"));
    assert_eq!(
        schema[1],
        ColumnDef::record("schedule", vec![ColumnDef::new("start_date", "DATE")]).repeated()
    );
    assert!(schema[1].is_record());
    assert!(schema[1].is_repeated());
    assert!(!schema[0].is_repeated());
    Ok(())
}

#[test]
fn parses_table_resource_shape() -> Result<(), serde_json::Error> {
    let json = r#"{"fields": [{"name": "id", "type": "STRING"}]}"#;

    let schema: TableSchema = serde_json::from_str(json)?;

    assert_eq!(schema.as_slice(), &[ColumnDef::new("id", "STRING")]);
    Ok(())
}

#[test]
fn ignores_unknown_keys_and_keeps_missing_ones_empty() -> Result<(), serde_json::Error> {
    let json = r#"[
        {"name": "note", "type": "STRING", "description": "free text", "maxLength": "64"},
        {"type": "INT64"}
    ]"#;

    let schema: TableSchema = serde_json::from_str(json)?;

    assert_eq!(schema[0], ColumnDef::new("note", "STRING"));
    assert_eq!(schema[1].name, None);
    assert_eq!(schema[1].type_name.as_deref(), Some("INT64"));
    assert_eq!(schema[1].fields, None);
    Ok(())
}

#[test]
fn mode_comparison_is_case_sensitive() {
    assert!(ColumnDef::new("tags", "STRING").with_mode("REPEATED").is_repeated());
    assert!(!ColumnDef::new("tags", "STRING").with_mode("repeated").is_repeated());
    assert!(!ColumnDef::new("tags", "STRING").with_mode("NULLABLE").is_repeated());
}

#[test]
fn serializes_back_to_column_array() -> Result<(), serde_json::Error> {
    let schema = TableSchema::new(vec![ColumnDef::new("id", "STRING")]);

    let json = serde_json::to_string(&schema)?;

    assert_eq!(json, r#"[{"name":"id","type":"STRING"}]"#);
    Ok(())
}

#[test]
fn bad_column_error_keeps_line_and_column() {
    let array = r#"[
  {"name": "id", "type": "INT64"},
  {"name": "qty", "type": 5}
]"#;
    let table = r#"{"fields": [
  {"name": "id", "type": "INT64"},
  {"name": "qty", "type": 5}
]}"#;

    for json in [array, table] {
        let err = serde_json::from_str::<TableSchema>(json).unwrap_err();
        assert_eq!(err.line(), 3, "{err}");
        assert!(err.column() > 0, "{err}");
        assert!(err.to_string().contains("expected a string"), "{err}");
    }
}

#[test]
fn object_without_fields_is_rejected() {
    let err = serde_json::from_str::<TableSchema>(r#"{"name": "id"}"#).unwrap_err();
    assert!(err.to_string().contains("missing field `fields`"), "{err}");

    let err = serde_json::from_str::<TableSchema>(r#""STRING""#).unwrap_err();
    assert!(err.to_string().contains("a column array or an object"), "{err}");
}
