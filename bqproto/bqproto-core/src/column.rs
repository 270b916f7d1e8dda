//! Warehouse table schema as found in JSON schema exports.

use std::{fmt, ops::Deref};

use serde::{
    Deserialize, Deserializer, Serialize,
    de::{self, IgnoredAny, MapAccess, SeqAccess, Visitor},
};

/// `type` value of a nested group column.
pub const RECORD_TYPE: &str = "RECORD";

/// `mode` value of a column holding an ordered sequence of values.
pub const REPEATED_MODE: &str = "REPEATED";

/// One column of a table schema.
///
/// `name` and `type` are optional here so that a missing key surfaces as a
/// translation error with a column path rather than as a JSON parse error.
/// Keys not listed (`description`, `policyTags`, ...) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ColumnDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ColumnDef>>,
}

impl ColumnDef {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            type_name: Some(type_name.into()),
            mode: None,
            fields: None,
        }
    }

    /// A `RECORD` column with the given sub-columns.
    pub fn record(name: impl Into<String>, fields: Vec<ColumnDef>) -> Self {
        Self::new(name, RECORD_TYPE).with_fields(fields)
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    pub fn with_fields(mut self, fields: Vec<ColumnDef>) -> Self {
        self.fields = Some(fields);
        self
    }

    pub fn repeated(self) -> Self {
        self.with_mode(REPEATED_MODE)
    }

    /// `NULLABLE`, `REQUIRED` and an absent mode all count as singular.
    pub fn is_repeated(&self) -> bool {
        self.mode.as_deref() == Some(REPEATED_MODE)
    }

    pub fn is_record(&self) -> bool {
        self.type_name.as_deref() == Some(RECORD_TYPE)
    }
}

/// Ordered top-level columns of a table.
///
/// Deserializes from either a bare column array or an object carrying a
/// `fields` array (the `schema` member of a table resource).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(into = "Vec<ColumnDef>")]
pub struct TableSchema(pub Vec<ColumnDef>);

// Visits both shapes directly so errors inside a column keep their location.
impl<'de> Deserialize<'de> for TableSchema {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TableSchemaVisitor)
    }
}

struct TableSchemaVisitor;

impl<'de> Visitor<'de> for TableSchemaVisitor {
    type Value = TableSchema;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a column array or an object with a `fields` array")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let mut columns = Vec::with_capacity(seq.size_hint().unwrap_or(0));
        while let Some(column) = seq.next_element::<ColumnDef>()? {
            columns.push(column);
        }
        Ok(TableSchema(columns))
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields: Option<Vec<ColumnDef>> = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "fields" {
                if fields.is_some() {
                    return Err(de::Error::duplicate_field("fields"));
                }
                fields = Some(map.next_value()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        fields
            .map(TableSchema)
            .ok_or_else(|| de::Error::missing_field("fields"))
    }
}

impl TableSchema {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self(columns)
    }

    pub fn as_slice(&self) -> &[ColumnDef] {
        &self.0
    }
}

impl From<Vec<ColumnDef>> for TableSchema {
    fn from(value: Vec<ColumnDef>) -> Self {
        Self(value)
    }
}

impl From<TableSchema> for Vec<ColumnDef> {
    fn from(value: TableSchema) -> Self {
        value.0
    }
}

impl AsRef<[ColumnDef]> for TableSchema {
    fn as_ref(&self) -> &[ColumnDef] {
        self.as_slice()
    }
}

impl Deref for TableSchema {
    type Target = [ColumnDef];

    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
