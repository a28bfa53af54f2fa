use serde::{Deserialize, Serialize};

use super::de::null_as_default;

/// System-owned audit/id columns, hidden unless a node asks for them
pub const METADATA_COLUMNS: [&str; 8] = [
    "created_at",
    "created_by",
    "deleted_at",
    "deleted_by",
    "updated_at",
    "updated_by",
    "serial",
    "id",
];

/// Field descriptor as declared by the layout endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Unique key of the field (column name on the server)
    pub field_code: String,
    /// Display label
    #[serde(default, deserialize_with = "null_as_default")]
    pub field_name: String,
}

impl Field {
    pub fn new(field_code: impl Into<String>, field_name: impl Into<String>) -> Self {
        Self {
            field_code: field_code.into(),
            field_name: field_name.into(),
        }
    }

    /// Whether this field is one of the metadata columns
    pub fn is_metadata(&self) -> bool {
        is_metadata_column(&self.field_code)
    }
}

pub fn is_metadata_column(field_code: &str) -> bool {
    METADATA_COLUMNS.contains(&field_code)
}
