use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::de::null_as_default;
use super::field::Field;
use super::filter::FilterGroup;
use super::route::RouteContext;

/// Body of the data endpoint (`…/view/{view}/data`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataQueryRequest {
    /// Projection: field_code -> descriptor
    pub fields: BTreeMap<String, Field>,
    /// Filter groups, AND-ed together by the server
    pub filters: Vec<FilterGroup>,
    pub orders: Vec<QueryOrder>,
    /// 1-indexed page
    pub page: u32,
    pub page_size: u32,
    #[serde(flatten)]
    pub route: RouteContext,
}

/// Sort rule of a data query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryOrder {
    pub field_code: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    Desc,
}

/// One record: field_code -> `{value: scalar}`
pub type Row = BTreeMap<String, Value>;

/// Payload of the data endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DataResponse {
    /// `null` when the page is empty
    #[serde(default, deserialize_with = "null_as_default")]
    pub items: Vec<Row>,
    /// Page the server actually returned (may differ from the requested one)
    #[serde(default)]
    pub page: Option<u32>,
    #[serde(default)]
    pub total_page: Option<u32>,
}

/// Text of `row[field_code].value`; missing or null values are empty
pub fn cell_text(row: &Row, field_code: &str) -> String {
    match row.get(field_code).and_then(|cell| cell.get("value")) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => format_number(n),
        Some(other) => other.to_string(),
    }
}

// Whole floats print without a trailing ".0".
fn format_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
