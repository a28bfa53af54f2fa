//! Column layout of dynamic tables.
//!
//! Column widths are a heuristic on the header text: `chars * 10 + 40`
//! units. When all visible columns together stay under [`FLEX_THRESHOLD`],
//! the first visible column stretches to take the remaining width.

use contracts::shared::dynamic_view::{cell_text, Field, Row};

pub const WIDTH_PER_CHAR: u32 = 10;
pub const WIDTH_PADDING: u32 = 40;
/// Total minimum width below which the first column flex-expands
pub const FLEX_THRESHOLD: u32 = 1000;
pub const NO_DATA_TEXT: &str = "No data available";

/// Minimum width of a column whose header is `field_name`
pub fn min_column_width(field_name: &str) -> u32 {
    field_name.chars().count() as u32 * WIDTH_PER_CHAR + WIDTH_PADDING
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub field: Field,
    pub min_width: u32,
    /// Stretches to fill the leftover table width
    pub flex: bool,
}

impl Column {
    /// Inline style shared by the header and body cells of this column
    pub fn style(&self) -> String {
        if self.flex {
            format!("min-width: {}px; width: 100%;", self.min_width)
        } else {
            format!("min-width: {}px;", self.min_width)
        }
    }
}

/// Body of a table for one set of rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableBody {
    /// Cell texts, one vector per row, in column order
    Rows(Vec<Vec<String>>),
    /// Single "no data" row spanning every visible column
    Placeholder { colspan: usize },
}

/// Visible columns of one table node
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableLayout {
    columns: Vec<Column>,
}

impl TableLayout {
    pub fn compute(fields: &[Field], show_metadata: bool) -> Self {
        let mut columns: Vec<Column> = fields
            .iter()
            .filter(|f| show_metadata || !f.is_metadata())
            .map(|f| Column {
                field: f.clone(),
                min_width: min_column_width(&f.field_name),
                flex: false,
            })
            .collect();

        let total: u32 = columns.iter().map(|c| c.min_width).sum();
        if total < FLEX_THRESHOLD {
            if let Some(first) = columns.first_mut() {
                first.flex = true;
            }
        }

        Self { columns }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn total_min_width(&self) -> u32 {
        self.columns.iter().map(|c| c.min_width).sum()
    }

    pub fn flex_column(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.flex)
    }

    pub fn body(&self, rows: &[Row]) -> TableBody {
        if rows.is_empty() {
            return TableBody::Placeholder {
                colspan: self.columns.len().max(1),
            };
        }
        TableBody::Rows(
            rows.iter()
                .map(|row| {
                    self.columns
                        .iter()
                        .map(|c| cell_text(row, &c.field.field_code))
                        .collect()
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(pairs: &[(&str, &str)]) -> Vec<Field> {
        pairs.iter().map(|(c, n)| Field::new(*c, *n)).collect()
    }

    #[test]
    fn test_min_width() {
        assert_eq!(min_column_width(""), 40);
        assert_eq!(min_column_width("Name"), 80);
        assert_eq!(min_column_width("Ünïcødé"), 110);
        assert_eq!(min_column_width("名前"), 60);
    }

    #[test]
    fn test_id_name_scenario() {
        let layout = TableLayout::compute(&fields(&[("id", "ID"), ("name", "Name")]), false);
        assert_eq!(layout.columns().len(), 1);
        let col = &layout.columns()[0];
        assert_eq!(col.field, Field::new("name", "Name"));
        assert_eq!(col.min_width, 80);
        assert!(col.flex);
        assert_eq!(col.style(), "min-width: 80px; width: 100%;");
    }

    #[test]
    fn test_metadata_columns_shown_when_requested() {
        let f = fields(&[
            ("id", "ID"),
            ("name", "Name"),
            ("created_at", "Created At"),
            ("serial", "Serial"),
        ]);
        let hidden = TableLayout::compute(&f, false);
        let shown = TableLayout::compute(&f, true);
        assert_eq!(hidden.columns().len(), 1);
        assert_eq!(shown.columns().len(), 4);
        assert_eq!(shown.columns()[0].field.field_code, "id");
        assert!(shown.columns()[0].flex);
    }

    #[test]
    fn test_flex_threshold_boundary() {
        // 10 columns of 6 chars: 10 * (60 + 40) = 1000 -> no flex
        let at: Vec<Field> = (0..10).map(|i| Field::new(format!("c{i}"), "abcdef")).collect();
        let layout = TableLayout::compute(&at, false);
        assert_eq!(layout.total_min_width(), 1000);
        assert!(layout.flex_column().is_none());

        // one char shorter on the last column: 990 -> first column flexes
        let mut below = at.clone();
        below[9].field_name = "abcde".to_string();
        let layout = TableLayout::compute(&below, false);
        assert_eq!(layout.total_min_width(), 990);
        assert_eq!(layout.flex_column().unwrap().field.field_code, "c0");
        assert_eq!(layout.columns().iter().filter(|c| c.flex).count(), 1);
    }

    #[test]
    fn test_flex_skips_hidden_metadata_column() {
        let layout = TableLayout::compute(&fields(&[("id", "ID"), ("a", "A"), ("b", "B")]), false);
        assert_eq!(layout.flex_column().unwrap().field.field_code, "a");
    }

    #[test]
    fn test_body_rows() {
        let layout = TableLayout::compute(&fields(&[("id", "ID"), ("name", "Name"), ("age", "Age")]), false);
        let rows: Vec<Row> = vec![
            serde_json::from_value(json!({"id": {"value": 1}, "name": {"value": "Ann"}, "age": {"value": 31}})).unwrap(),
            serde_json::from_value(json!({"name": {"value": "Bob"}})).unwrap(),
        ];
        assert_eq!(
            layout.body(&rows),
            TableBody::Rows(vec![
                vec!["Ann".to_string(), "31".to_string()],
                vec!["Bob".to_string(), String::new()],
            ])
        );
    }

    #[test]
    fn test_zero_rows_placeholder_spans_visible_columns() {
        let layout = TableLayout::compute(
            &fields(&[("id", "ID"), ("name", "Name"), ("age", "Age"), ("updated_by", "By")]),
            false,
        );
        assert_eq!(layout.body(&[]), TableBody::Placeholder { colspan: 2 });

        let empty = TableLayout::compute(&[], false);
        assert!(empty.columns().is_empty());
        assert!(empty.flex_column().is_none());
        assert_eq!(empty.body(&[]), TableBody::Placeholder { colspan: 1 });
    }
}
