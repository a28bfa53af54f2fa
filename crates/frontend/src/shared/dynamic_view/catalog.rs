use contracts::shared::dynamic_view::{Field, LayoutNode, LayoutResponse};
use std::collections::{BTreeMap, HashSet};

/// Fields a view can query and filter on
///
/// Built in one pass over the layout tree and never mutated afterwards; a new
/// layout response produces a new catalogue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldCatalog {
    fields: Vec<Field>,
}

impl FieldCatalog {
    /// Collect the fields of every node declaring `props.fields`, in tree order.
    ///
    /// Metadata columns are dropped unless the declaring node opts in with
    /// `is_displaying_metadata_column`. Duplicate codes keep their first
    /// occurrence. When the tree declares no fields at all, the response's
    /// object-level `fields` (minus metadata) are used instead.
    pub fn from_layout(response: &LayoutResponse) -> Self {
        let mut seen = HashSet::new();
        let from_tree = response
            .layout
            .children
            .iter()
            .fold(Vec::new(), |acc, node| collect_node(acc, node, &mut seen));

        if !from_tree.is_empty() {
            return Self { fields: from_tree };
        }

        let fields = response
            .fields
            .iter()
            .filter(|f| !f.is_metadata())
            .filter(|f| seen.insert(f.field_code.clone()))
            .cloned()
            .collect();
        Self { fields }
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field_code: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.field_code == field_code)
    }

    /// Display name of a field, falling back to its code
    pub fn display_name<'a>(&'a self, field_code: &'a str) -> &'a str {
        match self.get(field_code) {
            Some(field) if !field.field_name.is_empty() => &field.field_name,
            _ => field_code,
        }
    }

    /// field_code -> descriptor, the projection sent with every data query
    pub fn projection(&self) -> BTreeMap<String, Field> {
        self.fields
            .iter()
            .map(|f| (f.field_code.clone(), f.clone()))
            .collect()
    }
}

fn collect_node(mut acc: Vec<Field>, node: &LayoutNode, seen: &mut HashSet<String>) -> Vec<Field> {
    let show_metadata = node.is_displaying_metadata_column();
    acc.extend(
        node.fields()
            .into_iter()
            .filter(|f| show_metadata || !f.is_metadata())
            .filter(|f| seen.insert(f.field_code.clone())),
    );
    node.children()
        .iter()
        .fold(acc, |acc, child| collect_node(acc, child, seen))
}
