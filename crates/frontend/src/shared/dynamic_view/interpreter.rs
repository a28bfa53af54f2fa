//! Layout interpreter: server node tree -> render plan
//!
//! Known node kinds get dedicated plans; every other tag becomes a generic
//! container that still renders its children, so new server-side node types
//! show up without a client release.

use contracts::shared::dynamic_view::{LayoutNode, NodeKind};

use super::column_layout::TableLayout;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderNode {
    Table(TablePlan),
    Footer(ContainerPlan),
    Generic(ContainerPlan),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePlan {
    pub class_name: Option<String>,
    pub layout: TableLayout,
}

/// Structural node: optional text followed by its children
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerPlan {
    /// Declared `type`, kept for the `data-node-type` attribute
    pub tag: String,
    pub class_name: Option<String>,
    /// `props.text`, when present
    pub text: Option<String>,
    pub children: Vec<RenderNode>,
}

/// Interpret one sibling list.
///
/// Siblings keep their source order, except footers, which are moved after
/// all other siblings (keeping their relative order).
pub fn interpret(nodes: &[LayoutNode]) -> Vec<RenderNode> {
    let (footers, body): (Vec<&LayoutNode>, Vec<&LayoutNode>) = nodes
        .iter()
        .partition(|node| node.kind() == NodeKind::Footer);

    body.into_iter()
        .chain(footers)
        .map(interpret_node)
        .collect()
}

fn interpret_node(node: &LayoutNode) -> RenderNode {
    match node.kind() {
        NodeKind::Table => RenderNode::Table(TablePlan {
            class_name: node.class_name.clone(),
            layout: TableLayout::compute(&node.fields(), node.is_displaying_metadata_column()),
        }),
        NodeKind::Footer => RenderNode::Footer(container(node)),
        NodeKind::Generic(_) => RenderNode::Generic(container(node)),
    }
}

fn container(node: &LayoutNode) -> ContainerPlan {
    ContainerPlan {
        tag: node.node_type.clone(),
        class_name: node.class_name.clone(),
        text: node.prop_str("text").map(str::to_string),
        children: interpret(node.children()),
    }
}

/// Number of table plans anywhere in `plan`
pub fn table_count(plan: &[RenderNode]) -> usize {
    plan.iter()
        .map(|node| match node {
            RenderNode::Table(_) => 1,
            RenderNode::Footer(c) | RenderNode::Generic(c) => table_count(&c.children),
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn nodes(value: serde_json::Value) -> Vec<LayoutNode> {
        serde_json::from_value(value).unwrap()
    }

    fn tags(plan: &[RenderNode]) -> Vec<String> {
        plan.iter()
            .map(|n| match n {
                RenderNode::Table(_) => "table".to_string(),
                RenderNode::Footer(c) | RenderNode::Generic(c) => c.tag.clone(),
            })
            .collect()
    }

    #[test]
    fn test_footer_moves_to_end() {
        let plan = interpret(&nodes(json!([
            {"type": "footer", "props": {"text": "first footer"}},
            {"type": "header"},
            {"type": "table"},
            {"type": "footer", "props": {"text": "second footer"}},
            {"type": "chart"}
        ])));
        assert_eq!(tags(&plan), vec!["header", "table", "chart", "footer", "footer"]);
        let RenderNode::Footer(first) = &plan[3] else {
            panic!("expected footer");
        };
        assert_eq!(first.text.as_deref(), Some("first footer"));
    }

    #[test]
    fn test_unknown_types_recurse() {
        let plan = interpret(&nodes(json!([
            {"type": "grid", "class_name": "gap-4", "children": [
                {"type": "card", "children": [
                    {"type": "table", "props": {"fields": [{"field_code": "name", "field_name": "Name"}]}}
                ]},
                {"type": "footer"},
                {"type": "note", "props": {"text": "hello"}}
            ]}
        ])));
        assert_eq!(plan.len(), 1);
        let RenderNode::Generic(grid) = &plan[0] else {
            panic!("expected generic");
        };
        assert_eq!(grid.class_name.as_deref(), Some("gap-4"));
        assert_eq!(tags(&grid.children), vec!["card", "note", "footer"]);
        assert_eq!(table_count(&plan), 1);

        let RenderNode::Generic(card) = &grid.children[0] else {
            panic!("expected card");
        };
        let RenderNode::Table(table) = &card.children[0] else {
            panic!("expected table");
        };
        assert_eq!(table.layout.columns().len(), 1);
    }

    #[test]
    fn test_table_without_fields_has_no_columns() {
        let plan = interpret(&nodes(json!([{"type": "table", "class_name": "main"}])));
        let RenderNode::Table(table) = &plan[0] else {
            panic!("expected table");
        };
        assert!(table.layout.columns().is_empty());
        assert_eq!(table.class_name.as_deref(), Some("main"));
    }

    #[test]
    fn test_table_honours_metadata_flag() {
        let plan = interpret(&nodes(json!([{
            "type": "table",
            "props": {
                "is_displaying_metadata_column": true,
                "fields": [{"field_code": "id", "field_name": "ID"}, {"field_code": "name", "field_name": "Name"}]
            }
        }])));
        let RenderNode::Table(table) = &plan[0] else {
            panic!("expected table");
        };
        assert_eq!(table.layout.columns().len(), 2);
    }

    #[test]
    fn test_empty_and_missing_type() {
        assert!(interpret(&[]).is_empty());
        let plan = interpret(&nodes(json!([{}])));
        assert_eq!(tags(&plan), vec![""]);
    }
}
