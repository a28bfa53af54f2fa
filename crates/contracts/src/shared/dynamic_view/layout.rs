use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::de::{lenient, lenient_vec, null_as_default};
use super::field::Field;

/// Payload of the layout endpoint (`…/view/{view}/record`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutResponse {
    #[serde(default)]
    pub view_content: Option<ViewContent>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub layout: ViewLayout,
    /// Every field of the object, independent of what the layout shows
    #[serde(default, deserialize_with = "lenient_vec")]
    pub fields: Vec<Field>,
}

/// Descriptor of the view being rendered
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewContent {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub object: Option<ViewObject>,
    #[serde(default)]
    pub tenant: Option<ViewTenant>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewObject {
    #[serde(default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewTenant {
    #[serde(default)]
    pub name: Option<String>,
}

/// Root of the layout tree
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ViewLayout {
    #[serde(default, deserialize_with = "lenient_vec")]
    pub children: Vec<LayoutNode>,
}

/// Node kinds with dedicated rendering; everything else is `Generic`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Table,
    Footer,
    /// Unknown or container tag, rendered structurally
    Generic(String),
}

impl NodeKind {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "table" => NodeKind::Table,
            "footer" => NodeKind::Footer,
            other => NodeKind::Generic(other.to_string()),
        }
    }
}

/// One node of the server-declared UI tree
///
/// Props are kept as raw JSON: each kind reads the keys it knows and ignores
/// the rest, so new server-side props never break decoding. Props that are not
/// an object read as empty; malformed children are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutNode {
    #[serde(rename = "type", default, deserialize_with = "lenient")]
    pub node_type: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
    #[serde(default, skip_serializing_if = "Value::is_null")]
    pub props: Value,
    #[serde(default, deserialize_with = "lenient_vec", skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutNode>,
}

impl LayoutNode {
    pub fn kind(&self) -> NodeKind {
        NodeKind::from_tag(&self.node_type)
    }

    pub fn children(&self) -> &[LayoutNode] {
        &self.children
    }

    pub fn prop(&self, key: &str) -> Option<&Value> {
        self.props.as_object()?.get(key)
    }

    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.prop(key)?.as_str()
    }

    /// `props.fields`; a missing list or malformed entries degrade to nothing
    pub fn fields(&self) -> Vec<Field> {
        match self.prop("fields") {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|item| serde_json::from_value::<Field>(item.clone()).ok())
                .collect(),
            _ => Vec::new(),
        }
    }

    /// `props.is_displaying_metadata_column`, false when absent or not a bool
    pub fn is_displaying_metadata_column(&self) -> bool {
        self.prop("is_displaying_metadata_column")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_dispatch() {
        assert_eq!(NodeKind::from_tag("table"), NodeKind::Table);
        assert_eq!(NodeKind::from_tag("footer"), NodeKind::Footer);
        assert_eq!(
            NodeKind::from_tag("kanban"),
            NodeKind::Generic("kanban".to_string())
        );
        assert_eq!(NodeKind::from_tag(""), NodeKind::Generic(String::new()));
    }

    #[test]
    fn test_node_props() {
        let node: LayoutNode = serde_json::from_value(json!({
            "type": "table",
            "class_name": "w-full",
            "props": {
                "fields": [
                    {"field_code": "id", "field_name": "ID"},
                    {"no_code": true},
                    {"field_code": "name", "field_name": "Name"}
                ],
                "is_displaying_metadata_column": true,
                "unknown_prop": {"nested": 1}
            }
        }))
        .unwrap();

        assert_eq!(node.kind(), NodeKind::Table);
        assert_eq!(
            node.fields(),
            vec![Field::new("id", "ID"), Field::new("name", "Name")]
        );
        assert!(node.is_displaying_metadata_column());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_missing_props_degrade() {
        let node: LayoutNode = serde_json::from_value(json!({"type": "table"})).unwrap();
        assert!(node.fields().is_empty());
        assert!(!node.is_displaying_metadata_column());

        let node: LayoutNode =
            serde_json::from_value(json!({"type": "table", "props": {"fields": "oops"}})).unwrap();
        assert!(node.fields().is_empty());
    }

    #[test]
    fn test_malformed_node_pieces_degrade() {
        let node: LayoutNode = serde_json::from_value(json!({
            "type": null,
            "class_name": 42,
            "props": "hello",
            "children": [{"type": "table"}, "not a node", null]
        }))
        .unwrap();
        assert_eq!(node.node_type, "");
        assert_eq!(node.class_name, None);
        assert!(node.prop("fields").is_none());
        assert!(node.fields().is_empty());
        assert_eq!(node.children().len(), 1);

        let node: LayoutNode =
            serde_json::from_value(json!({"type": "section", "props": null, "children": null}))
                .unwrap();
        assert!(node.prop("text").is_none());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_null_collections_in_layout_response() {
        let resp: LayoutResponse = serde_json::from_value(json!({
            "view_content": null,
            "layout": {"children": null},
            "fields": null
        }))
        .unwrap();
        assert!(resp.view_content.is_none());
        assert!(resp.layout.children.is_empty());
        assert!(resp.fields.is_empty());

        let resp: LayoutResponse = serde_json::from_value(json!({
            "layout": null,
            "fields": [{"field_code": "name", "field_name": null}, {"field_name": "no code"}]
        }))
        .unwrap();
        assert!(resp.layout.children.is_empty());
        assert_eq!(resp.fields, vec![Field::new("name", "")]);
    }

    #[test]
    fn test_layout_response_decoding() {
        let resp: LayoutResponse = serde_json::from_value(json!({
            "view_content": {
                "name": "All Orders",
                "object": {"display_name": "Orders"},
                "tenant": {"name": "Acme"},
                "serial": "ignored"
            },
            "layout": {"children": [
                {"type": "section", "children": [{"type": "table"}]},
                {"type": "footer"}
            ]},
            "fields": [{"field_code": "name", "field_name": "Name"}]
        }))
        .unwrap();

        assert_eq!(resp.layout.children.len(), 2);
        assert_eq!(resp.layout.children[0].children().len(), 1);
        assert_eq!(
            resp.view_content.unwrap().object.unwrap().display_name.as_deref(),
            Some("Orders")
        );
        assert_eq!(resp.fields.len(), 1);
    }
}
