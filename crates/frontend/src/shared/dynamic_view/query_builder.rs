use contracts::shared::dynamic_view::{DataQueryRequest, RouteContext};

use super::catalog::FieldCatalog;
use super::filter_tree::FilterExpressionTree;
use super::pagination::PageState;

/// Compose the data endpoint body for `page`.
///
/// Pure: the request is complete before any network call is made. The filter
/// tree goes out as a one-element array of groups; sorting is not wired, so
/// `orders` stays empty.
pub fn build_data_query(
    catalog: &FieldCatalog,
    filters: &FilterExpressionTree,
    page_state: &PageState,
    page: u32,
    route: &RouteContext,
) -> DataQueryRequest {
    DataQueryRequest {
        fields: catalog.projection(),
        filters: vec![filters.to_wire()],
        orders: Vec::new(),
        page: page.max(1),
        page_size: page_state.page_size,
        route: route.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::dynamic_view::filter_tree::{GroupPath, LeafUpdate};
    use contracts::shared::dynamic_view::{FilterOperator, LayoutResponse};
    use serde_json::json;

    fn catalog() -> FieldCatalog {
        let resp: LayoutResponse = serde_json::from_value(json!({
            "layout": {"children": [{"type": "table", "props": {"fields": [
                {"field_code": "id", "field_name": "ID"},
                {"field_code": "name", "field_name": "Name"},
                {"field_code": "status", "field_name": "Status"}
            ]}}]}
        }))
        .unwrap();
        FieldCatalog::from_layout(&resp)
    }

    #[test]
    fn test_full_request_body() {
        let mut tree = FilterExpressionTree::new();
        tree.add_field(&GroupPath::root(), "status");
        tree.update_field(
            &GroupPath::root(),
            "status",
            LeafUpdate::Operator(FilterOperator::NotEmpty),
        );
        let route = RouteContext::new("acme", "crm", "orders", "all");

        let request = build_data_query(&catalog(), &tree, &PageState::default(), 3, &route);

        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "fields": {
                    "name": {"field_code": "name", "field_name": "Name"},
                    "status": {"field_code": "status", "field_name": "Status"}
                },
                "filters": [{
                    "operator": "AND",
                    "filter_item": {"status": {"value": "", "operator": "not_empty"}}
                }],
                "orders": [],
                "page": 3,
                "page_size": 20,
                "object_code": "orders",
                "tenant_code": "acme",
                "product_code": "crm",
                "view_content_code": "all"
            })
        );
    }

    #[test]
    fn test_empty_tree_still_sent_as_group() {
        let request = build_data_query(
            &FieldCatalog::default(),
            &FilterExpressionTree::new(),
            &PageState::default(),
            0,
            &RouteContext::default(),
        );
        assert!(request.fields.is_empty());
        assert_eq!(request.filters.len(), 1);
        assert!(request.filters[0].filter_item.is_empty());
        assert_eq!(request.page, 1);
    }

    #[test]
    fn test_builder_does_not_touch_inputs() {
        let tree = FilterExpressionTree::new();
        let state = PageState::default();
        let a = build_data_query(&catalog(), &tree, &state, 2, &RouteContext::default());
        let b = build_data_query(&catalog(), &tree, &state, 2, &RouteContext::default());
        assert_eq!(a, b);
        assert_eq!(state, PageState::default());
    }
}
