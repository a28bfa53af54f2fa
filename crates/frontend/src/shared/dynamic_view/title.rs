/// Page title and labels derived from codes
use contracts::shared::dynamic_view::ViewContent;

/// `sales_order-line` -> `Sales Order Line`
pub fn to_label(code: &str) -> String {
    code.split(|c: char| c == '_' || c == '-' || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Heading of the view: the object's display name, or a label made from its code
pub fn object_label(view_content: Option<&ViewContent>, object_code: &str) -> String {
    view_content
        .and_then(|vc| vc.object.as_ref())
        .and_then(|o| o.display_name.as_deref())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| to_label(object_code))
}

/// Document title: `Object (View) - Tenant`
pub fn page_title(view_content: Option<&ViewContent>, object_code: &str) -> String {
    let object = object_label(view_content, object_code);
    let view = view_content
        .and_then(|vc| vc.name.as_deref())
        .unwrap_or_default();
    let tenant = view_content
        .and_then(|vc| vc.tenant.as_ref())
        .and_then(|t| t.name.as_deref())
        .unwrap_or_default();
    format!("{} ({}) - {}", object, view, tenant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_label() {
        assert_eq!(to_label("sales_order"), "Sales Order");
        assert_eq!(to_label("purchase-order_line"), "Purchase Order Line");
        assert_eq!(to_label("customer"), "Customer");
        assert_eq!(to_label("__x__"), "X");
        assert_eq!(to_label(""), "");
    }

    #[test]
    fn test_page_title() {
        let vc: ViewContent = serde_json::from_value(json!({
            "name": "All Orders",
            "object": {"display_name": "Orders"},
            "tenant": {"name": "Acme"}
        }))
        .unwrap();
        assert_eq!(page_title(Some(&vc), "sales_order"), "Orders (All Orders) - Acme");
    }

    #[test]
    fn test_page_title_falls_back_to_code() {
        let vc: ViewContent =
            serde_json::from_value(json!({"name": "Default", "object": {"display_name": ""}}))
                .unwrap();
        assert_eq!(page_title(Some(&vc), "sales_order"), "Sales Order (Default) - ");
        assert_eq!(object_label(None, "sales_order"), "Sales Order");
    }
}
