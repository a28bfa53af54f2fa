use serde::{Deserialize, Serialize};

/// Identifiers scoping both view endpoints, passed through to the data query unchanged
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteContext {
    pub tenant_code: String,
    pub product_code: String,
    pub object_code: String,
    pub view_content_code: String,
}

impl RouteContext {
    pub fn new(
        tenant_code: impl Into<String>,
        product_code: impl Into<String>,
        object_code: impl Into<String>,
        view_content_code: impl Into<String>,
    ) -> Self {
        Self {
            tenant_code: tenant_code.into(),
            product_code: product_code.into(),
            object_code: object_code.into(),
            view_content_code: view_content_code.into(),
        }
    }

    /// Parse a page path of the form `/{tenant}/{product}/{object}/{view}`
    pub fn from_path(path: &str) -> anyhow::Result<Self> {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [tenant, product, object, view] => Ok(Self::new(*tenant, *product, *object, *view)),
            _ => anyhow::bail!(
                "expected /tenant/product/object/view, got {:?} ({} segments)",
                path,
                segments.len()
            ),
        }
    }

    fn view_path(&self) -> String {
        format!(
            "/t/{}/p/{}/o/{}/view/{}",
            self.tenant_code, self.product_code, self.object_code, self.view_content_code
        )
    }

    /// Path of the layout endpoint
    pub fn layout_path(&self) -> String {
        format!("{}/record", self.view_path())
    }

    /// Path of the data endpoint
    pub fn data_path(&self) -> String {
        format!("{}/data", self.view_path())
    }
}
