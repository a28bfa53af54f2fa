use contracts::shared::dynamic_view::RouteContext;
use leptos::prelude::*;

use crate::shared::dynamic_view::DynamicViewPage;

/// Route of the current page, taken from `window.location.pathname`
fn current_route() -> Result<RouteContext, String> {
    let path = web_sys::window()
        .ok_or_else(|| "window is not available".to_string())?
        .location()
        .pathname()
        .map_err(|_| "cannot read location path".to_string())?;
    RouteContext::from_path(&path).map_err(|e| e.to_string())
}

#[component]
pub fn App() -> impl IntoView {
    match current_route() {
        Ok(route) => {
            log::info!(
                "opening view {}/{}/{}/{}",
                route.tenant_code,
                route.product_code,
                route.object_code,
                route.view_content_code
            );
            view! { <DynamicViewPage route=route /> }.into_any()
        }
        Err(e) => {
            log::error!("invalid route: {}", e);
            view! {
                <div class="page">
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">
                            "Open a view as /{tenant}/{product}/{object}/{view}: " {e}
                        </span>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
