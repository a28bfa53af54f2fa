use contracts::shared::dynamic_view::Row;
use leptos::prelude::*;

use super::table::DynamicTable;
use crate::shared::dynamic_view::interpreter::{ContainerPlan, RenderNode};
use crate::shared::dynamic_view::pagination::PageState;

/// Page-level state every table node renders from
#[derive(Clone, Copy)]
pub struct TableContext {
    pub rows: Signal<Vec<Row>>,
    pub page_state: Signal<PageState>,
    /// Receives the 0-indexed paginator selection
    pub on_page_change: Callback<usize>,
}

pub fn render_nodes(nodes: Vec<RenderNode>, ctx: TableContext) -> AnyView {
    nodes
        .into_iter()
        .map(|node| render_node(node, ctx))
        .collect_view()
        .into_any()
}

fn render_node(node: RenderNode, ctx: TableContext) -> AnyView {
    match node {
        RenderNode::Table(plan) => view! { <DynamicTable plan=plan ctx=ctx /> }.into_any(),
        RenderNode::Footer(container) => {
            let ContainerPlan {
                tag,
                class_name,
                text,
                children,
            } = container;
            view! {
                <footer class=format!("layout-footer {}", class_name.unwrap_or_default()) data-node-type=tag>
                    {text.map(|t| view! { <span class="layout-footer__text">{t}</span> })}
                    {render_nodes(children, ctx)}
                </footer>
            }
            .into_any()
        }
        RenderNode::Generic(container) => {
            let ContainerPlan {
                tag,
                class_name,
                text,
                children,
            } = container;
            view! {
                <div class=class_name.unwrap_or_default() data-node-type=tag>
                    {text.map(|t| view! { <span class="layout-node__text">{t}</span> })}
                    {render_nodes(children, ctx)}
                </div>
            }
            .into_any()
        }
    }
}
