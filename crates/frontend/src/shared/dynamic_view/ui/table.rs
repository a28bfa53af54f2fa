use leptos::prelude::*;

use super::node_view::TableContext;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::dynamic_view::column_layout::{Column, TableBody, NO_DATA_TEXT};
use crate::shared::dynamic_view::interpreter::TablePlan;

/// Table node: fixed header, one row per record, paginator below.
///
/// Column styles come from the precomputed layout, so header and body cells
/// of a column always share the same min-width and flex setting.
#[component]
pub fn DynamicTable(plan: TablePlan, ctx: TableContext) -> impl IntoView {
    let TablePlan { class_name, layout } = plan;
    let styles: Vec<String> = layout.columns().iter().map(Column::style).collect();
    let layout = StoredValue::new(layout);
    let styles = StoredValue::new(styles);

    let header = layout.with_value(|l| {
        l.columns()
            .iter()
            .map(|column| {
                view! {
                    <th class="table__header-cell" style=column.style()>
                        {column.field.field_name.clone()}
                    </th>
                }
            })
            .collect_view()
    });

    let body = move || {
        let body = ctx.rows.with(|rows| layout.with_value(|l| l.body(rows)));
        match body {
            TableBody::Rows(rows) => rows
                .into_iter()
                .map(|cells| {
                    let cells = styles.with_value(|styles| {
                        cells
                            .into_iter()
                            .zip(styles.iter().cloned())
                            .map(|(text, style)| {
                                view! { <td class="table__cell" style=style>{text}</td> }
                            })
                            .collect_view()
                    });
                    view! { <tr class="table__row">{cells}</tr> }
                })
                .collect_view()
                .into_any(),
            TableBody::Placeholder { colspan } => view! {
                <tr class="table__row">
                    <td class="table__cell table__cell--empty" colspan=colspan.to_string()>
                        {NO_DATA_TEXT}
                    </td>
                </tr>
            }
            .into_any(),
        }
    };

    let loading = move || ctx.page_state.with(|s| s.loading);

    view! {
        <div class=format!("card dynamic-table {}", class_name.unwrap_or_default())>
            <div class="card__body">
                <div class="table-container">
                    <Show when=loading>
                        <div class="loading-state loading-state--overlay">"Loading..."</div>
                    </Show>
                    <table class="table__data">
                        <thead class="table__head">
                            <tr>{header}</tr>
                        </thead>
                        <tbody>{body}</tbody>
                    </table>
                </div>
            </div>
            <div class="card__footer">
                <PaginationControls
                    current_page=Signal::derive(move || ctx.page_state.with(|s| s.current_page))
                    total_pages=Signal::derive(move || ctx.page_state.with(|s| s.total_pages))
                    disabled=Signal::derive(loading)
                    on_page_change=ctx.on_page_change
                />
            </div>
        </div>
    }
}
