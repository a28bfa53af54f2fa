use contracts::shared::dynamic_view::{LayoutResponse, RouteContext};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::filter_editor::{FilterEditor, FilterEditorContext};
use super::node_view::{render_nodes, TableContext};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::dynamic_view::api::{fetch_data, fetch_layout, FetchState};
use crate::shared::dynamic_view::catalog::FieldCatalog;
use crate::shared::dynamic_view::fence::{RequestClass, RequestFence, Ticket};
use crate::shared::dynamic_view::filter_tree::FilterExpressionTree;
use crate::shared::dynamic_view::interpreter::{interpret, table_count};
use crate::shared::dynamic_view::pagination::{PageState, RefreshTarget, TableData};
use crate::shared::dynamic_view::query_builder::build_data_query;
use crate::shared::dynamic_view::title::{object_label, page_title};
use crate::shared::icons::icon;

/// Delay between the last filter edit and the data request it triggers
pub const FILTER_DEBOUNCE_MS: u32 = 300;

/// Server-described page for one route.
///
/// Loads the layout once, then queries data for page 1. Page clicks, filter
/// edits and the refresh button each issue a new data request; only the
/// latest one is applied.
#[component]
pub fn DynamicViewPage(route: RouteContext) -> impl IntoView {
    let route = StoredValue::new(route);
    let fence = StoredValue::new(RequestFence::default());

    let layout = RwSignal::new(FetchState::<LayoutResponse>::Loading);
    let catalog = RwSignal::new(FieldCatalog::default());
    let data = RwSignal::new(TableData::default());
    let page_state = RwSignal::new(PageState::default());
    let filters = RwSignal::new(FilterExpressionTree::new());
    let filters_expanded = RwSignal::new(false);

    let issue = move |class: RequestClass| -> Ticket {
        let mut current = fence.get_value();
        let ticket = current.issue(class);
        fence.set_value(current);
        ticket
    };
    let is_current = move |ticket: Ticket| fence.get_value().is_current(ticket);

    // Query `page`. A non-zero delay lets later calls supersede this one
    // before anything goes out.
    let load_data = move |page: u32, delay_ms: u32| {
        let ticket = issue(RequestClass::Data);
        page_state.update(|s| s.begin_query());

        spawn_local(async move {
            if delay_ms > 0 {
                TimeoutFuture::new(delay_ms).await;
                if !is_current(ticket) {
                    return;
                }
            }

            let query = build_data_query(
                &catalog.get_untracked(),
                &filters.get_untracked(),
                &page_state.get_untracked(),
                page,
                &route.get_value(),
            );
            let result = fetch_data(&route.get_value(), &query).await;

            if !is_current(ticket) {
                log::warn!("discarding stale response for page {} (request #{})", page, ticket.seq);
                return;
            }

            match result {
                Ok(response) => {
                    page_state.update(|s| s.apply_response(page, &response));
                    data.update(|d| d.loaded(response.items));
                }
                Err(e) => {
                    page_state.update(|s| s.query_failed());
                    data.update(|d| d.failed(e.to_string()));
                }
            }
        });
    };

    let load_layout = move || {
        let ticket = issue(RequestClass::Layout);
        layout.set(FetchState::Loading);

        spawn_local(async move {
            let result = fetch_layout(&route.get_value()).await;
            if !is_current(ticket) {
                return;
            }
            match result {
                Ok(response) => {
                    let object_code = route.with_value(|r| r.object_code.clone());
                    let title = page_title(response.view_content.as_ref(), &object_code);
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        document.set_title(&title);
                    }

                    let new_catalog = FieldCatalog::from_layout(&response);
                    log::info!(
                        "layout loaded: {} fields, {} tables",
                        new_catalog.len(),
                        table_count(&interpret(&response.layout.children))
                    );
                    catalog.set(new_catalog);
                    layout.set(FetchState::Loaded(response));
                    load_data(1, 0);
                }
                Err(e) => {
                    page_state.update(|s| s.query_failed());
                    layout.set(FetchState::Failed(e.to_string()));
                }
            }
        });
    };

    load_layout();

    let plan = Memo::new(move |_| {
        layout.with(|state| {
            state
                .loaded()
                .map(|response| interpret(&response.layout.children))
                .unwrap_or_default()
        })
    });

    let heading = move || {
        layout.with(|state| {
            let object_code = route.with_value(|r| r.object_code.clone());
            object_label(
                state.loaded().and_then(|r| r.view_content.as_ref()),
                &object_code,
            )
        })
    };
    let view_name = move || {
        layout.with(|state| {
            state
                .loaded()
                .and_then(|r| r.view_content.as_ref())
                .and_then(|vc| vc.name.clone())
                .unwrap_or_default()
        })
    };

    let on_filters_changed = Callback::new(move |_: ()| {
        load_data(1, FILTER_DEBOUNCE_MS);
    });
    let on_filters_cleared = Callback::new(move |_: ()| {
        filters.update(|t| t.clear());
        load_data(1, 0);
    });
    let editor = FilterEditorContext {
        tree: filters,
        catalog: catalog.into(),
        on_change: on_filters_changed,
    };
    let table_ctx = TableContext {
        rows: Signal::derive(move || data.with(|d| d.rows.clone())),
        page_state: page_state.into(),
        on_page_change: Callback::new(move |index: usize| {
            let page = page_state
                .try_update(|s| s.page_clicked(index))
                .unwrap_or(1);
            load_data(page, 0);
        }),
    };

    let active_filters = Signal::derive(move || filters.with(|t| t.predicate_count()));

    view! {
        <div class="page dynamic-view" data-object=move || route.with_value(|r| r.object_code.clone())>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{heading}</h1>
                    <span class="page__status">{view_name}</span>
                </div>
                <div class="page__header-right">
                    <button
                        class="button button--secondary"
                        title="Refresh"
                        disabled=move || {
                            page_state.with(|s| s.loading) || layout.with(|s| s.is_loading())
                        }
                        on:click=move |_| {
                            let loaded = layout.with_untracked(|s| s.loaded().is_some());
                            match page_state.with_untracked(|s| s.refresh_target(loaded)) {
                                RefreshTarget::Layout => load_layout(),
                                RefreshTarget::Data(page) => load_data(page, 0),
                            }
                        }
                    >
                        {icon("refresh")}
                        " Refresh"
                    </button>
                </div>
            </div>

            {move || layout.with(|state| state.error().map(|err| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{err.to_string()}</span>
                    <button class="button button--ghost" on:click=move |_| load_layout()>"Retry"</button>
                </div>
            }))}

            {move || data.with(|d| d.error.clone()).map(|err| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__icon">"⚠"</span>
                    <span class="warning-box__text">{err}</span>
                </div>
            })}

            <div class="page__content">
                <Show when=move || !catalog.with(|c| c.is_empty())>
                    <FilterPanel
                        is_expanded=filters_expanded
                        active_filters_count=active_filters
                        on_clear=on_filters_cleared
                    >
                        <FilterEditor ctx=editor />
                    </FilterPanel>
                </Show>

                {move || {
                    if layout.with(|s| s.is_loading()) {
                        return view! {
                            <div class="loading-state">"Loading view..."</div>
                        }
                        .into_any();
                    }
                    render_nodes(plan.get(), table_ctx)
                }}
            </div>
        </div>
    }
}
