use crate::shared::dynamic_view::pagination::{page_items, PageItem};
use crate::shared::icons::icon;
use leptos::prelude::*;

/// PaginationControls component - Prev, numbered pages with `…` breaks, Next
#[component]
pub fn PaginationControls(
    /// Current page (1-indexed)
    #[prop(into)]
    current_page: Signal<u32>,

    /// Total number of pages
    #[prop(into)]
    total_pages: Signal<u32>,

    /// Callback when a page is selected (0-indexed)
    on_page_change: Callback<usize>,

    /// Disables every control while a query is in flight
    #[prop(into)]
    disabled: Signal<bool>,
) -> impl IntoView {
    let is_disabled = move || disabled.get();

    let items = move || {
        page_items(current_page.get(), total_pages.get())
            .into_iter()
            .map(|item| match item {
                PageItem::Previous { enabled } => view! {
                    <button
                        class="pagination-btn"
                        title="Previous page"
                        disabled=move || !enabled || is_disabled()
                        on:click=move |_| {
                            let current = current_page.get_untracked() as usize;
                            // 1-indexed page n sits at index n - 1
                            on_page_change.run(current.saturating_sub(2));
                        }
                    >
                        {icon("chevron-left")}
                    </button>
                }
                .into_any(),
                PageItem::Page { index, number, active } => {
                    let class = if active {
                        "pagination-btn pagination-btn--active"
                    } else {
                        "pagination-btn"
                    };
                    view! {
                        <button
                            class=class
                            disabled=move || active || is_disabled()
                            on:click=move |_| on_page_change.run(index)
                        >
                            {number}
                        </button>
                    }
                    .into_any()
                }
                PageItem::Break => view! { <span class="pagination-break">"…"</span> }.into_any(),
                PageItem::Next { enabled } => view! {
                    <button
                        class="pagination-btn"
                        title="Next page"
                        disabled=move || !enabled || is_disabled()
                        on:click=move |_| {
                            let current = current_page.get_untracked() as usize;
                            on_page_change.run(current);
                        }
                    >
                        {icon("chevron-right")}
                    </button>
                }
                .into_any(),
            })
            .collect_view()
    };

    view! {
        <div class="pagination-controls">
            {items}
            <span class="pagination-info">
                {move || format!("{} / {}", current_page.get(), total_pages.get().max(1))}
            </span>
        </div>
    }
}
