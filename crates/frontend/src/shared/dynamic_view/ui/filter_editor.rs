//! Recursive editor for the filter expression tree.
//!
//! Group and leaf rows are keyed by their `filter_item` key, so editing a
//! value patches the existing input instead of rebuilding the row.

use contracts::shared::dynamic_view::{FilterOperator, GroupOperator};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::shared::components::filter_panel::FilterTag;
use crate::shared::dynamic_view::catalog::FieldCatalog;
use crate::shared::dynamic_view::filter_tree::{
    FilterExpressionTree, GroupPath, LeafEntry, LeafUpdate,
};
use crate::shared::icons::icon;

#[derive(Clone, Copy)]
pub struct FilterEditorContext {
    pub tree: RwSignal<FilterExpressionTree>,
    pub catalog: Signal<FieldCatalog>,
    /// Fired after every edit that changed the tree
    pub on_change: Callback<()>,
}

impl FilterEditorContext {
    fn edit(&self, f: impl FnOnce(&mut FilterExpressionTree) -> bool) {
        if self.tree.try_update(f).unwrap_or(false) {
            self.on_change.run(());
        }
    }
}

#[component]
pub fn FilterEditor(ctx: FilterEditorContext) -> impl IntoView {
    let tags = move || {
        ctx.tree
            .with(|t| t.leaf_entries())
            .into_iter()
            .map(|entry| {
                let LeafEntry {
                    path,
                    key,
                    predicate,
                } = entry;
                let label =
                    ctx.catalog.with(|c| predicate.display_text(c.display_name(&key)));
                let on_remove = Callback::new(move |_: ()| {
                    ctx.edit(|t| t.delete_field(&path, &key));
                });
                view! { <FilterTag label=label on_remove=on_remove /> }
            })
            .collect_view()
    };

    view! {
        <div class="filter-editor">
            <FilterGroupEditor ctx=ctx path=GroupPath::root() />
            <div class="filter-editor__tags">{tags}</div>
        </div>
    }
}

/// One AND/OR group with its leaves and nested groups
#[component]
fn FilterGroupEditor(ctx: FilterEditorContext, path: GroupPath) -> AnyView {
    let depth = path.depth();
    let parent = path
        .split_last()
        .map(|(parent, key)| (parent, key.to_string()));
    let path = StoredValue::new(path);

    let operator = move || {
        ctx.tree.with(|t| {
            path.with_value(|p| t.group(p).map(|g| g.operator).unwrap_or_default())
        })
    };
    let entries = move || {
        ctx.tree.with(|t| {
            path.with_value(|p| {
                t.group(p)
                    .map(|g| {
                        g.filter_item
                            .iter()
                            .map(|(key, item)| (key.clone(), item.is_group()))
                            .collect::<Vec<_>>()
                    })
                    .unwrap_or_default()
            })
        })
    };
    let field_options = move || {
        ctx.catalog.with(|c| {
            c.fields()
                .iter()
                .map(|f| (f.field_code.clone(), f.field_name.clone()))
                .collect::<Vec<_>>()
        })
    };

    let on_operator_change = move |ev: leptos::ev::Event| {
        if let Some(op) = GroupOperator::parse(&event_target_value(&ev)) {
            ctx.edit(|t| path.with_value(|p| t.update_operator(p, op)));
        }
    };
    let on_field_pick = move |ev: leptos::ev::Event| {
        let code = event_target_value(&ev);
        if code.is_empty() {
            return;
        }
        ctx.edit(|t| path.with_value(|p| t.add_field(p, &code)));
        if let Some(select) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlSelectElement>().ok())
        {
            select.set_value("");
        }
    };
    let on_add_group = move |_| {
        ctx.edit(|t| path.with_value(|p| t.add_group(p).is_some()));
    };

    view! {
        <div class=format!("filter-group filter-group--depth-{}", depth)>
            <div class="filter-group__header">
                <select
                    class="form__select filter-group__operator"
                    prop:value=move || operator().as_str()
                    on:change=on_operator_change
                >
                    {GroupOperator::all()
                        .iter()
                        .map(|op| view! { <option value=op.as_str()>{op.as_str()}</option> })
                        .collect_view()}
                </select>
                <select class="form__select filter-group__add-field" on:change=on_field_pick>
                    <option value="" selected=true>"+ Field"</option>
                    <For
                        each=field_options
                        key=|(code, _)| code.clone()
                        children=|(code, name)| view! { <option value=code>{name}</option> }
                    />
                </select>
                <button class="button button--ghost button--smallall" on:click=on_add_group>
                    {icon("plus")}
                    " Group"
                </button>
                {parent.map(|(parent, key)| view! {
                    <button
                        class="button button--ghost button--smallall filter-group__delete"
                        title="Delete group"
                        on:click=move |_| ctx.edit(|t| t.delete_group(&parent, &key))
                    >
                        {icon("trash")}
                    </button>
                })}
            </div>
            <div class="filter-group__items">
                <For
                    each=entries
                    key=|entry| entry.clone()
                    children=move |(key, is_group)| {
                        let child_path = path.with_value(|p| p.child(key.clone()));
                        if is_group {
                            view! { <FilterGroupEditor ctx=ctx path=child_path /> }.into_any()
                        } else {
                            let group_path = path.get_value();
                            view! { <FilterLeafEditor ctx=ctx path=group_path field_key=key /> }
                                .into_any()
                        }
                    }
                />
            </div>
        </div>
    }
    .into_any()
}

/// One `field operator value` row
#[component]
fn FilterLeafEditor(ctx: FilterEditorContext, path: GroupPath, field_key: String) -> impl IntoView {
    let path = StoredValue::new(path);
    let key = StoredValue::new(field_key);

    let predicate = move || {
        ctx.tree.with(|t| {
            path.with_value(|p| key.with_value(|k| t.leaf(p, k).cloned()))
        })
    };
    let operator = move || predicate().map(|p| p.operator).unwrap_or_default();
    let value = move || predicate().map(|p| p.value).unwrap_or_default();
    let label = move || ctx.catalog.with(|c| key.with_value(|k| c.display_name(k).to_string()));

    let update = move |change: LeafUpdate| {
        ctx.edit(|t| path.with_value(|p| key.with_value(|k| t.update_field(p, k, change))));
    };

    view! {
        <div class="filter-leaf">
            <span class="filter-leaf__field">{label}</span>
            <select
                class="form__select filter-leaf__operator"
                prop:value=move || operator().as_str()
                on:change=move |ev| {
                    if let Some(op) = FilterOperator::parse(&event_target_value(&ev)) {
                        update(LeafUpdate::Operator(op));
                    }
                }
            >
                {FilterOperator::all()
                    .iter()
                    .map(|op| view! { <option value=op.as_str()>{op.label()}</option> })
                    .collect_view()}
            </select>
            <Show when=move || operator().takes_value()>
                <input
                    class="form__input filter-leaf__value"
                    type="text"
                    placeholder="Value"
                    prop:value=value
                    on:input=move |ev| update(LeafUpdate::Value(event_target_value(&ev)))
                />
            </Show>
            <button
                class="button button--ghost button--smallall"
                title="Remove"
                on:click=move |_| {
                    ctx.edit(|t| path.with_value(|p| key.with_value(|k| t.delete_field(p, k))));
                }
            >
                {icon("trash")}
            </button>
        </div>
    }
}
