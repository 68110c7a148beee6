use crate::shared::icons::icon;
use contracts::shared::list_engine::{PageMeta, PaginationItem};
use leptos::prelude::*;

/// PaginationControls component - page buttons with ellipses
///
/// Renders `‹ 1 … 4 5 [6] 7 8 … 42 ›` from the engine's pagination items,
/// plus a "showing X–Y of N" counter and an optional page size selector.
#[component]
pub fn PaginationControls(
    /// Page numbers, totals and the button model of the current page
    #[prop(into)]
    meta: Signal<PageMeta>,

    /// Callback when page changes
    on_page_change: Callback<usize>,

    /// Current page size, with `on_page_size_change` shows the selector
    #[prop(optional, into)]
    page_size: Option<Signal<usize>>,

    #[prop(optional)]
    on_page_size_change: Option<Callback<usize>>,

    /// Available page size options (defaults to [10, 25, 50, 100])
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let current_page = Signal::derive(move || meta.with(|m| m.current_page));
    let total_pages = Signal::derive(move || meta.with(|m| m.total_pages));

    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);

    let size_selector = match (page_size, on_page_size_change) {
        (Some(page_size), Some(on_size)) => view! {
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse() {
                        on_size.run(size);
                    }
                }
                prop:value=move || page_size.get().to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size.get() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        }
        .into_any(),
        _ => view! { <></> }.into_any(),
    };

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">
                {move || meta.with(|m| {
                    if m.total_items == 0 {
                        "No records".to_string()
                    } else {
                        format!("Showing {}–{} of {}", m.start_index + 1, m.end_index, m.total_items)
                    }
                })}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            {move || {
                let current = current_page.get();
                meta.with(|m| m.pagination.clone())
                    .into_iter()
                    .map(|item| match item {
                        PaginationItem::Page(n) => view! {
                            <button
                                class=if n == current { "pagination-btn pagination-btn--active" } else { "pagination-btn" }
                                on:click=move |_| on_page_change.run(n)
                            >
                                {n}
                            </button>
                        }
                        .into_any(),
                        PaginationItem::Ellipsis => view! {
                            <span class="pagination-ellipsis">"…"</span>
                        }
                        .into_any(),
                    })
                    .collect_view()
            }}
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            {size_selector}
        </div>
    }
}
