use contracts::domain::a005_ad::aggregate::{Ad, FACET_AD_TYPE, FACET_CITY};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a005_ad::api;
use crate::domain::a005_ad::ui::details::AdCreateForm;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::facet_select::FacetSelect;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, or_dash, SearchInput};
use crate::shared::modal_frame::confirm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn AdList() -> impl IntoView {
    let list = ListState::new("ads", Ad::list_filter(), 10);
    let filters_expanded = RwSignal::new(true);
    let creating = RwSignal::new(false);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let load_data = move || list.remote.load(api::fetch_ads());
    load_data();

    let query = list.query();
    let bounds = list.date_bounds();
    let date_from = Signal::derive(move || bounds.get().0);
    let date_to = Signal::derive(move || bounds.get().1);

    let delete_ad = move |ad: Ad| {
        if !confirm(&format!("Delete ad \"{}\"?", ad.ad_title)) {
            return;
        }
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_ad(ad.id).await {
                Ok(()) => list.remote.data.update(|rows| rows.retain(|a| a.id != ad.id)),
                Err(e) => set_action_error.set(Some(format!("Failed to delete ad: {}", e))),
            }
        });
    };

    view! {
        <PageFrame page_id="a005_ad--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Ads"</h1>
                    <Badge>
                        {move || list.page.with(|p| p.total_items.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| creating.set(true)>
                        {icon("plus")}
                        " New ad"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=Signal::derive(move || list.remote.loading.get())
                    >
                        {icon("refresh")}
                        {move || if list.remote.loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || list.remote.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}
                {move || action_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=list.active_filters()
                    on_clear=Callback::new(move |_| list.clear_filters())
                    pagination_controls=move || view! {
                        <PaginationControls
                            meta=list.meta()
                            on_page_change=list.page_change()
                            page_size=list.page_size()
                            on_page_size_change=list.page_size_change()
                        />
                    }
                    filter_content=move || view! {
                        <div class="filter-panel__row">
                            <div style="flex: 1; min-width: 240px; max-width: 320px;">
                                <SearchInput
                                    value=query
                                    on_change=Callback::new(move |q| list.set_query(q))
                                    reset=list.search_reset()
                                    placeholder="Title, description or link..."
                                />
                            </div>
                            <FacetSelect
                                label="Placement"
                                options=list.facet_options(FACET_AD_TYPE)
                                value=list.facet_value(FACET_AD_TYPE)
                                on_change=Callback::new(move |v| list.set_facet(FACET_AD_TYPE, v))
                            />
                            <FacetSelect
                                label="City"
                                options=list.facet_options(FACET_CITY)
                                value=list.facet_value(FACET_CITY)
                                on_change=Callback::new(move |v| list.set_facet(FACET_CITY, v))
                            />
                            <DateRangePicker
                                label="Starts".to_string()
                                date_from=date_from
                                date_to=date_to
                                on_change=Callback::new(move |(from, to)| list.set_date_range(from, to))
                            />
                        </div>
                    }
                />

                <div class="table-wrapper">
                    <Table attr:style="width: 100%;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell min_width=50.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=80.0>"Image"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Title"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Placement"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"City"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Runs"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Link"</TableHeaderCell>
                                <TableHeaderCell min_width=50.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.numbered_rows().get()
                                key=|(n, a)| (*n, a.id)
                                children=move |(row_no, ad)| {
                                    let title = ad.ad_title.clone();
                                    let placement = or_dash(ad.ad_type.as_deref());
                                    let city = ad.city.clone().filter(|c| !c.is_empty()).unwrap_or_else(|| "All".to_string());
                                    let runs = format!(
                                        "{} – {}",
                                        format_date(ad.start_date.as_deref()),
                                        format_date(ad.end_date.as_deref())
                                    );
                                    let link = ad.ad_link.clone().unwrap_or_default();
                                    let link_text = or_dash(ad.ad_link.as_deref());
                                    let image = ad.image_url.clone().filter(|u| !u.is_empty());
                                    let for_delete = ad.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row_no}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                {image.map(|src| view! {
                                                    <img class="ad-thumb" src=src alt="" style="max-height: 40px;" />
                                                })}
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {move || highlight_matches(&title, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{placement}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{city}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{runs}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <a href=link target="_blank" rel="noopener">
                                                        {move || highlight_matches(&link_text, &query.get())}
                                                    </a>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_ad(for_delete.clone())
                                                    attr:title="Delete"
                                                >
                                                    {icon("trash")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!list.remote.loading.get() && list.page.with(|p| p.total_items == 0)).then(|| view! {
                        <div class="table-empty">"No ads match the current filters"</div>
                    })}
                </div>

                <Show when=move || creating.get()>
                    <AdCreateForm
                        on_saved=Callback::new(move |_| {
                            creating.set(false);
                            load_data();
                        })
                        on_close=Callback::new(move |_| creating.set(false))
                    />
                </Show>
            </div>
        </PageFrame>
    }
}
