use contracts::domain::a001_property::aggregate::{
    Property, PropertyStatus, UpdatePropertyStatusDto, FACET_CITY, FACET_PROPERTY_FOR, FACET_STATE,
    FACET_STATUS,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_property::api;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::facet_select::FacetSelect;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, format_price};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, or_dash, status_badge_class, SearchInput};
use crate::shared::modal_frame::confirm;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

fn status_label(value: &str) -> String {
    PropertyStatus::ALL
        .iter()
        .find(|s| s.as_str() == value)
        .map(|s| s.label().to_string())
        .unwrap_or_else(|| value.to_string())
}

#[component]
pub fn PropertyList() -> impl IntoView {
    let list = ListState::new("properties", Property::list_filter(), 10);
    let session = use_session();
    let filters_expanded = RwSignal::new(true);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    // unique_property_id of the row with a request in flight
    let busy_row = RwSignal::new(None::<String>);

    let load_data = move || list.remote.load(api::fetch_properties());
    load_data();

    let query = list.query();
    let bounds = list.date_bounds();
    let date_from = Signal::derive(move || bounds.get().0);
    let date_to = Signal::derive(move || bounds.get().1);

    let change_status = move |property_id: String, status: PropertyStatus| {
        let dto = UpdatePropertyStatusDto {
            unique_property_id: property_id.clone(),
            property_status: status,
            updated_by: session.get_untracked().stamp().created_by,
        };
        set_action_error.set(None);
        busy_row.set(Some(property_id.clone()));
        spawn_local(async move {
            match api::update_status(&dto).await {
                Ok(()) => {
                    log::info!("property {} -> {}", property_id, status.as_str());
                    list.remote.data.update(|rows| {
                        if let Some(row) = rows.iter_mut().find(|p| p.unique_property_id == property_id) {
                            row.property_status = Some(status.as_str().to_string());
                        }
                    });
                }
                Err(e) => set_action_error.set(Some(format!("Failed to update status: {}", e))),
            }
            busy_row.set(None);
        });
    };

    let delete_property = move |property: Property| {
        if !confirm(&format!("Delete listing {} ({})?", property.property_name, property.unique_property_id)) {
            return;
        }
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_property(&property.unique_property_id).await {
                Ok(()) => list
                    .remote
                    .data
                    .update(|rows| rows.retain(|p| p.unique_property_id != property.unique_property_id)),
                Err(e) => set_action_error.set(Some(format!("Failed to delete listing: {}", e))),
            }
        });
    };

    view! {
        <PageFrame page_id="a001_property--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Properties"</h1>
                    <Badge>
                        {move || list.page.with(|p| p.total_items.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
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
                                    placeholder="Title, property ID, locality, owner..."
                                />
                            </div>
                            <FacetSelect
                                label="Status"
                                options=list.facet_options(FACET_STATUS)
                                value=list.facet_value(FACET_STATUS)
                                on_change=Callback::new(move |v| list.set_facet(FACET_STATUS, v))
                                option_label=status_label
                            />
                            <FacetSelect
                                label="Listed for"
                                options=list.facet_options(FACET_PROPERTY_FOR)
                                value=list.facet_value(FACET_PROPERTY_FOR)
                                on_change=Callback::new(move |v| list.set_facet(FACET_PROPERTY_FOR, v))
                            />
                            <FacetSelect
                                label="City"
                                options=list.facet_options(FACET_CITY)
                                value=list.facet_value(FACET_CITY)
                                on_change=Callback::new(move |v| list.set_facet(FACET_CITY, v))
                            />
                            <FacetSelect
                                label="State"
                                options=list.facet_options(FACET_STATE)
                                value=list.facet_value(FACET_STATE)
                                on_change=Callback::new(move |v| list.set_facet(FACET_STATE, v))
                            />
                            <DateRangePicker
                                label="Posted".to_string()
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
                                <TableHeaderCell min_width=100.0>"Property ID"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Title"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Location"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Price"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Owner"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>"Views"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Posted"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.numbered_rows().get()
                                key=|(n, p)| (*n, p.unique_property_id.clone(), p.property_status.clone())
                                children=move |(row_no, property)| {
                                    let unique_id = property.unique_property_id.clone();
                                    let title = property.property_name.clone();
                                    let kind = format!(
                                        "{} · {}",
                                        or_dash(property.property_type.as_deref()),
                                        or_dash(property.property_for.as_deref())
                                    );
                                    let locality = or_dash(property.locality.as_deref());
                                    let city = or_dash(property.city.as_deref());
                                    let price = format_price(property.property_cost);
                                    let owner = format!(
                                        "{} {}",
                                        property.owner_name.clone().unwrap_or_default(),
                                        property.owner_mobile.clone().unwrap_or_default()
                                    );
                                    let views = property.views.map(|v| v.to_string()).unwrap_or_else(|| "0".to_string());
                                    let posted = format_date(property.created_date.as_deref());
                                    let status = property.status();
                                    let status_text = property
                                        .property_status
                                        .as_deref()
                                        .map(status_label)
                                        .unwrap_or_else(|| "-".to_string());
                                    let status_class = status_badge_class(property.property_status.as_deref().unwrap_or_default());

                                    let id_for_busy = unique_id.clone();
                                    let is_busy = Signal::derive(move || busy_row.with(|b| b.as_deref() == Some(id_for_busy.as_str())));
                                    let id_approve = unique_id.clone();
                                    let id_reject = unique_id.clone();
                                    let property_for_delete = property.clone();
                                    let search_id = unique_id.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row_no}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || highlight_matches(&search_id, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {move || highlight_matches(&title, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{kind}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&locality, &query.get())}
                                                    ", "
                                                    {city.clone()}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{price}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(owner.trim(), &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{views}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{posted}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>{status_text}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Show when=move || status != Some(PropertyStatus::Approved)>
                                                        {
                                                            let id = id_approve.clone();
                                                            view! {
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    disabled=is_busy
                                                                    on_click=move |_| change_status(id.clone(), PropertyStatus::Approved)
                                                                    attr:title="Approve"
                                                                >
                                                                    {icon("check")}
                                                                </Button>
                                                            }
                                                        }
                                                    </Show>
                                                    <Show when=move || status != Some(PropertyStatus::Rejected)>
                                                        {
                                                            let id = id_reject.clone();
                                                            view! {
                                                                <Button
                                                                    appearance=ButtonAppearance::Subtle
                                                                    disabled=is_busy
                                                                    on_click=move |_| change_status(id.clone(), PropertyStatus::Rejected)
                                                                    attr:title="Reject"
                                                                >
                                                                    {icon("x")}
                                                                </Button>
                                                            }
                                                        }
                                                    </Show>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        disabled=is_busy
                                                        on_click=move |_| delete_property(property_for_delete.clone())
                                                        attr:title="Delete"
                                                    >
                                                        {icon("trash")}
                                                    </Button>
                                                </Flex>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!list.remote.loading.get() && list.page.with(|p| p.total_items == 0)).then(|| view! {
                        <div class="table-empty">"No listings match the current filters"</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
