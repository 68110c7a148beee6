use contracts::domain::a002_lead::aggregate::{Lead, UpdateLeadStatusDto, FACET_SOURCE, FACET_STATUS, LEAD_STATUSES};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a002_lead::api;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::facet_select::FacetSelect;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::status_select::StatusSelect;
use crate::shared::date_utils::format_datetime;
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, or_dash, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

#[component]
pub fn LeadList() -> impl IntoView {
    let list = ListState::new("leads", Lead::list_filter(), 10);
    let session = use_session();
    let filters_expanded = RwSignal::new(true);
    let (action_error, set_action_error) = signal::<Option<String>>(None);
    let busy_row = RwSignal::new(None::<i64>);

    let load_data = move || list.remote.load(api::fetch_leads());
    load_data();

    let query = list.query();
    let bounds = list.date_bounds();
    let date_from = Signal::derive(move || bounds.get().0);
    let date_to = Signal::derive(move || bounds.get().1);

    let update_status = move |id: i64, status: String| {
        let dto = UpdateLeadStatusDto {
            id,
            status: status.clone(),
            updated_by: session.get_untracked().stamp().created_by,
        };
        set_action_error.set(None);
        busy_row.set(Some(id));
        spawn_local(async move {
            match api::update_status(&dto).await {
                Ok(()) => list.remote.data.update(|rows| {
                    if let Some(row) = rows.iter_mut().find(|l| l.id == id) {
                        row.status = Some(status);
                    }
                }),
                Err(e) => set_action_error.set(Some(format!("Failed to update lead: {}", e))),
            }
            busy_row.set(None);
        });
    };

    view! {
        <PageFrame page_id="a002_lead--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Leads"</h1>
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
                                    placeholder="Name, mobile, email or property..."
                                />
                            </div>
                            <FacetSelect
                                label="Status"
                                options=list.facet_options(FACET_STATUS)
                                value=list.facet_value(FACET_STATUS)
                                on_change=Callback::new(move |v| list.set_facet(FACET_STATUS, v))
                            />
                            <FacetSelect
                                label="Source"
                                options=list.facet_options(FACET_SOURCE)
                                value=list.facet_value(FACET_SOURCE)
                                on_change=Callback::new(move |v| list.set_facet(FACET_SOURCE, v))
                            />
                            <DateRangePicker
                                label="Received".to_string()
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
                                <TableHeaderCell min_width=150.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Mobile"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=200.0>"Property"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>"Source"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Received"</TableHeaderCell>
                                <TableHeaderCell min_width=130.0>"Status"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.numbered_rows().get()
                                key=|(n, l)| (*n, l.id, l.status.clone())
                                children=move |(row_no, lead)| {
                                    let id = lead.id;
                                    let name = lead.name.clone();
                                    let mobile = or_dash(lead.mobile.as_deref());
                                    let email = or_dash(lead.email.as_deref());
                                    let property = match (&lead.property_name, &lead.unique_property_id) {
                                        (Some(name), Some(uid)) => format!("{} ({})", name, uid),
                                        (Some(name), None) => name.clone(),
                                        (None, Some(uid)) => uid.clone(),
                                        (None, None) => "-".to_string(),
                                    };
                                    let source = or_dash(lead.source.as_deref());
                                    let received = format_datetime(lead.created_at.as_deref());
                                    let status = lead.status.clone().unwrap_or_default();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row_no}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-weight: 500;">
                                                        {move || highlight_matches(&name, &query.get())}
                                                    </span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || highlight_matches(&mobile, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&email, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&property, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{source}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{received}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <StatusSelect
                                                    options=&LEAD_STATUSES
                                                    value=status
                                                    disabled=Signal::derive(move || busy_row.get() == Some(id))
                                                    on_change=Callback::new(move |next| update_status(id, next))
                                                />
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!list.remote.loading.get() && list.page.with(|p| p.total_items == 0)).then(|| view! {
                        <div class="table-empty">"No leads match the current filters"</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
