use contracts::domain::a004_subscription::aggregate::{Subscription, FACET_PLAN, FACET_STATUS};
use leptos::prelude::*;
use thaw::*;

use crate::domain::a004_subscription::api;
use crate::domain::a004_subscription::ui::details::SubscriptionEditForm;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::facet_select::FacetSelect;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::{format_date, format_price};
use crate::shared::icons::icon;
use crate::shared::list_state::ListState;
use crate::shared::list_utils::{highlight_matches, or_dash, status_badge_class, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn SubscriptionList() -> impl IntoView {
    let list = ListState::new("subscriptions", Subscription::list_filter(), 10);
    let filters_expanded = RwSignal::new(true);
    let editing: RwSignal<Option<Subscription>> = RwSignal::new(None);

    let load_data = move || list.remote.load(api::fetch_subscriptions());
    load_data();

    let query = list.query();
    let bounds = list.date_bounds();
    let date_from = Signal::derive(move || bounds.get().0);
    let date_to = Signal::derive(move || bounds.get().1);

    let on_saved = Callback::new(move |saved: Subscription| {
        list.remote.data.update(|rows| {
            if let Some(row) = rows.iter_mut().find(|s| s.id == saved.id) {
                *row = saved;
            }
        });
        editing.set(None);
    });

    view! {
        <PageFrame page_id="a004_subscription--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Subscriptions"</h1>
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
                                    placeholder="Name, mobile, plan or transaction..."
                                />
                            </div>
                            <FacetSelect
                                label="Status"
                                options=list.facet_options(FACET_STATUS)
                                value=list.facet_value(FACET_STATUS)
                                on_change=Callback::new(move |v| list.set_facet(FACET_STATUS, v))
                            />
                            <FacetSelect
                                label="Plan"
                                options=list.facet_options(FACET_PLAN)
                                value=list.facet_value(FACET_PLAN)
                                on_change=Callback::new(move |v| list.set_facet(FACET_PLAN, v))
                            />
                            <DateRangePicker
                                label="Paid".to_string()
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
                                <TableHeaderCell min_width=150.0>"Customer"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Mobile"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Plan"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Amount"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Transaction"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Paid on"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Expires"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Status"</TableHeaderCell>
                                <TableHeaderCell min_width=50.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.numbered_rows().get()
                                key=|(n, s)| (*n, s.id, s.subscription_status.clone(), s.subscription_expiry_date.clone())
                                children=move |(row_no, subscription)| {
                                    let name = or_dash(subscription.name.as_deref());
                                    let mobile = or_dash(subscription.mobile.as_deref());
                                    let plan = or_dash(subscription.subscription_package.as_deref());
                                    let amount = format_price(subscription.amount);
                                    let transaction = or_dash(subscription.transaction_id.as_deref());
                                    let paid = format_date(subscription.payment_date.as_deref());
                                    let expires = format_date(subscription.subscription_expiry_date.as_deref());
                                    let status = or_dash(subscription.subscription_status.as_deref());
                                    let status_class = status_badge_class(&status);
                                    let for_edit = subscription.clone();
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
                                                <TableCellLayout>
                                                    {move || highlight_matches(&plan, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{amount}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&transaction, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{paid}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{expires}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class=status_class>{status}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| editing.set(Some(for_edit.clone()))
                                                    attr:title="Edit"
                                                >
                                                    {icon("edit")}
                                                </Button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                    {move || (!list.remote.loading.get() && list.page.with(|p| p.total_items == 0)).then(|| view! {
                        <div class="table-empty">"No subscriptions match the current filters"</div>
                    })}
                </div>

                {move || editing.get().map(|subscription| view! {
                    <SubscriptionEditForm
                        subscription=subscription
                        on_close=Callback::new(move |_| editing.set(None))
                        on_saved=on_saved
                    />
                })}
            </div>
        </PageFrame>
    }
}
