use contracts::domain::a008_user::aggregate::{User, FACET_STATE, FACET_USER_TYPE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a008_user::api;
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
pub fn UserList() -> impl IntoView {
    let list = ListState::new("users", User::list_filter(), 10);
    let filters_expanded = RwSignal::new(true);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let load_data = move || list.remote.load(api::fetch_users());
    load_data();

    let query = list.query();
    let (date_from, date_to) = {
        let bounds = list.date_bounds();
        (
            Signal::derive(move || bounds.get().0),
            Signal::derive(move || bounds.get().1),
        )
    };

    let delete_user = move |user: User| {
        if !confirm(&format!("Delete user {}?", user.display_name())) {
            return;
        }
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_user(user.id).await {
                Ok(()) => {
                    log::info!("user {} deleted", user.id);
                    list.remote.data.update(|rows| rows.retain(|u| u.id != user.id));
                }
                Err(e) => set_action_error.set(Some(format!("Failed to delete user: {}", e))),
            }
        });
    };

    view! {
        <PageFrame page_id="a008_user--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Users"</h1>
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
                                    placeholder="Name, email or mobile..."
                                />
                            </div>
                            <FacetSelect
                                label="User type"
                                options=list.facet_options(FACET_USER_TYPE)
                                value=list.facet_value(FACET_USER_TYPE)
                                on_change=Callback::new(move |v| list.set_facet(FACET_USER_TYPE, v))
                            />
                            <FacetSelect
                                label="State"
                                options=list.facet_options(FACET_STATE)
                                value=list.facet_value(FACET_STATE)
                                on_change=Callback::new(move |v| list.set_facet(FACET_STATE, v))
                            />
                            <DateRangePicker
                                label="Registered".to_string()
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
                                <TableHeaderCell min_width=60.0>"#"</TableHeaderCell>
                                <TableHeaderCell min_width=160.0>"Name"</TableHeaderCell>
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Mobile"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"City / State"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Registered"</TableHeaderCell>
                                <TableHeaderCell min_width=60.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.numbered_rows().get()
                                key=|(n, u)| (*n, u.id)
                                children=move |(row_no, user)| {
                                    let name = user.display_name().to_string();
                                    let email = or_dash(user.email.as_deref());
                                    let mobile = or_dash(user.mobile.as_deref());
                                    let location = format!(
                                        "{} / {}",
                                        or_dash(user.city.as_deref()),
                                        or_dash(user.state.as_deref())
                                    );
                                    let registered = format_date(user.created_date.as_deref());
                                    let user_type = or_dash(user.user_type.as_deref());
                                    let user_for_delete = user.clone();
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
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&email, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    {move || highlight_matches(&mobile, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{user_type}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{location}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{registered}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Button
                                                    appearance=ButtonAppearance::Subtle
                                                    on_click=move |_| delete_user(user_for_delete.clone())
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
                        <div class="table-empty">"No users match the current filters"</div>
                    })}
                </div>
            </div>
        </PageFrame>
    }
}
