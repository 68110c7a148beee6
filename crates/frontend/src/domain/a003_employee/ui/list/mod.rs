use contracts::domain::a003_employee::aggregate::{Employee, FACET_CITY, FACET_USER_TYPE};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a003_employee::api;
use crate::domain::a003_employee::ui::details::EmployeeDetails;
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

/// Which form is open over the list
#[derive(Clone, Debug, PartialEq)]
enum FormMode {
    Closed,
    Create,
    Edit(Employee),
}

#[component]
pub fn EmployeeList() -> impl IntoView {
    let list = ListState::new("employees", Employee::list_filter(), 10);
    let filters_expanded = RwSignal::new(true);
    let form_mode = RwSignal::new(FormMode::Closed);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let load_data = move || list.remote.load(api::fetch_employees());
    load_data();

    let query = list.query();
    let bounds = list.date_bounds();
    let date_from = Signal::derive(move || bounds.get().0);
    let date_to = Signal::derive(move || bounds.get().1);

    let delete_employee = move |employee: Employee| {
        if !confirm(&format!("Delete employee {}?", employee.name)) {
            return;
        }
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_employee(employee.id).await {
                Ok(()) => list.remote.data.update(|rows| rows.retain(|e| e.id != employee.id)),
                Err(e) => set_action_error.set(Some(format!("Failed to delete employee: {}", e))),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        form_mode.set(FormMode::Closed);
        load_data();
    });

    view! {
        <PageFrame page_id="a003_employee--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Employees"</h1>
                    <Badge>
                        {move || list.page.with(|p| p.total_items.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| form_mode.set(FormMode::Create)
                    >
                        {icon("plus")}
                        " New"
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
                                    placeholder="Name, email, mobile or designation..."
                                />
                            </div>
                            <FacetSelect
                                label="Role"
                                options=list.facet_options(FACET_USER_TYPE)
                                value=list.facet_value(FACET_USER_TYPE)
                                on_change=Callback::new(move |v| list.set_facet(FACET_USER_TYPE, v))
                            />
                            <FacetSelect
                                label="City"
                                options=list.facet_options(FACET_CITY)
                                value=list.facet_value(FACET_CITY)
                                on_change=Callback::new(move |v| list.set_facet(FACET_CITY, v))
                            />
                            <DateRangePicker
                                label="Joined".to_string()
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
                                <TableHeaderCell min_width=180.0>"Email"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Mobile"</TableHeaderCell>
                                <TableHeaderCell min_width=140.0>"Designation"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Role"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"City"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Joined"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.numbered_rows().get()
                                // whole-row key so an edited row re-renders
                                key=|(n, e)| (*n, format!("{:?}", e))
                                children=move |(row_no, employee)| {
                                    let name = employee.name.clone();
                                    let email = or_dash(employee.email.as_deref());
                                    let mobile = or_dash(employee.mobile.as_deref());
                                    let designation = or_dash(employee.designation.as_deref());
                                    let role = or_dash(employee.user_type.as_deref());
                                    let city = or_dash(employee.city.as_deref());
                                    let joined = format_date(employee.created_date.as_deref());
                                    let for_edit = employee.clone();
                                    let for_delete = employee.clone();
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
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&designation, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{role}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{city}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{joined}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| form_mode.set(FormMode::Edit(for_edit.clone()))
                                                        attr:title="Edit"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete_employee(for_delete.clone())
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
                        <div class="table-empty">"No employees match the current filters"</div>
                    })}
                </div>

                {move || match form_mode.get() {
                    FormMode::Closed => None,
                    FormMode::Create => Some(view! {
                        <EmployeeDetails
                            employee=None
                            on_saved=on_saved
                            on_close=Callback::new(move |_| form_mode.set(FormMode::Closed))
                        />
                    }),
                    FormMode::Edit(employee) => Some(view! {
                        <EmployeeDetails
                            employee=Some(employee)
                            on_saved=on_saved
                            on_close=Callback::new(move |_| form_mode.set(FormMode::Closed))
                        />
                    }),
                }}
            </div>
        </PageFrame>
    }
}
