use contracts::domain::a006_career::aggregate::{Career, FACET_EMPLOYMENT_TYPE, FACET_LOCATION};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a006_career::api;
use crate::domain::a006_career::ui::details::CareerDetails;
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
pub fn CareerList() -> impl IntoView {
    let list = ListState::new("careers", Career::list_filter(), 10);
    let filters_expanded = RwSignal::new(false);
    // Some(None) = new opening, Some(Some(c)) = editing c
    let editing: RwSignal<Option<Option<Career>>> = RwSignal::new(None);
    let (action_error, set_action_error) = signal::<Option<String>>(None);

    let load_data = move || list.remote.load(api::fetch_careers());
    load_data();

    let query = list.query();
    let bounds = list.date_bounds();
    let date_from = Signal::derive(move || bounds.get().0);
    let date_to = Signal::derive(move || bounds.get().1);

    let delete_career = move |career: Career| {
        if !confirm(&format!("Remove opening \"{}\"?", career.job_title)) {
            return;
        }
        set_action_error.set(None);
        spawn_local(async move {
            match api::delete_career(career.id).await {
                Ok(()) => list.remote.data.update(|rows| rows.retain(|c| c.id != career.id)),
                Err(e) => set_action_error.set(Some(format!("Failed to remove opening: {}", e))),
            }
        });
    };

    let on_saved = Callback::new(move |_| {
        editing.set(None);
        load_data();
    });

    view! {
        <PageFrame page_id="a006_career--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Careers"</h1>
                    <Badge>
                        {move || list.page.with(|p| p.total_items.to_string())}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| editing.set(Some(None))
                    >
                        {icon("plus")}
                        " New opening"
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
                                    placeholder="Title, location or description..."
                                />
                            </div>
                            <FacetSelect
                                label="Location"
                                options=list.facet_options(FACET_LOCATION)
                                value=list.facet_value(FACET_LOCATION)
                                on_change=Callback::new(move |v| list.set_facet(FACET_LOCATION, v))
                            />
                            <FacetSelect
                                label="Type"
                                options=list.facet_options(FACET_EMPLOYMENT_TYPE)
                                value=list.facet_value(FACET_EMPLOYMENT_TYPE)
                                on_change=Callback::new(move |v| list.set_facet(FACET_EMPLOYMENT_TYPE, v))
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
                                <TableHeaderCell min_width=180.0>"Job title"</TableHeaderCell>
                                <TableHeaderCell min_width=120.0>"Location"</TableHeaderCell>
                                <TableHeaderCell min_width=110.0>"Type"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Experience"</TableHeaderCell>
                                <TableHeaderCell min_width=240.0>"Description"</TableHeaderCell>
                                <TableHeaderCell min_width=100.0>"Posted"</TableHeaderCell>
                                <TableHeaderCell min_width=90.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>

                        <TableBody>
                            <For
                                each=move || list.numbered_rows().get()
                                key=|(n, c)| (*n, format!("{:?}", c))
                                children=move |(row_no, career)| {
                                    let title = career.job_title.clone();
                                    let location = or_dash(career.location.as_deref());
                                    let kind = or_dash(career.employment_type.as_deref());
                                    let experience = or_dash(career.experience.as_deref());
                                    let description = or_dash(career.description.as_deref());
                                    let posted = format_date(career.posted_date.as_deref());
                                    let for_edit = career.clone();
                                    let for_delete = career.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout>{row_no}</TableCellLayout>
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
                                                    {move || highlight_matches(&location, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>
                                                    <span class="badge badge--neutral">{kind}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{experience}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    {move || highlight_matches(&description, &query.get())}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{posted}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <Flex gap=FlexGap::Small>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| editing.set(Some(Some(for_edit.clone())))
                                                        attr:title="Edit"
                                                    >
                                                        {icon("edit")}
                                                    </Button>
                                                    <Button
                                                        appearance=ButtonAppearance::Subtle
                                                        on_click=move |_| delete_career(for_delete.clone())
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
                        <div class="table-empty">"No openings match the current filters"</div>
                    })}
                </div>

                {move || editing.get().map(|career| view! {
                    <CareerDetails
                        career=career
                        on_saved=on_saved
                        on_close=Callback::new(move |_| editing.set(None))
                    />
                })}
            </div>
        </PageFrame>
    }
}
