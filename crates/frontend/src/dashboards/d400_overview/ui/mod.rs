use contracts::dashboards::d400_overview::OverviewCounts;
use leptos::prelude::*;
use thaw::*;

use crate::dashboards::d400_overview::api;
use crate::shared::components::stat_card::StatCard;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::resource::RemoteValue;
use crate::system::auth::context::use_session;

#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let session = use_session();
    let counts: RemoteValue<Option<OverviewCounts>> = RemoteValue::new("overview", None);

    let load_data = move || {
        counts.load(async { api::fetch_overview().await.map(Some) });
    };
    load_data();

    let tile = move |pick: fn(&OverviewCounts) -> u64| {
        Signal::derive(move || counts.data.with(|c| c.as_ref().map(pick)))
    };
    let loading = Signal::derive(move || counts.loading.get());

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                    <span class="page__subtitle">
                        {move || session.with(|s| s.name.clone()).map(|name| format!("Welcome back, {}", name))}
                    </span>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| load_data()
                        disabled=loading
                    >
                        {icon("refresh")}
                        {move || if loading.get() { " Loading..." } else { " Refresh" }}
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || counts.error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                <div class="stat-grid">
                    <StatCard
                        label="Users"
                        icon_name="users"
                        value=tile(|c| c.users)
                        loading=loading
                        href="/users"
                    />
                    <StatCard
                        label="Properties"
                        icon_name="building"
                        value=tile(|c| c.properties)
                        loading=loading
                        href="/properties"
                    />
                    <StatCard
                        label="Property views"
                        icon_name="eye"
                        value=tile(|c| c.property_views)
                        loading=loading
                    />
                    <StatCard
                        label="Leads"
                        icon_name="phone"
                        value=tile(|c| c.leads)
                        loading=loading
                        href="/leads"
                    />
                </div>
            </div>
        </PageFrame>
    }
}
