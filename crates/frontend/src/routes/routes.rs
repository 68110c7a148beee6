use contracts::domain::a007_static_page::aggregate::StaticPageKind;
use leptos::prelude::*;
use leptos_router::components::{Outlet, ParentRoute, Route, Router, Routes};
use leptos_router::hooks::use_params_map;
use leptos_router::path;

use crate::dashboards::OverviewDashboard;
use crate::domain::a001_property::ui::list::PropertyList;
use crate::domain::a002_lead::ui::list::LeadList;
use crate::domain::a003_employee::ui::list::EmployeeList;
use crate::domain::a004_subscription::ui::list::SubscriptionList;
use crate::domain::a005_ad::ui::list::AdList;
use crate::domain::a006_career::ui::list::CareerList;
use crate::domain::a007_static_page::ui::editor::StaticPageEditor;
use crate::domain::a008_user::ui::list::UserList;
use crate::layout::Shell;
use crate::system::auth::guard::RequireAuth;
use crate::system::pages::login::LoginPage;

/// Everything except sign-in: guarded and wrapped in the shell.
#[component]
fn MainLayout() -> impl IntoView {
    view! {
        <RequireAuth>
            <Shell>
                <Outlet />
            </Shell>
        </RequireAuth>
    }
}

#[component]
fn StaticPageRoute() -> impl IntoView {
    let params = use_params_map();

    move || {
        let slug = params.read().get("slug");
        match slug.as_deref().and_then(StaticPageKind::from_slug) {
            Some(kind) => view! { <StaticPageEditor kind=kind /> }.into_any(),
            None => view! { <NotFound /> }.into_any(),
        }
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page page--system">
            <h1 class="page__title">"Page not found"</h1>
            <a href="/">"Back to dashboard"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/sign-in") view=LoginPage />
                <ParentRoute path=path!("") view=MainLayout>
                    <Route path=path!("") view=OverviewDashboard />
                    <Route path=path!("/users") view=UserList />
                    <Route path=path!("/properties") view=PropertyList />
                    <Route path=path!("/leads") view=LeadList />
                    <Route path=path!("/employees") view=EmployeeList />
                    <Route path=path!("/subscriptions") view=SubscriptionList />
                    <Route path=path!("/ads") view=AdList />
                    <Route path=path!("/careers") view=CareerList />
                    <Route path=path!("/pages/:slug") view=StaticPageRoute />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
