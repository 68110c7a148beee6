//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, application title, the signed-in user and
//! the sign-out action.

use crate::layout::global_context::use_layout;
use crate::shared::icons::icon;
use crate::system::auth::context::{do_logout, use_auth, use_session};
use crate::system::auth::SIGN_IN_PATH;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_layout();
    let auth_state = use_auth();
    let session = use_session();
    let navigate = use_navigate();

    let logout = move |_| {
        do_logout(auth_state);
        navigate(SIGN_IN_PATH, Default::default());
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Hide navigation" } else { "Show navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">"Property Admin"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>
                        {move || session.get().name.unwrap_or_else(|| "Admin".to_string())}
                    </span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sign out">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}
