use leptos::prelude::*;
use leptos_router::components::Redirect;

use super::context::use_auth;
use super::SIGN_IN_PATH;

/// Renders `children` only for a present, unexpired token; otherwise
/// redirects to the sign-in screen.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth_state = use_auth();
    let children = StoredValue::new(children);

    let authorized = move || auth_state.with(|s| s.is_valid(chrono::Utc::now().timestamp()));

    view! {
        <Show
            when=authorized
            fallback=move || {
                if auth_state.with_untracked(|s| s.access_token.is_some()) {
                    log::info!("access token expired, redirecting to sign-in");
                    super::storage::clear_session();
                }
                view! { <Redirect path=SIGN_IN_PATH /> }
            }
        >
            {children.with_value(|c| c())}
        </Show>
    }
}
