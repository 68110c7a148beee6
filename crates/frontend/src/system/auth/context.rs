use contracts::shared::api_error::ApiError;
use contracts::system::session::{is_token_expired, SessionContext};
use leptos::prelude::*;

use super::{api, storage};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub session: SessionContext,
}

impl AuthState {
    /// Reads the token and identity stored by the last sign-in.
    pub fn restore() -> Self {
        Self {
            access_token: storage::get_access_token(),
            session: storage::load_session(),
        }
    }

    /// Token present and its `exp` claim not yet passed.
    pub fn is_valid(&self, now_unix: i64) -> bool {
        self.access_token
            .as_deref()
            .map(|t| !is_token_expired(t, now_unix))
            .unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let auth_state = RwSignal::new(AuthState::restore());
    provide_context(auth_state);
    children()
}

/// Hook to access auth state
pub fn use_auth() -> RwSignal<AuthState> {
    match use_context::<RwSignal<AuthState>>() {
        Some(state) => state,
        None => {
            log::error!("AuthProvider not found in component tree");
            RwSignal::new(AuthState::default())
        }
    }
}

/// Identity of the signed-in user for author stamping.
pub fn use_session() -> Signal<SessionContext> {
    let auth_state = use_auth();
    Signal::derive(move || auth_state.with(|s| s.session.clone()))
}

/// Sign in, persist token and identity, update the context.
pub async fn do_login(auth_state: RwSignal<AuthState>, email: String, password: String) -> Result<(), ApiError> {
    let response = api::login(email, password).await?;

    let user_id = response.user.id.to_string();
    storage::save_access_token(&response.token);
    storage::save_identity(&user_id, &response.user.name);
    log::info!("signed in as {} ({})", response.user.name, user_id);

    auth_state.set(AuthState {
        access_token: Some(response.token),
        session: SessionContext::new(user_id, response.user.name),
    });
    Ok(())
}

/// Clear the session locally; the backend keeps no refresh token to revoke.
pub fn do_logout(auth_state: RwSignal<AuthState>) {
    storage::clear_session();
    auth_state.set(AuthState::default());
    log::info!("signed out");
}
