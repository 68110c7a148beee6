use contracts::system::session::SessionContext;
use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "access_token";
const USER_ID_KEY: &str = "userId";
const NAME_KEY: &str = "name";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn set(key: &str, value: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(key, value);
    }
}

fn get(key: &str) -> Option<String> {
    get_local_storage()?
        .get_item(key)
        .ok()?
        .filter(|v| !v.is_empty())
}

/// Save access token to localStorage
pub fn save_access_token(token: &str) {
    set(ACCESS_TOKEN_KEY, token);
}

/// Get access token from localStorage
pub fn get_access_token() -> Option<String> {
    get(ACCESS_TOKEN_KEY)
}

/// Persist the identity fields used for `created_by` / `created_userID`.
pub fn save_identity(user_id: &str, name: &str) {
    set(USER_ID_KEY, user_id);
    set(NAME_KEY, name);
}

/// Snapshot of the stored identity.
pub fn load_session() -> SessionContext {
    SessionContext {
        user_id: get(USER_ID_KEY),
        name: get(NAME_KEY),
    }
}

/// Clear token and identity
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_ID_KEY);
        let _ = storage.remove_item(NAME_KEY);
    }
}
