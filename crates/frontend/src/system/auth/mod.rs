pub mod api;
pub mod context;
pub mod guard;
pub mod storage;

/// Route of the sign-in screen.
pub const SIGN_IN_PATH: &str = "/sign-in";
