pub mod jwt;
pub mod navigator;
pub mod store;

pub use jwt::{decode_token, TokenClaims};
pub use navigator::{Navigator, RecordingNavigator, TracingNavigator};
pub use store::{FileSessionStore, MemorySessionStore, SessionStore};

/// Observable session lifecycle.
///
/// `Refreshing` is only entered from `Authenticated` after a 401 and always
/// resolves to `Authenticated` (new token pair) or `Unauthenticated`
/// (refresh denied, storage cleared).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
    Refreshing,
}
