//! Session middleware configuration.
//!
//! Sessions live in a bounded in-memory store. Idle sessions expire and the
//! least recently used ones are evicted once the store is full, so neither
//! carts nor session records outlive the process or grow without limit.

use std::time::Duration;

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "loperez_session";

/// Session expiry time in seconds (30 minutes of inactivity).
pub const SESSION_EXPIRY_SECONDS: u64 = 30 * 60;

/// Upper bound on sessions (and carts) held in memory.
pub const MAX_SESSIONS: u64 = 10_000;

/// Idle time after which a session and its cart are dropped.
#[must_use]
pub const fn session_idle_timeout() -> Duration {
    Duration::from_secs(SESSION_EXPIRY_SECONDS)
}

/// Create the session layer with a bounded in-memory store.
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    let store = MokaStore::new(Some(MAX_SESSIONS));

    #[allow(clippy::cast_possible_wrap)] // 30 minutes fits in i64
    let expiry_seconds = SESSION_EXPIRY_SECONDS as i64;

    SessionManagerLayer::new(store)
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(expiry_seconds),
        ))
        .with_secure(config.is_secure())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
        // Refresh the stored record on every request so idle time counts from the last visit
        .with_always_save(true)
}
