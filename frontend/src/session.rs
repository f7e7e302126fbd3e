use web_sys::window;

use ema_admin_shared::AdminError;

const AUTH_FLAG_KEY: &str = "ema:admin:authenticated";

// Admin password, read at compile time from the deployment environment.
// The fallback is for local development only; this gate is a UI
// convenience, not an auth boundary.
const ADMIN_PASSWORD: &str = match option_env!("EMA_ADMIN_PASSWORD") {
    Some(secret) => secret,
    None => "admin2024",
};

/// Explicit session state for the password gate.
///
/// Restored from localStorage at startup and cleared on logout, so the
/// gate survives reloads. The admin page owns the value; nothing reads
/// the storage flag ambiently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionState {
    authenticated: bool,
}

impl SessionState {
    /// Rebuild the session from the persisted flag.
    pub fn restore() -> Self {
        let authenticated = storage()
            .and_then(|storage| storage.get_item(AUTH_FLAG_KEY).ok().flatten())
            .as_deref()
            == Some("true");
        Self { authenticated }
    }

    /// Whether the gate is currently open.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Compare the candidate against the configured secret. On a match the
    /// flag is persisted and the authenticated session is returned; on a
    /// mismatch the caller keeps the gate closed and shows the error.
    pub fn attempt_login(candidate: &str) -> Result<Self, AdminError> {
        if candidate != ADMIN_PASSWORD {
            return Err(AdminError::AuthFailure);
        }
        if let Some(storage) = storage() {
            let _ = storage.set_item(AUTH_FLAG_KEY, "true");
        }
        Ok(Self {
            authenticated: true,
        })
    }

    /// Clear the persisted flag and return to the unauthenticated state.
    /// The in-memory record list is left alone; the next login re-fetches.
    pub fn logged_out() -> Self {
        if let Some(storage) = storage() {
            let _ = storage.remove_item(AUTH_FLAG_KEY);
        }
        Self {
            authenticated: false,
        }
    }
}

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}
