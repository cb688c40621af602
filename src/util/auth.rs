//! Access-token storage glue.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session provider writes a bearer token to `localStorage` under a
//! well-known key after login. Mutating API calls read it fresh on every
//! request so a re-login in another tab takes effect immediately.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// localStorage key the session provider stores the bearer token under.
pub const ACCESS_TOKEN_KEY: &str = "accessToken";

/// Read the current access token, if one is stored.
///
/// Returns `None` outside a browser environment or when no token has
/// been written yet; callers pass the absence through to the server.
pub fn access_token() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
        storage.get_item(ACCESS_TOKEN_KEY).ok().flatten()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
