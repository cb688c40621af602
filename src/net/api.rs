//! REST API helpers for the collection server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so fetch
//! failures degrade UI behavior without crashing hydration. The bearer
//! token is read fresh from storage on each mutating call; a missing
//! token is not pre-checked and simply surfaces as a server rejection.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Sneaker, UpdatedUserSneaker, User};
#[cfg(feature = "hydrate")]
use super::types::{DeleteResponse, SneakersResponse, UpdateNoteResponse};

#[cfg(any(test, feature = "hydrate"))]
fn sneakers_endpoint(user_key: &str) -> String {
    format!("/user-sneakers/{user_key}")
}

#[cfg(any(test, feature = "hydrate"))]
fn add_note_endpoint(sneaker_id: i64) -> String {
    format!("/add-note-to-user-sneaker/{sneaker_id}")
}

#[cfg(any(test, feature = "hydrate"))]
const DELETE_ENDPOINT: &str = "/delete-sneaker";

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(any(test, feature = "hydrate"))]
fn note_payload(note: &str) -> serde_json::Value {
    serde_json::json!({ "note": note })
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_payload(user_id: i64, sneaker_id: i64) -> serde_json::Value {
    serde_json::json!({ "userId": user_id, "sneakerId": sneaker_id })
}

#[cfg(any(test, feature = "hydrate"))]
fn list_failed_message(status: u16) -> String {
    format!("sneaker list request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn update_failed_message(status: u16) -> String {
    format!("note update failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn delete_failed_message(status: u16) -> String {
    format!("delete request failed: {status}")
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Fetch the full sneaker collection for `user_key` (numeric id or
/// username) from `GET /user-sneakers/{user_key}`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status.
pub async fn fetch_user_sneakers(user_key: &str) -> Result<Vec<Sneaker>, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = sneakers_endpoint(user_key);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(list_failed_message(resp.status()));
        }
        let body: SneakersResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.sneakers)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_key;
        Err("not available on server".to_owned())
    }
}

/// Persist a note for one sneaker via
/// `PATCH /add-note-to-user-sneaker/{sneaker_id}`.
///
/// The note text is sent exactly as given, untrimmed. Returns the
/// server's updated record so callers merge the authoritative value.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails, the server responds
/// with a non-OK status, or the response carries no updated record.
pub async fn update_sneaker_note(sneaker_id: i64, note: &str) -> Result<UpdatedUserSneaker, String> {
    #[cfg(feature = "hydrate")]
    {
        let url = add_note_endpoint(sneaker_id);
        let mut req = gloo_net::http::Request::patch(&url);
        if let Some(token) = crate::util::auth::access_token() {
            req = req.header("Authorization", &bearer_header(&token));
        }
        let resp = req
            .json(&note_payload(note))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(update_failed_message(resp.status()));
        }
        let body: UpdateNoteResponse = resp.json().await.map_err(|e| e.to_string())?;
        match body.updated_user_sneaker {
            Some(updated) => Ok(updated),
            None => Err(body
                .message
                .unwrap_or_else(|| "note update rejected".to_owned())),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (sneaker_id, note);
        Err("not available on server".to_owned())
    }
}

/// Delete one sneaker from the user's collection via
/// `DELETE /delete-sneaker`.
///
/// Returns the server's confirmation message on success. Callers must
/// only drop the item from local state when this returns `Ok`.
///
/// # Errors
///
/// Returns an error string if the HTTP request fails or the server
/// responds with a non-OK status; when the failure body carries a
/// `message`, that text is used.
pub async fn delete_sneaker(user_id: i64, sneaker_id: i64) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let mut req = gloo_net::http::Request::delete(DELETE_ENDPOINT);
        if let Some(token) = crate::util::auth::access_token() {
            req = req.header("Authorization", &bearer_header(&token));
        }
        let resp = req
            .json(&delete_payload(user_id, sneaker_id))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            let status = resp.status();
            let message = resp
                .json::<DeleteResponse>()
                .await
                .ok()
                .map(|body| body.message);
            return Err(message.unwrap_or_else(|| delete_failed_message(status)));
        }
        let body: DeleteResponse = resp.json().await.map_err(|e| e.to_string())?;
        Ok(body.message)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, sneaker_id);
        Err("not available on server".to_owned())
    }
}
