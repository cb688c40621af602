//! Wire DTOs for the collection server's REST contract.
//!
//! DESIGN
//! ======
//! Field names intentionally mirror the server's JSON payloads (including
//! the lowercase `sneakerid` in the update response) so serde round-trips
//! stay lossless and no mapping layer is needed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// One sneaker in the user's collection.
///
/// The free-text `note` is user-authored and distinct from the catalog
/// `description` that ships with the sneaker record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sneaker {
    /// Unique sneaker identifier.
    pub id: i64,
    /// Model name (e.g. "Air Max 90").
    pub name: String,
    /// Colorway label.
    pub colorway: String,
    /// Brand name.
    pub brand: String,
    /// Retail price, if known.
    pub price: Option<f64>,
    /// Product image URL, if any.
    pub image: Option<String>,
    /// External product link, if any.
    pub link: Option<String>,
    /// Catalog description, if any.
    pub description: Option<String>,
    /// User's personal note, if one has been added.
    pub note: Option<String>,
}

/// Response body of `GET /user-sneakers/{userKey}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SneakersResponse {
    pub sneakers: Vec<Sneaker>,
}

/// The updated record inside a successful note-update response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdatedUserSneaker {
    /// Identifier of the sneaker whose note changed.
    #[serde(rename = "sneakerid")]
    pub sneaker_id: i64,
    /// The note text as persisted by the server.
    pub note: String,
}

/// Response body of `PATCH /add-note-to-user-sneaker/{sneakerId}`.
///
/// A missing `updatedUserSneaker` means the server rejected the update;
/// `message` carries its explanation when present.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UpdateNoteResponse {
    #[serde(rename = "updatedUserSneaker")]
    pub updated_user_sneaker: Option<UpdatedUserSneaker>,
    pub message: Option<String>,
}

/// Response body of `DELETE /delete-sneaker`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// The authenticated user as returned by the session provider.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Numeric user id, when the session has one resolved.
    pub current_user_id: Option<i64>,
    /// Login name; stands in for the id in list requests when needed.
    pub username: String,
}

impl User {
    /// Path segment identifying this user's collection: the numeric id
    /// when known, else the username.
    pub fn list_key(&self) -> String {
        self.current_user_id
            .map_or_else(|| self.username.clone(), |id| id.to_string())
    }
}
