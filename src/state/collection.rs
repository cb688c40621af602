//! Collection-list state: the single source of truth for rendering.
//!
//! DESIGN
//! ======
//! The in-memory list must match the last known server state after every
//! mutating operation: loads replace it wholesale, note updates merge by
//! identifier, deletes filter by identifier. The load generation counter
//! lets the page discard responses from superseded in-flight loads when
//! the identity changes mid-fetch.

#[cfg(test)]
#[path = "collection_test.rs"]
mod collection_test;

use crate::net::types::Sneaker;

/// Shared collection state for the collection page.
#[derive(Clone, Debug, Default)]
pub struct CollectionState {
    /// The user's sneakers in server order.
    pub items: Vec<Sneaker>,
    /// True while a list fetch is in flight.
    pub loading: bool,
    /// Last load failure, shown inline until the next successful load.
    pub error: Option<String>,
    /// Generation of the most recent load request. Responses carrying an
    /// older generation are stale and must not be applied.
    pub load_generation: u64,
}

impl CollectionState {
    /// Start a new load, superseding any in-flight one. Returns the
    /// generation the caller should carry into its response handler.
    pub fn begin_load(&mut self) -> u64 {
        self.load_generation += 1;
        self.loading = true;
        self.load_generation
    }

    /// Whether a response for `generation` is still current.
    pub fn is_current_load(&self, generation: u64) -> bool {
        self.load_generation == generation
    }

    /// Replace the entire list with the server's sequence.
    pub fn replace(&mut self, items: Vec<Sneaker>) {
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed load; the list stays whatever it was.
    pub fn fail_load(&mut self, message: String) {
        self.loading = false;
        self.error = Some(message);
    }

    /// Overwrite only the note field of the item with `sneaker_id`.
    /// Returns false when no item matches.
    pub fn apply_note_update(&mut self, sneaker_id: i64, note: &str) -> bool {
        match self.items.iter_mut().find(|s| s.id == sneaker_id) {
            Some(sneaker) => {
                sneaker.note = Some(note.to_owned());
                true
            }
            None => false,
        }
    }

    /// Remove the item with `sneaker_id`, leaving every other item in
    /// place. Returns false when no item matches.
    pub fn remove(&mut self, sneaker_id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|s| s.id != sneaker_id);
        self.items.len() != before
    }

    /// Look up an item by identifier.
    pub fn find(&self, sneaker_id: i64) -> Option<&Sneaker> {
        self.items.iter().find(|s| s.id == sneaker_id)
    }
}
