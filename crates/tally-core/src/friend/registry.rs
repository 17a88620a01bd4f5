//! Ordered registry of known friends.

use serde::{Deserialize, Serialize};

use super::model::Friend;

/// The ordered collection of known friends and their balances.
///
/// Insertion order is preserved and growth is append-only; there is no
/// removal. Uniqueness of ids relies on the collision-resistant id
/// generator, not on lookup at insert time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FriendRegistry {
    friends: Vec<Friend>,
}

impl FriendRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry seeded with an initial roster.
    pub fn with_friends(friends: Vec<Friend>) -> Self {
        Self { friends }
    }

    /// Appends a friend. The caller is responsible for validating the
    /// record beforehand (see `AddFriendForm::submit`).
    pub fn add(&mut self, friend: Friend) {
        self.friends.push(friend);
    }

    /// Looks up a friend by id.
    pub fn get(&self, id: &str) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    /// Returns true if a friend with this id is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Applies a signed delta to the named friend's balance.
    ///
    /// Unknown ids are a no-op: the selection set is closed over the
    /// registry, so a miss indicates a caller bug rather than user
    /// error.
    pub fn apply_delta(&mut self, id: &str, delta: f64) {
        match self.friends.iter_mut().find(|f| f.id == id) {
            Some(friend) => {
                friend.balance += delta;
                tracing::debug!(
                    "[Registry] Applied delta {} to '{}', new balance {}",
                    delta,
                    friend.name,
                    friend.balance
                );
            }
            None => {
                tracing::warn!("[Registry] apply_delta for unknown friend id: {}", id);
            }
        }
    }

    /// All friends, in insertion order.
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    pub fn len(&self) -> usize {
        self.friends.len()
    }

    pub fn is_empty(&self) -> bool {
        self.friends.is_empty()
    }
}
