//! UI mode types for session state management.

use serde::{Deserialize, Serialize};

use crate::split::SplitDraft;

/// What the session is currently doing.
///
/// Adding a friend and splitting a bill are mutually exclusive by
/// construction: a single enum holds at most one of the two, so the
/// invalid "both open" combination cannot be represented. The split
/// draft lives inside the `Splitting` variant, which makes its
/// lifecycle automatic: created fresh when a friend is selected,
/// discarded whenever the mode changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum UiMode {
    /// Nothing is open; the friend list is just being browsed.
    #[default]
    Idle,
    /// The add-friend form is open.
    AddingFriend,
    /// The split-bill form is open for one friend.
    Splitting {
        /// Id of the friend the bill is being split with.
        friend_id: String,
        /// Working state of this split interaction.
        draft: SplitDraft,
    },
}

impl UiMode {
    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_adding(&self) -> bool {
        matches!(self, Self::AddingFriend)
    }

    /// The id of the friend currently targeted for a split, if any.
    pub fn selected_friend_id(&self) -> Option<&str> {
        match self {
            Self::Splitting { friend_id, .. } => Some(friend_id),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert!(UiMode::default().is_idle());
    }

    #[test]
    fn test_selected_friend_id() {
        let mode = UiMode::Splitting {
            friend_id: "f-1".to_string(),
            draft: SplitDraft::new(),
        };
        assert_eq!(mode.selected_friend_id(), Some("f-1"));
        assert_eq!(UiMode::AddingFriend.selected_friend_id(), None);
    }

    #[test]
    fn test_serialization_round_trip() {
        let mode = UiMode::Splitting {
            friend_id: "f-1".to_string(),
            draft: SplitDraft::new(),
        };
        let json = serde_json::to_string(&mode).unwrap();
        assert!(json.contains("\"type\":\"Splitting\""));
        let back: UiMode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mode);
    }
}
