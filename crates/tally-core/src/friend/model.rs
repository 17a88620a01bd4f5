//! Friend domain model.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A friend and the financial relationship with them.
///
/// The balance is a signed amount: negative means the user owes this
/// friend, positive means this friend owes the user, zero means the
/// two are settled. The balance is only ever changed by applying a
/// split-bill delta through the registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    /// Unique friend identifier (UUID format), immutable after creation
    pub id: String,
    /// Display name
    pub name: String,
    /// Avatar URI; carries the id as a `?u=` suffix so each friend gets
    /// a distinct image from the avatar service
    pub image: String,
    /// Signed balance. Negative = user owes friend, positive = friend
    /// owes user, zero = settled.
    pub balance: f64,
}

impl Friend {
    /// Creates a new friend with a fresh id, a zero balance, and an
    /// avatar URL derived from `image_template`.
    pub fn new(name: impl Into<String>, image_template: &str) -> Self {
        let id = Uuid::new_v4().to_string();
        let image = format!("{image_template}?u={id}");
        Self {
            id,
            name: name.into(),
            image,
            balance: 0.0,
        }
    }

    /// Classifies the balance for display purposes.
    pub fn standing(&self) -> Standing {
        if self.balance < 0.0 {
            Standing::UserOwes(self.balance.abs())
        } else if self.balance > 0.0 {
            Standing::FriendOwes(self.balance)
        } else {
            Standing::Even
        }
    }
}

/// The three ways a balance can read on screen.
///
/// Amounts are always non-negative; the direction is carried by the
/// variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Standing {
    /// The user owes the friend this amount
    UserOwes(f64),
    /// The friend owes the user this amount
    FriendOwes(f64),
    /// Nobody owes anything
    Even,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_friend() {
        let friend = Friend::new("Clark", "https://i.pravatar.cc/48");
        assert!(!friend.id.is_empty());
        assert_eq!(friend.name, "Clark");
        assert_eq!(friend.balance, 0.0);
        assert_eq!(
            friend.image,
            format!("https://i.pravatar.cc/48?u={}", friend.id)
        );
    }

    #[test]
    fn test_new_friends_have_unique_ids() {
        let a = Friend::new("A", "https://i.pravatar.cc/48");
        let b = Friend::new("B", "https://i.pravatar.cc/48");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_standing() {
        let mut friend = Friend::new("Clark", "https://i.pravatar.cc/48");
        assert_eq!(friend.standing(), Standing::Even);

        friend.balance = -7.0;
        assert_eq!(friend.standing(), Standing::UserOwes(7.0));

        friend.balance = 20.0;
        assert_eq!(friend.standing(), Standing::FriendOwes(20.0));
    }
}
