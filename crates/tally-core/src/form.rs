//! Add-friend form logic.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TallyError};
use crate::friend::Friend;

/// Default avatar service template. The friend's id is appended as a
/// `?u=` suffix so every friend resolves to a distinct image.
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// Transient state of the add-friend form: a name and an avatar URL
/// template, both free text.
///
/// Validation is deliberately minimal: an exact-empty-string check on
/// each field, no trimming. A successful submit constructs the new
/// `Friend` and resets both fields to their defaults so the form is
/// ready for the next entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddFriendForm {
    /// Friend name field
    pub name: String,
    /// Avatar URL template field
    pub image_url: String,
    /// Value `image_url` is reset to after a successful submit
    default_image_url: String,
}

impl AddFriendForm {
    /// Creates a form whose image field starts at (and resets to) the
    /// given template URL.
    pub fn new(default_image_url: impl Into<String>) -> Self {
        let default_image_url = default_image_url.into();
        Self {
            name: String::new(),
            image_url: default_image_url.clone(),
            default_image_url,
        }
    }

    /// Validates the fields and builds a new friend.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if either field is the empty string. The
    /// form is left untouched on failure so the user can correct it.
    pub fn submit(&mut self) -> Result<Friend> {
        if self.name.is_empty() {
            return Err(TallyError::empty_field("name"));
        }
        if self.image_url.is_empty() {
            return Err(TallyError::empty_field("image"));
        }

        let friend = Friend::new(&self.name, &self.image_url);
        tracing::info!("[AddFriend] Created friend '{}' ({})", friend.name, friend.id);

        // Reset to defaults for the next entry
        self.name.clear();
        self.image_url = self.default_image_url.clone();

        Ok(friend)
    }
}

impl Default for AddFriendForm {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_builds_friend_and_resets() {
        let mut form = AddFriendForm::default();
        form.name = "Dana".to_string();

        let friend = form.submit().unwrap();
        assert_eq!(friend.name, "Dana");
        assert_eq!(friend.balance, 0.0);
        assert!(friend.image.starts_with(DEFAULT_AVATAR_URL));
        assert!(friend.image.contains(&friend.id));

        assert!(form.name.is_empty());
        assert_eq!(form.image_url, DEFAULT_AVATAR_URL);
    }

    #[test]
    fn test_submit_empty_name_fails() {
        let mut form = AddFriendForm::default();
        let err = form.submit().unwrap_err();
        assert!(err.is_empty_field());
    }

    #[test]
    fn test_submit_empty_image_fails_and_keeps_fields() {
        let mut form = AddFriendForm::default();
        form.name = "Dana".to_string();
        form.image_url.clear();

        let err = form.submit().unwrap_err();
        assert!(err.is_empty_field());
        // Failure must not reset the fields
        assert_eq!(form.name, "Dana");
    }

    #[test]
    fn test_whitespace_name_is_accepted() {
        // Exact-empty-string check only; no trimming.
        let mut form = AddFriendForm::default();
        form.name = " ".to_string();
        assert!(form.submit().is_ok());
    }

    #[test]
    fn test_custom_template() {
        let mut form = AddFriendForm::new("https://avatars.example/64");
        form.name = "Eve".to_string();
        let friend = form.submit().unwrap();
        assert!(friend.image.starts_with("https://avatars.example/64?u="));
        assert_eq!(form.image_url, "https://avatars.example/64");
    }
}
