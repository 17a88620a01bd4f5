//! Owned session state and its transition operations.

use serde::{Deserialize, Serialize};

use super::mode::UiMode;
use crate::config::TallyConfig;
use crate::error::{Result, TallyError};
use crate::form::AddFriendForm;
use crate::friend::{Friend, FriendRegistry};
use crate::split::{BalanceDelta, SplitDraft};

/// The single owner of all mutable session state.
///
/// `SessionState` holds the friend registry, the current UI mode, and
/// the add-friend form, and exposes every state transition the shell
/// can trigger. There are no ambient globals: the shell owns one
/// `SessionState` and calls into it synchronously, so each user action
/// is processed to completion before the next.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    registry: FriendRegistry,
    mode: UiMode,
    add_form: AddFriendForm,
}

impl SessionState {
    /// Creates a session seeded from configuration: the initial friend
    /// roster and the avatar template for the add-friend form.
    pub fn new(config: &TallyConfig) -> Self {
        let registry = FriendRegistry::with_friends(config.seed_friends());
        Self {
            registry,
            mode: UiMode::Idle,
            add_form: AddFriendForm::new(config.avatar_url.clone()),
        }
    }

    pub fn registry(&self) -> &FriendRegistry {
        &self.registry
    }

    pub fn mode(&self) -> &UiMode {
        &self.mode
    }

    pub fn add_form(&self) -> &AddFriendForm {
        &self.add_form
    }

    pub fn add_form_mut(&mut self) -> &mut AddFriendForm {
        &mut self.add_form
    }

    /// Opens or closes the add-friend form.
    ///
    /// Opening it cancels any active split selection; the two modes are
    /// mutually exclusive.
    pub fn toggle_add_friend(&mut self) {
        self.mode = match self.mode {
            UiMode::AddingFriend => UiMode::Idle,
            _ => UiMode::AddingFriend,
        };
        tracing::debug!("[Session] Mode is now {:?}", self.mode);
    }

    /// Selects or deselects a friend for a bill split.
    ///
    /// Selecting the already-selected friend toggles back to `Idle`.
    /// Selecting a different friend switches the selection directly and
    /// starts a fresh split draft. Any open add-friend form is closed.
    /// Unknown ids are ignored.
    pub fn select_friend(&mut self, id: &str) {
        if !self.registry.contains(id) {
            tracing::warn!("[Session] select_friend for unknown friend id: {}", id);
            return;
        }

        self.mode = match &self.mode {
            UiMode::Splitting { friend_id, .. } if friend_id == id => UiMode::Idle,
            _ => UiMode::Splitting {
                friend_id: id.to_string(),
                draft: SplitDraft::new(),
            },
        };
        tracing::debug!("[Session] Mode is now {:?}", self.mode);
    }

    /// Submits the add-friend form, appending the new friend to the
    /// registry and closing the form.
    ///
    /// # Errors
    ///
    /// Returns `EmptyField` if validation fails; the form stays open
    /// and the registry is unchanged.
    pub fn submit_add_friend(&mut self) -> Result<Friend> {
        let friend = self.add_form.submit()?;
        self.registry.add(friend.clone());
        self.mode = UiMode::Idle;
        Ok(friend)
    }

    /// The friend currently targeted for a split, if any.
    pub fn selected_friend(&self) -> Option<&Friend> {
        self.mode
            .selected_friend_id()
            .and_then(|id| self.registry.get(id))
    }

    /// The active split draft, if a friend is selected.
    pub fn split_draft(&self) -> Option<&SplitDraft> {
        match &self.mode {
            UiMode::Splitting { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Mutable access to the active split draft for form entry.
    pub fn split_draft_mut(&mut self) -> Option<&mut SplitDraft> {
        match &mut self.mode {
            UiMode::Splitting { draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Submits the active split: settles the draft, applies the delta
    /// to the selected friend's balance, and returns to `Idle`,
    /// discarding the draft.
    ///
    /// # Errors
    ///
    /// Returns `IncompleteInput` if no friend is selected or the draft
    /// is missing its bill total or user expense. Nothing is applied
    /// and the form state is unchanged.
    pub fn submit_split(&mut self) -> Result<BalanceDelta> {
        let (friend_id, delta) = match &self.mode {
            UiMode::Splitting { friend_id, draft } => (friend_id.clone(), draft.settle()?),
            _ => return Err(TallyError::IncompleteInput),
        };

        self.registry.apply_delta(&friend_id, delta.amount);
        self.mode = UiMode::Idle;
        tracing::info!(
            "[Session] Split settled with friend {}: delta {}",
            friend_id,
            delta.amount
        );
        Ok(delta)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(&TallyConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session_with(names: &[&str]) -> (SessionState, Vec<String>) {
        let mut session = SessionState::new(&TallyConfig {
            friends: vec![],
            ..TallyConfig::default()
        });
        let mut ids = Vec::new();
        for name in names {
            session.add_form_mut().name = name.to_string();
            ids.push(session.submit_add_friend().unwrap().id);
        }
        (session, ids)
    }

    #[test]
    fn test_toggle_add_friend() {
        let (mut session, _) = session_with(&[]);
        assert!(session.mode().is_idle());

        session.toggle_add_friend();
        assert!(session.mode().is_adding());

        session.toggle_add_friend();
        assert!(session.mode().is_idle());
    }

    #[test]
    fn test_select_twice_toggles_off() {
        let (mut session, ids) = session_with(&["Clark"]);

        session.select_friend(&ids[0]);
        assert_eq!(session.mode().selected_friend_id(), Some(ids[0].as_str()));

        session.select_friend(&ids[0]);
        assert!(session.mode().is_idle());
    }

    #[test]
    fn test_select_other_friend_switches_directly() {
        let (mut session, ids) = session_with(&["Clark", "Sarah"]);

        session.select_friend(&ids[0]);
        session.select_friend(&ids[1]);
        assert_eq!(session.mode().selected_friend_id(), Some(ids[1].as_str()));
    }

    #[test]
    fn test_selecting_closes_add_form() {
        let (mut session, ids) = session_with(&["Clark"]);

        session.toggle_add_friend();
        session.select_friend(&ids[0]);
        assert!(!session.mode().is_adding());
        assert_eq!(session.mode().selected_friend_id(), Some(ids[0].as_str()));
    }

    #[test]
    fn test_add_friend_clears_selection() {
        let (mut session, ids) = session_with(&["Clark"]);

        session.select_friend(&ids[0]);
        session.toggle_add_friend();
        assert!(session.mode().is_adding());
        assert_eq!(session.mode().selected_friend_id(), None);
    }

    #[test]
    fn test_select_unknown_id_is_noop() {
        let (mut session, _) = session_with(&["Clark"]);
        session.select_friend("no-such-id");
        assert!(session.mode().is_idle());
    }

    #[test]
    fn test_reselect_starts_fresh_draft() {
        let (mut session, ids) = session_with(&["Clark", "Sarah"]);

        session.select_friend(&ids[0]);
        session
            .split_draft_mut()
            .unwrap()
            .enter_bill_total("50")
            .unwrap();

        // Switching friends must discard the previous draft
        session.select_friend(&ids[1]);
        assert_eq!(session.split_draft().unwrap().bill_total(), None);
    }

    #[test]
    fn test_submit_add_friend_appends_and_closes() {
        let (mut session, _) = session_with(&[]);
        session.toggle_add_friend();
        session.add_form_mut().name = "Dana".to_string();

        let friend = session.submit_add_friend().unwrap();
        assert!(session.mode().is_idle());
        assert_eq!(session.registry().len(), 1);
        assert_eq!(session.registry().get(&friend.id).unwrap().name, "Dana");
    }

    #[test]
    fn test_submit_add_friend_failure_keeps_form_open() {
        let (mut session, _) = session_with(&[]);
        session.toggle_add_friend();

        assert!(session.submit_add_friend().is_err());
        assert!(session.mode().is_adding());
        assert!(session.registry().is_empty());
    }

    #[test]
    fn test_submit_split_without_selection() {
        let (mut session, _) = session_with(&["Clark"]);
        assert!(session.submit_split().unwrap_err().is_incomplete_input());
    }

    #[test]
    fn test_incomplete_split_keeps_form_state() {
        let (mut session, ids) = session_with(&["Clark"]);
        session.select_friend(&ids[0]);
        session
            .split_draft_mut()
            .unwrap()
            .enter_bill_total("20")
            .unwrap();

        // No user expense entered yet
        assert!(session.submit_split().unwrap_err().is_incomplete_input());
        assert_eq!(session.mode().selected_friend_id(), Some(ids[0].as_str()));
        assert_eq!(session.split_draft().unwrap().bill_total(), Some(20.0));
    }
}
