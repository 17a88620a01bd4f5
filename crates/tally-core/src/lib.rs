//! Core domain logic for Tally.
//!
//! Tally tracks a list of friends and the running balance with each of
//! them, and works out how to split a bill with a selected friend. This
//! crate owns all of the behavioral rules: the friend registry, the
//! add-friend form validation, the split-bill arithmetic, and the
//! session state machine that ties them together. Rendering lives in
//! the `tally-tui` crate and never mutates state directly.

pub mod config;
pub mod error;
pub mod form;
pub mod friend;
pub mod session;
pub mod split;

// Re-export common error type
pub use error::TallyError;
