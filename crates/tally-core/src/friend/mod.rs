//! Friend domain module.
//!
//! Contains the `Friend` record, the balance `Standing` view, and the
//! ordered `FriendRegistry` that owns all known friends.

mod model;
mod registry;

// Re-export public API
pub use model::{Friend, Standing};
pub use registry::FriendRegistry;
