//! Session domain module.
//!
//! - `mode`: the single tagged enum describing what the UI is doing
//!   (`UiMode`)
//! - `state`: the owned session state and its transition operations
//!   (`SessionState`)

mod mode;
mod state;

// Re-export public API
pub use mode::UiMode;
pub use state::SessionState;
