//! Presentation state of the search screen.
//!
//! The state is only changed through [`SearchState::apply`], which takes an
//! [`Action`] and may hand back an [`Effect`] for the caller to run.

// region:    --- Modules

mod action;
mod search_state;

pub use action::*;
pub use search_state::*;

// endregion: --- Modules
