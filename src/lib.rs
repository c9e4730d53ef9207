//! `nutrilens` library - Nutrition estimates from free-text food descriptions.
//!
//! A [`Client`] sends the description to a generative-language model, pulls
//! the JSON array out of its answer and decodes it into [`food::FoodRecord`]s.
//! A [`state::SearchState`] holds what the search screen shows and scales each
//! record to its chosen quantity.

// region:    --- Modules

mod client;
mod error;
mod webc;

// -- Flatten
pub use client::*;
pub use error::{BoxError, Error, Result};

// -- Public Modules
pub mod adapter;
pub mod extract;
pub mod food;
pub mod prompt;
pub mod session;
pub mod state;

// endregion: --- Modules
