//! Client module.
//!
//! Re-exports the public client API: builder, client types, configuration,
//! auth data, endpoints, generation options and web configuration.

// region:    --- Modules

mod auth_data;
mod builder;
mod client_impl;
mod client_types;
mod config;
mod endpoint;
mod generation_options;
mod web_config;

pub use auth_data::*;
pub use builder::*;
pub use client_types::*;
pub use config::*;
pub use endpoint::*;
pub use generation_options::*;
pub use web_config::*;

// endregion: --- Modules
