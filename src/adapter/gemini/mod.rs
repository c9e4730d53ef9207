//! Gemini API Documentation
//! API Documentation:     <https://ai.google.dev/api/generate-content>
//! Model Names:           `gemini-1.5-flash`, `gemini-pro`, ...
//!
//! ## Versions
//!
//! The `generateContent` method is served under two path prefixes:
//!
//! - `v1`:     stable, accepts `generationConfig` (temperature, topP, topK)
//! - `v1beta`: preview models (default for `gemini-pro` era models)
//!
//! Both take the API key as the `key` query parameter and answer with
//! `candidates[0].content.parts[0].text`.
//!
//! ## For example
//!
//! ```rust,ignore
//! use nutrilens::Client;
//!
//! let client = Client::default();
//! let records = client.search_food("a bowl of oatmeal").await?;
//! ```

// region:    --- Modules

mod adapter_impl;
mod wire;

pub use adapter_impl::*;
pub(crate) use wire::*;

// endregion: --- Modules
