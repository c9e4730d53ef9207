//! Provider request/response envelopes.

// region:    --- Modules

mod gemini;

pub use gemini::*;

// endregion: --- Modules
