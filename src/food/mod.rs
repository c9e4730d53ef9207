//! Food records and their quantity-scaled presentation.

// region:    --- Modules

mod quantity;
mod record;
mod unit;
mod view;

pub use quantity::*;
pub use record::*;
pub use unit::*;
pub use view::*;

// endregion: --- Modules
