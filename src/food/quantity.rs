use serde::{Deserialize, Serialize};

/// Quantity at which model estimates are expressed.
pub const BASELINE_QUANTITY: u32 = 100;

/// Quantities never go below this.
pub const MIN_QUANTITY: u32 = 10;

/// Stepper increment.
pub const QUANTITY_STEP: i64 = 10;

/// Amount of a food relative to the 100-unit baseline. Floor-clamped at
/// [`MIN_QUANTITY`], no ceiling beyond `u32::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct Quantity(u32);

impl Default for Quantity {
	fn default() -> Self {
		Quantity(BASELINE_QUANTITY)
	}
}

/// Constructors
impl Quantity {
	pub fn new(value: u32) -> Self {
		Quantity(value.max(MIN_QUANTITY))
	}
}

impl Quantity {
	pub fn get(self) -> u32 {
		self.0
	}

	/// Applies a signed delta, clamping at the floor.
	pub fn adjust(self, delta: i64) -> Self {
		let next = i64::from(self.0).saturating_add(delta).clamp(i64::from(MIN_QUANTITY), i64::from(u32::MAX));
		Quantity(next as u32)
	}

	/// Ratio to the baseline.
	pub fn factor(self) -> f64 {
		f64::from(self.0) / f64::from(BASELINE_QUANTITY)
	}

	pub fn scale(self, value: f64) -> f64 {
		value * self.factor()
	}
}

/// Parses a typed amount as a number, flooring any fraction. Non-numeric
/// and non-finite text yields `None`.
pub fn parse_amount(text: &str) -> Option<i64> {
	let value = text.trim().parse::<f64>().ok().filter(|value| value.is_finite())?;
	// float to int casts saturate
	Some(value.floor() as i64)
}

impl From<u32> for Quantity {
	fn from(value: u32) -> Self {
		Quantity::new(value)
	}
}

impl From<Quantity> for u32 {
	fn from(quantity: Quantity) -> Self {
		quantity.0
	}
}

impl core::fmt::Display for Quantity {
	fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
		write!(f, "{}", self.0)
	}
}

// region:    --- Tests


// endregion: --- Tests
