use serde::{Deserialize, Serialize};

/// Sampling parameters sent as `generationConfig`. When every field is
/// `None` the whole object is left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
	pub temperature: Option<f64>,
	pub top_p: Option<f64>,
	pub top_k: Option<u32>,
}

/// Chainable Setters
impl GenerationOptions {
	pub fn with_temperature(mut self, value: f64) -> Self {
		self.temperature = Some(value);
		self
	}

	pub fn with_top_p(mut self, value: f64) -> Self {
		self.top_p = Some(value);
		self
	}

	pub fn with_top_k(mut self, value: u32) -> Self {
		self.top_k = Some(value);
		self
	}
}

impl GenerationOptions {
	pub fn is_empty(&self) -> bool {
		self.temperature.is_none() && self.top_p.is_none() && self.top_k.is_none()
	}
}
