use crate::adapter::GeminiAdapter;
use crate::extract::parse_food_records;
use crate::food::FoodRecord;
use crate::{Client, Error, Result};
use std::collections::HashSet;
use tracing::{debug, error, instrument, warn};

impl Client {
	/// Asks the model for up to `max_items` food records matching `query`.
	///
	/// The query is trimmed; an empty query fails with [`Error::EmptyQuery`]
	/// before anything is sent.
	#[instrument(skip(self), fields(model = %self.config().model()))]
	pub async fn search_food(&self, query: &str) -> Result<Vec<FoodRecord>> {
		let query = query.trim();
		if query.is_empty() {
			return Err(Error::EmptyQuery);
		}

		let config = self.config();
		let prompt = config.prompt().render(query, config.max_items());
		let text = self.generate_text(&prompt).await?;
		debug!(raw = %text, "raw model answer");

		let mut records = parse_food_records(&text, config.extract_strategy())?;

		if records.len() > config.max_items() {
			warn!(
				returned = records.len(),
				max_items = config.max_items(),
				"model returned too many items, truncating"
			);
			records.truncate(config.max_items());
		}

		let mut seen = HashSet::new();
		for record in &records {
			if !seen.insert(record.name.as_str()) {
				warn!(name = %record.name, "duplicate food name in result, quantities will be shared");
			}
		}

		Ok(records)
	}

	/// Sends `prompt` as-is and returns the first candidate's text.
	pub async fn generate_text(&self, prompt: &str) -> Result<String> {
		let config = self.config();
		let api_key = config.auth().single_key_value()?;
		let url = GeminiAdapter::build_url(config.endpoint(), config.api_version(), config.model(), &api_key)?;
		let payload = GeminiAdapter::build_payload(prompt, config.generation_options());

		debug!(model = config.model(), version = %config.api_version(), "sending generateContent request");
		let response = self.web_client().do_post(url, &payload).await?;

		if !response.status.is_success() {
			let message = GeminiAdapter::api_error_message(&response.body);
			error!(status = response.status.as_u16(), %message, "Gemini API error");
			return Err(Error::Api {
				status: response.status.as_u16(),
				message,
			});
		}

		GeminiAdapter::first_text(&response.body)
	}
}
