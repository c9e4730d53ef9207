use crate::adapter::{ApiVersion, GeminiAdapter};
use crate::client::{AuthData, Endpoint, GenerationOptions};
use crate::extract::ExtractStrategy;
use crate::prompt::PromptTemplate;
use crate::WebConfig;
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

/// Upper bound on records returned by a search.
pub const DEFAULT_MAX_ITEMS: usize = 5;

// region:    --- Preset

/// Ready-made combinations of model, API version, prompt and sampling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
	/// `v1`, `gemini-1.5-flash`, detailed prompt, temperature 0.2 / topP 0.8 / topK 40.
	#[default]
	Tuned,
	/// `v1beta`, `gemini-pro`, compact prompt, provider default sampling.
	Plain,
}

impl Preset {
	pub fn api_version(self) -> ApiVersion {
		match self {
			Preset::Tuned => ApiVersion::V1,
			Preset::Plain => ApiVersion::V1Beta,
		}
	}

	pub fn model(self) -> &'static str {
		match self {
			Preset::Tuned => "gemini-1.5-flash",
			Preset::Plain => "gemini-pro",
		}
	}

	pub fn prompt(self) -> PromptTemplate {
		match self {
			Preset::Tuned => PromptTemplate::detailed(),
			Preset::Plain => PromptTemplate::compact(),
		}
	}

	pub fn generation_options(self) -> Option<GenerationOptions> {
		match self {
			Preset::Tuned => Some(
				GenerationOptions::default()
					.with_temperature(0.2)
					.with_top_p(0.8)
					.with_top_k(40),
			),
			Preset::Plain => None,
		}
	}
}

// endregion: --- Preset

/// Configuration for building and customizing a `Client`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
	pub(super) web_config: Option<WebConfig>,
	pub(super) endpoint: Endpoint,
	pub(super) auth: AuthData,
	pub(super) api_version: ApiVersion,
	pub(super) model: String,
	pub(super) prompt: PromptTemplate,
	pub(super) generation_options: Option<GenerationOptions>,
	pub(super) extract_strategy: ExtractStrategy,
	pub(super) max_items: usize,
}

impl Default for ClientConfig {
	fn default() -> Self {
		ClientConfig::from_preset(Preset::default())
	}
}

/// Constructors
impl ClientConfig {
	/// Default endpoint and env-based auth, everything else from `preset`.
	pub fn from_preset(preset: Preset) -> Self {
		ClientConfig {
			web_config: None,
			endpoint: GeminiAdapter::default_endpoint(),
			auth: GeminiAdapter::default_auth(),
			api_version: preset.api_version(),
			model: preset.model().to_string(),
			prompt: preset.prompt(),
			generation_options: preset.generation_options(),
			extract_strategy: ExtractStrategy::default(),
			max_items: DEFAULT_MAX_ITEMS,
		}
	}
}

/// Chainable setters related to the ClientConfig.
impl ClientConfig {
	/// Sets the HTTP client configuration (reqwest).
	pub fn with_web_config(mut self, web_config: WebConfig) -> Self {
		self.web_config = Some(web_config);
		self
	}

	pub fn with_endpoint(mut self, endpoint: impl Into<Endpoint>) -> Self {
		self.endpoint = endpoint.into();
		self
	}

	pub fn with_auth(mut self, auth: AuthData) -> Self {
		self.auth = auth;
		self
	}

	pub fn with_api_version(mut self, api_version: ApiVersion) -> Self {
		self.api_version = api_version;
		self
	}

	pub fn with_model(mut self, model: impl Into<String>) -> Self {
		self.model = model.into();
		self
	}

	pub fn with_prompt(mut self, prompt: PromptTemplate) -> Self {
		self.prompt = prompt;
		self
	}

	/// Sets the sampling parameters. `None` lets the provider pick.
	pub fn with_generation_options(mut self, options: Option<GenerationOptions>) -> Self {
		self.generation_options = options;
		self
	}

	pub fn with_extract_strategy(mut self, strategy: ExtractStrategy) -> Self {
		self.extract_strategy = strategy;
		self
	}

	/// Sets the record cap (at least 1).
	pub fn with_max_items(mut self, max_items: usize) -> Self {
		self.max_items = max_items.max(1);
		self
	}
}

/// Getters for the fields of ClientConfig (as references).
impl ClientConfig {
	/// Returns the WebConfig, if set.
	pub fn web_config(&self) -> Option<&WebConfig> {
		self.web_config.as_ref()
	}

	pub fn endpoint(&self) -> &Endpoint {
		&self.endpoint
	}

	pub fn auth(&self) -> &AuthData {
		&self.auth
	}

	pub fn api_version(&self) -> ApiVersion {
		self.api_version
	}

	pub fn model(&self) -> &str {
		&self.model
	}

	pub fn prompt(&self) -> &PromptTemplate {
		&self.prompt
	}

	pub fn generation_options(&self) -> Option<&GenerationOptions> {
		self.generation_options.as_ref()
	}

	pub fn extract_strategy(&self) -> ExtractStrategy {
		self.extract_strategy
	}

	pub fn max_items(&self) -> usize {
		self.max_items
	}
}

// region:    --- Tests


// endregion: --- Tests
