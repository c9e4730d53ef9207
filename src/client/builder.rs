use crate::client::{AuthData, Endpoint};
use crate::prompt::PromptTemplate;
use crate::webc::WebClient;
use crate::{Client, ClientConfig, Error, Result, WebConfig};
use std::sync::Arc;

/// Builder for `Client`.
///
/// Create via:
/// - `ClientBuilder::default()`
/// - `Client::builder()`
#[derive(Debug, Default)]
pub struct ClientBuilder {
	web_client: Option<WebClient>,
	config: Option<ClientConfig>,
}

/// Builder methods
impl ClientBuilder {
	/// Use a custom `reqwest::Client`. Takes precedence over any `WebConfig`.
	pub fn with_reqwest(mut self, reqwest_client: reqwest::Client) -> Self {
		self.web_client = Some(WebClient::from_reqwest_client(reqwest_client));
		self
	}

	/// Set a `ClientConfig`.
	pub fn with_config(mut self, config: ClientConfig) -> Self {
		self.config = Some(config);
		self
	}

	/// Set `WebConfig` used to build the internal `reqwest::Client` (creates `ClientConfig` if absent).
	pub fn with_web_config(mut self, web_config: WebConfig) -> Self {
		let client_config = self.config.take().unwrap_or_default();
		self.config = Some(client_config.with_web_config(web_config));
		self
	}
}

/// Builder ClientConfig passthrough convenient setters.
impl ClientBuilder {
	pub fn with_endpoint(self, endpoint: impl Into<Endpoint>) -> Self {
		self.map_config(|config| config.with_endpoint(endpoint))
	}

	pub fn with_auth(self, auth: AuthData) -> Self {
		self.map_config(|config| config.with_auth(auth))
	}

	pub fn with_model(self, model: impl Into<String>) -> Self {
		self.map_config(|config| config.with_model(model))
	}

	pub fn with_prompt(self, prompt: PromptTemplate) -> Self {
		self.map_config(|config| config.with_prompt(prompt))
	}

	fn map_config(mut self, f: impl FnOnce(ClientConfig) -> ClientConfig) -> Self {
		let client_config = self.config.take().unwrap_or_default();
		self.config = Some(f(client_config));
		self
	}
}

impl ClientBuilder {
	/// Build a `Client`.
	///
	/// Fails only when a `WebConfig` is set and `reqwest` cannot build a client from it.
	pub fn build(self) -> Result<Client> {
		let config = self.config.unwrap_or_default();

		let web_client = if let Some(web_client) = self.web_client {
			web_client
		} else if let Some(web_config) = config.web_config() {
			let builder = web_config.apply_to_builder(reqwest::Client::builder());
			let reqwest_client = builder.build().map_err(Error::WebClientBuild)?;
			WebClient::from_reqwest_client(reqwest_client)
		} else {
			WebClient::default()
		};

		let inner = super::ClientInner { web_client, config };
		Ok(Client { inner: Arc::new(inner) })
	}
}
