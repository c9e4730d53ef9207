use crate::webc::WebClient;
use crate::{ClientBuilder, ClientConfig};
use std::sync::Arc;

/// Client for nutrition searches against the generative-language API.
///
/// Construct with:
/// - [`ClientBuilder::default()`] followed by `.build()`, or
///
/// - [`Client::builder()`], which is equivalent to `ClientBuilder::default()`.
#[derive(Debug, Clone)]
pub struct Client {
	pub(super) inner: Arc<ClientInner>,
}

// region:    --- Client Constructors

impl Default for Client {
	/// Creates a [`Client`] with the default preset, endpoint and
	/// `GEMINI_API_KEY` auth. The key is read at request time.
	fn default() -> Self {
		Client::from_config(ClientConfig::default())
	}
}

impl Client {
	/// Returns a builder for configuring and constructing a [`Client`].
	///
	/// Equivalent to calling [`ClientBuilder::default()`].
	pub fn builder() -> ClientBuilder {
		ClientBuilder::default()
	}

	/// Creates a [`Client`] with a default `reqwest::Client`, ignoring any
	/// `WebConfig` in `config`. Use the builder to apply one.
	pub fn from_config(config: ClientConfig) -> Self {
		let inner = ClientInner {
			web_client: WebClient::default(),
			config,
		};
		Client { inner: Arc::new(inner) }
	}
}

// endregion: --- Client Constructors

// region:    --- Client Getters

impl Client {
	pub(crate) fn web_client(&self) -> &WebClient {
		&self.inner.web_client
	}

	pub fn config(&self) -> &ClientConfig {
		&self.inner.config
	}
}

// endregion: --- Client Getters

// region:    --- ClientInner

#[derive(Debug)]
pub(super) struct ClientInner {
	pub(super) web_client: WebClient,

	pub(super) config: ClientConfig,
}

// endregion: --- ClientInner
