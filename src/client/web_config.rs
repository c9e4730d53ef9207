use std::time::Duration;

/// Options applied to the internal `reqwest::Client`.
///
/// Nothing is set by default: no timeout, so a hung request stays pending.
#[derive(Debug, Clone, Default)]
pub struct WebConfig {
	pub timeout: Option<Duration>,
	pub connect_timeout: Option<Duration>,
	pub user_agent: Option<String>,
}

/// Chainable Setters
impl WebConfig {
	pub fn with_timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
		self.connect_timeout = Some(timeout);
		self
	}

	pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());
		self
	}
}

impl WebConfig {
	pub fn apply_to_builder(&self, mut builder: reqwest::ClientBuilder) -> reqwest::ClientBuilder {
		if let Some(timeout) = self.timeout {
			builder = builder.timeout(timeout);
		}
		if let Some(timeout) = self.connect_timeout {
			builder = builder.connect_timeout(timeout);
		}
		if let Some(user_agent) = &self.user_agent {
			builder = builder.user_agent(user_agent.as_str());
		}
		builder
	}
}
