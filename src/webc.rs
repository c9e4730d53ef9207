//! Thin wrapper over `reqwest` for the single JSON POST the client makes.

use crate::Result;
use reqwest::StatusCode;
use serde::Serialize;
use url::Url;

#[derive(Debug, Clone, Default)]
pub struct WebClient {
	reqwest_client: reqwest::Client,
}

/// Constructors
impl WebClient {
	pub fn from_reqwest_client(reqwest_client: reqwest::Client) -> Self {
		WebClient { reqwest_client }
	}
}

impl WebClient {
	/// POSTs `payload` as JSON and reads the whole body, whatever the status.
	pub async fn do_post(&self, url: Url, payload: &impl Serialize) -> Result<WebResponse> {
		let response = self.reqwest_client.post(url).json(payload).send().await?;
		let status = response.status();
		let body = response.text().await?;

		Ok(WebResponse { status, body })
	}
}

#[derive(Debug)]
pub struct WebResponse {
	pub status: StatusCode,
	pub body: String,
}
