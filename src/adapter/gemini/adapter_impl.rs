use crate::adapter::{
	CandidatePart, ErrorEnvelope, GenerateContentRequest, GenerateContentResponse, GenerationConfig, RequestContent,
	RequestPart,
};
use crate::client::{AuthData, Endpoint, GenerationOptions};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use url::Url;

/// Path prefix of the `generateContent` method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
	#[default]
	V1,
	V1Beta,
}

pub struct GeminiAdapter;

impl GeminiAdapter {
	pub const DEFAULT_BASE_URL: &'static str = "https://generativelanguage.googleapis.com/";
	pub const API_KEY_ENV: &'static str = "GEMINI_API_KEY";
	pub const METHOD: &'static str = "generateContent";

	pub fn default_endpoint() -> Endpoint {
		Endpoint::from_static(Self::DEFAULT_BASE_URL)
	}

	pub fn default_auth() -> AuthData {
		AuthData::from_env(Self::API_KEY_ENV)
	}

	/// `{base}/{version}/models/{model}:generateContent?key={api_key}`
	pub fn build_url(endpoint: &Endpoint, version: ApiVersion, model: &str, api_key: &str) -> Result<Url> {
		let path = format!("{version}/models/{model}:{}", Self::METHOD);
		let mut url = endpoint.join(&path)?;
		url.query_pairs_mut().append_pair("key", api_key);

		Ok(url)
	}

	pub(crate) fn build_payload<'a>(
		prompt: &'a str,
		options: Option<&GenerationOptions>,
	) -> GenerateContentRequest<'a> {
		let generation_config = options.filter(|o| !o.is_empty()).map(|o| GenerationConfig {
			temperature: o.temperature,
			top_p: o.top_p,
			top_k: o.top_k,
		});

		GenerateContentRequest {
			contents: vec![RequestContent {
				parts: vec![RequestPart { text: prompt }],
			}],
			generation_config,
		}
	}

	/// Text of the first part of the first candidate.
	pub fn first_text(body: &str) -> Result<String> {
		let response: GenerateContentResponse = serde_json::from_str(body)?;
		response
			.candidates
			.into_iter()
			.next()
			.and_then(|candidate| candidate.content)
			.and_then(|content| content.parts.into_iter().next())
			.and_then(|CandidatePart { text }| text)
			.ok_or(Error::NoData)
	}

	/// Provider error message of a failed call, the raw body when the body is
	/// not an error envelope, or `"Unknown error"` when the body is blank.
	pub fn api_error_message(body: &str) -> String {
		let from_envelope = serde_json::from_str::<ErrorEnvelope>(body)
			.ok()
			.and_then(|envelope| envelope.error)
			.and_then(|error| error.message);

		match from_envelope {
			Some(message) => message,
			None if body.trim().is_empty() => "Unknown error".to_string(),
			None => body.trim().to_string(),
		}
	}
}

// region:    --- Tests


// endregion: --- Tests
