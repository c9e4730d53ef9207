//! Shared helpers for the integration tests.

#![allow(unused)]

use nutrilens::{AuthData, Client, ClientConfig, Preset};
use serde_json::{Value, json};
use wiremock::MockServer;

pub type TestResult<T> = core::result::Result<T, Box<dyn std::error::Error>>;

pub const TEST_KEY: &str = "test-key";

pub const BANANA_JSON: &str = r#"[{"name":"Banana","calories":105,"protein":1.3,"fats":0.3,"carbs":27}]"#;

/// `generateContent` success body whose first part holds `text`.
pub fn gemini_body(text: &str) -> Value {
	json!({
		"candidates": [{
			"content": { "role": "model", "parts": [{ "text": text }] },
			"finishReason": "STOP"
		}],
		"usageMetadata": { "promptTokenCount": 90, "candidatesTokenCount": 40, "totalTokenCount": 130 }
	})
}

pub fn config_for(server: &MockServer, preset: Preset) -> ClientConfig {
	ClientConfig::from_preset(preset)
		.with_endpoint(server.uri())
		.with_auth(AuthData::from_single(TEST_KEY))
}

pub fn client_for(server: &MockServer) -> Client {
	Client::from_config(config_for(server, Preset::Tuned))
}
