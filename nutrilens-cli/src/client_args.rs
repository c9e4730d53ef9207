use clap::Args;
use nutrilens::adapter::{ApiVersion, GeminiAdapter};
use nutrilens::extract::ExtractStrategy;
use nutrilens::state::StalePolicy;
use nutrilens::{AuthData, Client, ClientConfig, DEFAULT_MAX_ITEMS, Preset, WebConfig};
use std::time::Duration;

/// Options shared by every command that talks to the model.
#[derive(Debug, Clone, Args)]
pub struct ClientArgs {
    /// Model, API version, prompt and sampling bundle: tuned | plain
    #[arg(long, default_value = "tuned")]
    pub preset: Preset,

    /// Model name, overrides the preset's
    #[arg(long, env = "NUTRILENS_MODEL")]
    pub model: Option<String>,

    /// API version path prefix, overrides the preset's: v1 | v1beta
    #[arg(long)]
    pub api_version: Option<ApiVersion>,

    /// API base URL
    #[arg(long, env = "NUTRILENS_ENDPOINT", default_value = GeminiAdapter::DEFAULT_BASE_URL)]
    pub endpoint: String,

    /// Environment variable holding the API key
    #[arg(long, default_value = GeminiAdapter::API_KEY_ENV)]
    pub api_key_env: String,

    /// How the JSON array is located in the answer: bracket-scan | fenced
    #[arg(long, default_value = "bracket-scan")]
    pub strategy: ExtractStrategy,

    /// Maximum number of foods per search
    #[arg(long, default_value_t = DEFAULT_MAX_ITEMS)]
    pub max_items: usize,

    /// Request timeout in seconds (no timeout by default)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Completions of superseded searches: last-resolved-wins | latest-only
    #[arg(long, default_value = "last-resolved-wins")]
    pub stale_policy: StalePolicy,
}

impl ClientArgs {
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_preset(self.preset)
            .with_endpoint(self.endpoint.clone())
            .with_auth(AuthData::from_env(self.api_key_env.as_str()))
            .with_extract_strategy(self.strategy)
            .with_max_items(self.max_items);

        if let Some(model) = &self.model {
            config = config.with_model(model.as_str());
        }
        if let Some(api_version) = self.api_version {
            config = config.with_api_version(api_version);
        }
        if let Some(secs) = self.timeout {
            config = config.with_web_config(WebConfig::default().with_timeout(Duration::from_secs(secs)));
        }
        config
    }

    pub fn build_client(&self) -> anyhow::Result<Client> {
        let client = Client::builder().with_config(self.client_config()).build()?;
        Ok(client)
    }
}
