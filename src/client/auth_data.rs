use derive_more::From;

// region:    --- AuthDataError

/// Error type for AuthData resolution.
pub type AuthDataResult<T> = core::result::Result<T, AuthDataError>;

#[derive(Debug, From)]
pub enum AuthDataError {
	ApiKeyEnvNotFound { env_name: String },
	ApiKeyEmpty,
	NoAuthConfigured,
	#[from]
	Custom(String),
}

impl core::fmt::Display for AuthDataError {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for AuthDataError {}

// endregion: --- AuthDataError

// region:    --- AuthData

/// `AuthData` specifies either where to find the API key or the key itself.
///
/// The key is sent as the `key` query parameter, so it is never logged and
/// `Debug` output is redacted.
#[derive(Clone)]
pub enum AuthData {
	/// Specify the environment name to get the key value from.
	FromEnv(String),

	/// The key value itself.
	Key(String),

	None,
}

/// Constructors
impl AuthData {
	pub fn from_env(env_name: impl Into<String>) -> Self {
		AuthData::FromEnv(env_name.into())
	}

	pub fn from_single(value: impl Into<String>) -> Self {
		AuthData::Key(value.into())
	}
}

/// Getters
impl AuthData {
	pub fn single_key_value(&self) -> AuthDataResult<String> {
		let value = match self {
			AuthData::FromEnv(env_name) => std::env::var(env_name).map_err(|_| AuthDataError::ApiKeyEnvNotFound {
				env_name: env_name.to_string(),
			})?,
			AuthData::Key(value) => value.to_string(),
			AuthData::None => return Err(AuthDataError::NoAuthConfigured),
		};

		if value.trim().is_empty() {
			return Err(AuthDataError::ApiKeyEmpty);
		}
		Ok(value)
	}
}

impl std::fmt::Debug for AuthData {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AuthData::FromEnv(env_name) => write!(f, "AuthData::FromEnv({env_name})"),
			AuthData::Key(_) => write!(f, "AuthData::Key(REDACTED)"),
			AuthData::None => write!(f, "None"),
		}
	}
}

// endregion: --- AuthData

// region:    --- Tests


// endregion: --- Tests
