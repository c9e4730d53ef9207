use crate::client::AuthDataError;
use crate::extract::ExtractError;
use derive_more::From;

pub type Result<T> = core::result::Result<T, Error>;
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, From)]
pub enum Error {
	/// The query was empty or whitespace only. No request was sent.
	EmptyQuery,

	#[from]
	Auth(AuthDataError),

	InvalidEndpoint {
		url: String,
		cause: url::ParseError,
	},

	WebClientBuild(reqwest::Error),

	/// Transport failure (connect, send, body read).
	#[from]
	Http(reqwest::Error),

	/// Non-success HTTP status. `message` is the provider's error message when present.
	Api {
		status: u16,
		message: String,
	},

	/// The response envelope carried no candidate text.
	NoData,

	#[from]
	Extract(ExtractError),

	#[from]
	Parse(serde_json::Error),
}

impl Error {
	/// True when the error was raised locally, before any network call.
	pub fn is_validation(&self) -> bool {
		matches!(self, Error::EmptyQuery)
	}
}

impl core::fmt::Display for Error {
	fn fmt(&self, fmt: &mut core::fmt::Formatter) -> core::result::Result<(), core::fmt::Error> {
		write!(fmt, "{self:?}")
	}
}

impl std::error::Error for Error {}
