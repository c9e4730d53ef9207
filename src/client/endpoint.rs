use crate::{Error, Result};
use std::sync::Arc;
use url::Url;

/// Base URL of the inference service, e.g. `https://generativelanguage.googleapis.com/`.
/// Efficiently clonable.
#[derive(Debug, Clone)]
pub struct Endpoint {
	inner: EndpointInner,
}

#[derive(Debug, Clone)]
enum EndpointInner {
	Static(&'static str),
	Owned(Arc<str>),
}

/// Constructors
impl Endpoint {
	pub fn from_static(url: &'static str) -> Self {
		Endpoint {
			inner: EndpointInner::Static(url),
		}
	}

	pub fn from_owned(url: impl Into<Arc<str>>) -> Self {
		Endpoint {
			inner: EndpointInner::Owned(url.into()),
		}
	}
}

/// Getters
impl Endpoint {
	pub fn base_url(&self) -> &str {
		match &self.inner {
			EndpointInner::Static(url) => url,
			EndpointInner::Owned(url) => url,
		}
	}

	/// Resolves `path` against the base URL. A base path without a trailing
	/// slash is kept as a directory (`http://host/proxy` + `v1` is `/proxy/v1`).
	pub fn join(&self, path: &str) -> Result<Url> {
		let base_url = self.base_url();
		let base = if base_url.ends_with('/') {
			base_url.to_string()
		} else {
			format!("{base_url}/")
		};

		Url::parse(&base)
			.and_then(|base| base.join(path))
			.map_err(|cause| Error::InvalidEndpoint { url: base, cause })
	}
}

impl From<&'static str> for Endpoint {
	fn from(url: &'static str) -> Self {
		Endpoint::from_static(url)
	}
}

impl From<String> for Endpoint {
	fn from(url: String) -> Self {
		Endpoint::from_owned(url)
	}
}
