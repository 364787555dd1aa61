//! Transport primitives for signed service calls.
//!
//! The module exposes [`ServiceHttpClient`] alongside the [`WireRequest`]/[`WireResponse`]
//! pair so downstream crates can integrate custom HTTP clients. Implementations execute one
//! request per call and hand back the raw status and body; classification into the crate's
//! error taxonomy happens in the handshake and RPC layers.

// std
use std::ops::Deref;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::CONTENT_TYPE;
// self
use crate::_prelude::*;

/// Future type returned by [`ServiceHttpClient::execute`].
pub type WireFuture<'a, E> = Pin<Box<dyn Future<Output = Result<WireResponse, E>> + 'a + Send>>;

/// HTTP methods used by the wire protocol.
///
/// Handshake endpoints are called with signed GET requests; business calls are POSTed so
/// credentials never land in URL logs and list-valued arguments avoid URL length limits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
	/// Signed GET (handshake endpoints).
	Get,
	/// Signed POST with a form body (business calls).
	Post,
}
impl HttpMethod {
	/// Returns the canonical method name used in signature base strings.
	pub const fn as_str(self) -> &'static str {
		match self {
			HttpMethod::Get => "GET",
			HttpMethod::Post => "POST",
		}
	}
}
impl Display for HttpMethod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// One outbound request, fully rendered by the signing layer.
#[derive(Clone, Debug)]
pub struct WireRequest {
	/// HTTP method to execute.
	pub method: HttpMethod,
	/// Target URL, including the signed query string for GET requests.
	pub url: Url,
	/// Percent-encoded form body for POST requests.
	pub form_body: Option<String>,
}
impl WireRequest {
	/// Builds a GET request for a fully signed URL.
	pub fn get(url: Url) -> Self {
		Self { method: HttpMethod::Get, url, form_body: None }
	}

	/// Builds a POST request carrying a signed form body.
	pub fn post_form(url: Url, body: String) -> Self {
		Self { method: HttpMethod::Post, url, form_body: Some(body) }
	}
}

/// Raw response surfaced by a transport.
#[derive(Clone, Debug)]
pub struct WireResponse {
	/// HTTP status code.
	pub status: u16,
	/// Response body decoded as text.
	pub body: String,
}
impl WireResponse {
	/// Whether the status code is in the 2xx range.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Abstraction over HTTP transports capable of executing signed service calls.
///
/// The trait acts as the crate's only dependency on an HTTP stack. Callers provide an
/// implementation (typically behind `Arc<T>` where `T: ServiceHttpClient`) and the handshake
/// and RPC layers submit one [`WireRequest`] per round trip. Implementations must be
/// `Send + Sync + 'static` so one client can be shared by concurrent callers, and the futures
/// they return must be `Send` for the lifetime of the in-flight operation.
pub trait ServiceHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Executes the request, returning the raw status and body.
	///
	/// Implementations must not retry and must surface every non-connectivity response as a
	/// [`WireResponse`], whatever its status; classifying unexpected statuses is the caller's
	/// job.
	fn execute(&self, request: WireRequest) -> WireFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
/// Configure any custom [`ReqwestClient`] with the connect/read timeouts your deployment
/// needs; the crate performs no internal retries, so a hung service is bounded only by the
/// transport configuration.
#[cfg(feature = "reqwest")]
#[derive(Clone, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ServiceHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: WireRequest) -> WireFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let builder = match request.method {
				HttpMethod::Get => client.get(request.url),
				HttpMethod::Post => client
					.post(request.url)
					.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
					.body(request.form_body.unwrap_or_default()),
			};
			let response = builder.send().await?;
			let status = response.status().as_u16();
			let body = response.text().await?;

			Ok(WireResponse { status, body })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn method_names_match_signature_base_strings() {
		assert_eq!(HttpMethod::Get.as_str(), "GET");
		assert_eq!(HttpMethod::Post.as_str(), "POST");
	}

	#[test]
	fn success_covers_exactly_the_2xx_range() {
		assert!(WireResponse { status: 200, body: String::new() }.is_success());
		assert!(WireResponse { status: 204, body: String::new() }.is_success());
		assert!(!WireResponse { status: 301, body: String::new() }.is_success());
		assert!(!WireResponse { status: 401, body: String::new() }.is_success());
	}
}
