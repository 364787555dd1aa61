//! Validated service endpoint descriptor.

// self
use crate::{_prelude::*, error::ConfigError};

/// Default production endpoint served by the hosted deployment.
pub const DEFAULT_SERVER_URL: &str = "https://api.codaview.com";

const REQUEST_TOKEN_PATH: &str = "oauth/request_token/";
const AUTHORIZE_PATH: &str = "oauth/authorize/";
const ACCESS_TOKEN_PATH: &str = "oauth/access_token/";
const API_ROOT_PATH: &str = "external/v2/json/";

/// Endpoint map for one remote service deployment.
///
/// Validation happens once at construction (absolute HTTPS base URL, no query or fragment) so
/// the handshake and RPC layers can treat every derived endpoint as well-formed. The remote
/// addressing scheme treats each RPC method as a sub-resource path segment under the API root,
/// which is why [`ServiceDescriptor::method_endpoint`] normalizes the trailing separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceDescriptor {
	base_url: Url,
	request_token: Url,
	authorize: Url,
	access_token: Url,
	api_root: Url,
}
impl ServiceDescriptor {
	/// Builds a descriptor for the provided base URL, precomputing every derived endpoint.
	pub fn new(base_url: Url) -> Result<Self, ConfigError> {
		if base_url.scheme() != "https" {
			return Err(ConfigError::InsecureEndpoint { url: base_url.to_string() });
		}
		if base_url.query().is_some() || base_url.fragment().is_some() {
			return Err(ConfigError::EndpointHasQuery { url: base_url.to_string() });
		}

		let mut root = base_url.clone();

		if !root.path().ends_with('/') {
			root.set_path(&format!("{}/", root.path()));
		}

		let request_token = root.join(REQUEST_TOKEN_PATH)?;
		let authorize = root.join(AUTHORIZE_PATH)?;
		let access_token = root.join(ACCESS_TOKEN_PATH)?;
		let api_root = root.join(API_ROOT_PATH)?;

		Ok(Self { base_url, request_token, authorize, access_token, api_root })
	}

	/// Descriptor pointing at [`DEFAULT_SERVER_URL`].
	pub fn hosted() -> Self {
		let url = Url::parse(DEFAULT_SERVER_URL).expect("Default service URL is valid.");

		Self::new(url).expect("Default service URL satisfies endpoint validation.")
	}

	/// Base URL the descriptor was constructed from.
	pub fn base_url(&self) -> &Url {
		&self.base_url
	}

	/// Handshake endpoint issuing short-lived request credentials.
	pub fn request_token_endpoint(&self) -> &Url {
		&self.request_token
	}

	/// Handshake endpoint the end-user visits to approve the request credential.
	pub fn authorize_endpoint(&self) -> &Url {
		&self.authorize
	}

	/// Handshake endpoint exchanging an approved request credential for an access credential.
	pub fn access_token_endpoint(&self) -> &Url {
		&self.access_token
	}

	/// Endpoint for a named RPC method, with exactly one trailing path separator.
	///
	/// Method names are forwarded as-is otherwise; the service decides whether a name exists.
	pub fn method_endpoint(&self, method: &str) -> Result<Url, ConfigError> {
		if method.is_empty()
			|| method.starts_with('/')
			|| method.contains(['?', '#'])
		{
			return Err(ConfigError::InvalidMethodName { name: method.to_owned() });
		}

		let mut relative = method.to_owned();

		if !relative.ends_with('/') {
			relative.push('/');
		}

		Ok(self.api_root.join(&relative)?)
	}
}
impl Default for ServiceDescriptor {
	fn default() -> Self {
		Self::hosted()
	}
}
