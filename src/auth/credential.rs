//! Token credential pairs and their persisted wire form.

// self
use crate::{_prelude::*, error::CredentialParseError};

/// Redacted secret wrapper keeping sensitive material out of logs.
///
/// Both halves of the signing key (consumer secret and token secret) travel through this type;
/// the raw value is only reachable via [`TokenSecret::expose`].
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Wraps a new secret string.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Returns the inner secret value. Callers must avoid logging this string.
	pub fn expose(&self) -> &str {
		&self.0
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		self.expose()
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_tuple("TokenSecret").field(&"<redacted>").finish()
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

/// Token pair issued by the service during the authorization handshake.
///
/// The same shape serves both lifecycle stages: the short-lived request credential obtained
/// before user approval, and the long-lived access credential that authorizes business calls.
/// A request credential is single-use; once exchanged it must never be presented again.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
	/// Public token value transmitted with every signed request.
	pub token: String,
	/// Token secret contributing to the signing key.
	pub secret: TokenSecret,
}
impl Credential {
	/// Creates a credential from its token and secret halves.
	pub fn new(token: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { token: token.into(), secret: TokenSecret::new(secret.into()) }
	}

	/// Parses the `key=value&key=value` encoded form used by the handshake endpoints and by
	/// persisted access credentials.
	///
	/// Pair order is irrelevant and unrecognized fields (e.g. `oauth_callback_confirmed`) are
	/// ignored, so the same parser handles raw handshake response bodies.
	pub fn from_wire_string(body: &str) -> Result<Self, CredentialParseError> {
		let mut token = None;
		let mut secret = None;

		for (key, value) in url::form_urlencoded::parse(body.trim().as_bytes()) {
			match key.as_ref() {
				"oauth_token" => token = Some(value.into_owned()),
				"oauth_token_secret" => secret = Some(value.into_owned()),
				_ => {},
			}
		}

		let token = token.ok_or(CredentialParseError::MissingField { field: "oauth_token" })?;
		let secret =
			secret.ok_or(CredentialParseError::MissingField { field: "oauth_token_secret" })?;

		Ok(Self { token, secret: TokenSecret::new(secret) })
	}

	/// Renders the compact persisted form, `oauth_token_secret=<secret>&oauth_token=<token>`.
	///
	/// Existing stored tokens and the service documentation depend on this exact encoding;
	/// [`Credential::from_wire_string`] accepts it back unchanged.
	pub fn to_wire_string(&self) -> String {
		url::form_urlencoded::Serializer::new(String::new())
			.append_pair("oauth_token_secret", self.secret.expose())
			.append_pair("oauth_token", &self.token)
			.finish()
	}
}
impl FromStr for Credential {
	type Err = CredentialParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::from_wire_string(s)
	}
}
