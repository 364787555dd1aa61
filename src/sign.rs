//! Canonical signed request construction.
//!
//! [`SignedRequestBuilder`] turns a consumer identity, an optional token credential, and a
//! parameter map into a [`SignedRequest`] carrying the protocol parameters and an HMAC-SHA1
//! signature. Building is pure apart from nonce/timestamp generation; nothing here performs
//! network I/O.

mod encode;

// crates.io
use base64::{Engine as _, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use rand::{Rng, distr::Alphanumeric};
use sha1::Sha1;
// self
use crate::{
	_prelude::*,
	auth::{ConsumerIdentity, Credential},
	error::ConfigError,
	http::HttpMethod,
};

/// Signature algorithm advertised in every signed request.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";
/// Protocol revision advertised in every signed request.
pub const OAUTH_VERSION: &str = "1.0";

// Wide enough that concurrent callers sharing one consumer+token pair cannot collide within
// any realistic replay window.
const NONCE_LEN: usize = 32;
const RESERVED_PARAMETERS: [&str; 7] = [
	"oauth_consumer_key",
	"oauth_nonce",
	"oauth_signature",
	"oauth_signature_method",
	"oauth_timestamp",
	"oauth_token",
	"oauth_version",
];

type HmacSha1 = Hmac<Sha1>;

/// One fully signed request, ready to render as a query URL or a POST form body.
///
/// Instances are built fresh per call and never reused; the embedded nonce and timestamp make
/// every build unique even for logically identical inputs.
#[derive(Clone, Debug)]
pub struct SignedRequest {
	method: HttpMethod,
	url: Url,
	params: BTreeMap<String, String>,
}
impl SignedRequest {
	/// HTTP method the signature was computed for.
	pub fn http_method(&self) -> HttpMethod {
		self.method
	}

	/// Target URL the signature was computed for (no query string).
	pub fn target_url(&self) -> &Url {
		&self.url
	}

	/// Complete parameter map, protocol parameters and signature included.
	pub fn parameters(&self) -> &BTreeMap<String, String> {
		&self.params
	}

	/// Renders the request as a self-contained URL with the signed query string.
	pub fn to_url(&self) -> Url {
		let mut url = self.url.clone();

		url.set_query(Some(&encode::encode_pairs(&self.params)));

		url
	}

	/// Renders the request parameters as a percent-encoded POST form body.
	pub fn form_body(&self) -> String {
		encode::encode_pairs(&self.params)
	}
}

/// Builds [`SignedRequest`] values for one consumer identity and an optional token credential.
#[derive(Clone, Copy, Debug)]
pub struct SignedRequestBuilder<'a> {
	consumer: &'a ConsumerIdentity,
	credential: Option<&'a Credential>,
}
impl<'a> SignedRequestBuilder<'a> {
	/// Creates a builder signing with the consumer secret alone (request-credential calls).
	pub fn new(consumer: &'a ConsumerIdentity) -> Self {
		Self { consumer, credential: None }
	}

	/// Attaches a token credential whose secret joins the signing key.
	pub fn with_credential(mut self, credential: &'a Credential) -> Self {
		self.credential = Some(credential);

		self
	}

	/// Signs `params` for a call to `url`, generating a fresh nonce and timestamp.
	///
	/// `params` keys must not collide with the protocol-reserved parameter names and `url`
	/// must be an absolute HTTPS URL without a query string.
	pub fn build(
		&self,
		method: HttpMethod,
		url: &Url,
		params: &BTreeMap<String, String>,
	) -> Result<SignedRequest, ConfigError> {
		self.build_at(method, url, params, fresh_nonce(), OffsetDateTime::now_utc().unix_timestamp())
	}

	fn build_at(
		&self,
		method: HttpMethod,
		url: &Url,
		params: &BTreeMap<String, String>,
		nonce: String,
		timestamp: i64,
	) -> Result<SignedRequest, ConfigError> {
		if url.scheme() != "https" {
			return Err(ConfigError::InsecureEndpoint { url: url.to_string() });
		}
		if url.query().is_some() || url.fragment().is_some() {
			return Err(ConfigError::EndpointHasQuery { url: url.to_string() });
		}
		if let Some(name) = params.keys().find(|key| RESERVED_PARAMETERS.contains(&key.as_str())) {
			return Err(ConfigError::ReservedParameter { name: name.clone() });
		}

		let mut assembled = params.clone();

		assembled.insert("oauth_consumer_key".into(), self.consumer.key.clone());
		assembled.insert("oauth_nonce".into(), nonce);
		assembled.insert("oauth_signature_method".into(), SIGNATURE_METHOD.into());
		assembled.insert("oauth_timestamp".into(), timestamp.to_string());
		assembled.insert("oauth_version".into(), OAUTH_VERSION.into());

		if let Some(credential) = self.credential {
			assembled.insert("oauth_token".into(), credential.token.clone());
		}

		let base_string = format!(
			"{}&{}&{}",
			method.as_str(),
			encode::parameter_encode(&encode::normalize_endpoint(url)),
			encode::parameter_encode(&encode::encode_pairs(&assembled)),
		);
		let signature = self.compute_signature(&base_string);

		assembled.insert("oauth_signature".into(), signature);

		Ok(SignedRequest { method, url: url.clone(), params: assembled })
	}

	fn compute_signature(&self, base_string: &str) -> String {
		let token_secret = self.credential.map(|credential| credential.secret.expose());
		let key = format!(
			"{}&{}",
			encode::parameter_encode(self.consumer.secret.expose()),
			encode::parameter_encode(token_secret.unwrap_or_default()),
		);
		let mut mac = HmacSha1::new_from_slice(key.as_bytes())
			.expect("HMAC-SHA1 accepts signing keys of any length.");

		mac.update(base_string.as_bytes());

		STANDARD.encode(mac.finalize().into_bytes())
	}
}

fn fresh_nonce() -> String {
	rand::rng().sample_iter(Alphanumeric).take(NONCE_LEN).map(char::from).collect()
}
