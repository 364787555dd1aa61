//! Consumer identity registered with the remote service.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Key/secret pair identifying the calling application to the service.
///
/// Created once at startup and shared read-only by the handshake and RPC layers; the secret
/// never leaves the signing key derivation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsumerIdentity {
	/// Public consumer key transmitted with every signed request.
	pub key: String,
	/// Consumer secret contributing to the signing key.
	pub secret: TokenSecret,
}
impl ConsumerIdentity {
	/// Creates a consumer identity from its key and secret halves.
	pub fn new(key: impl Into<String>, secret: impl Into<String>) -> Self {
		Self { key: key.into(), secret: TokenSecret::new(secret.into()) }
	}
}
