//! Client-level error types shared across the handshake, signing, and RPC layers.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or request-construction problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, unexpected HTTP status).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Handshake response body could not be parsed into a credential.
	#[error(transparent)]
	CredentialParse(#[from] CredentialParseError),
	/// RPC response body is not a well-formed envelope.
	#[error(transparent)]
	Protocol(#[from] ProtocolError),
	/// Credential storage failure.
	#[error("{0}")]
	Store(
		#[from]
		#[source]
		crate::store::StoreError,
	),

	/// Access-token exchange rejected: the request credential was never approved, expired, or
	/// was already consumed. Restart the handshake from the beginning.
	#[error("Authorization was rejected by the service (HTTP {status}): {detail}.")]
	AuthorizationRejected {
		/// HTTP status code returned by the access-token endpoint.
		status: u16,
		/// Raw response body, preserved verbatim for diagnosis.
		detail: String,
	},
	/// The service executed the call and reported a business-level failure.
	#[error("Service reported an operation failure: {message}.")]
	RemoteOperation {
		/// Server-supplied error string, preserved verbatim.
		message: String,
	},
}

/// Configuration and request-construction failures raised before any network I/O.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Signing targets and service endpoints must use HTTPS.
	#[error("Endpoint must use HTTPS: {url}.")]
	InsecureEndpoint {
		/// URL that failed validation.
		url: String,
	},
	/// Signing targets must not carry a query string or fragment.
	#[error("Endpoint must not carry a query string or fragment: {url}.")]
	EndpointHasQuery {
		/// URL that failed validation.
		url: String,
	},
	/// Caller parameters must not collide with protocol-reserved names.
	#[error("Parameter name is reserved by the authorization protocol: {name}.")]
	ReservedParameter {
		/// Offending parameter name.
		name: String,
	},
	/// Remote method names must form a single path segment suffix.
	#[error("Remote method name is invalid: {name:?}.")]
	InvalidMethodName {
		/// Offending method name.
		name: String,
	},
	/// Endpoint URL construction failed.
	#[error("Endpoint URL could not be constructed.")]
	InvalidUrl(#[from] url::ParseError),
}

/// Transport-level failures (network, unexpected HTTP status).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the service.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The service answered with a non-success HTTP status.
	#[error("Service returned HTTP {status}: {body}.")]
	Status {
		/// HTTP status code.
		status: u16,
		/// Raw response body, when available.
		body: String,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures parsing the `key=value&key=value` handshake body into a credential.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum CredentialParseError {
	/// A required field was absent from the encoded body.
	#[error("Credential body is missing the {field} field.")]
	MissingField {
		/// Name of the absent field.
		field: &'static str,
	},
}

/// Failures decoding the RPC response envelope.
#[derive(Debug, ThisError)]
pub enum ProtocolError {
	/// The body is not valid JSON or lacks a recognizable `result` field.
	#[error("Service returned a malformed response envelope.")]
	MalformedEnvelope {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn authorization_rejection_preserves_status_and_detail() {
		let err = Error::AuthorizationRejected { status: 401, detail: "Invalid OAuth token".into() };

		assert!(err.to_string().contains("401"));
		assert!(err.to_string().contains("Invalid OAuth token"));
	}

	#[test]
	fn transport_error_exposes_source() {
		let io = std::io::Error::other("connection reset");
		let err: Error = TransportError::network(io).into();

		assert!(matches!(err, Error::Transport(TransportError::Network { .. })));
		assert!(StdError::source(&err).is_some());
	}
}
