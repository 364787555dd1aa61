//! Uniform JSON envelope wrapping every business RPC response.

// self
use crate::{_prelude::*, error::ProtocolError};

/// Decoded `{result, response|error}` wrapper.
///
/// Ephemeral by design: an envelope exists only for the duration of one call before being
/// mapped to a success value or a typed failure.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "result")]
pub enum ResponseEnvelope {
	/// The service executed the call and reports success.
	#[serde(rename = "OK")]
	Ok {
		/// Payload value; legitimately absent for operations with nothing to report.
		#[serde(default)]
		response: Option<Value>,
	},
	/// The service executed the call and reports a business-level failure.
	#[serde(rename = "ERROR")]
	Error {
		/// Server-supplied error message.
		error: String,
	},
}
impl ResponseEnvelope {
	/// Decodes an envelope from a raw response body.
	///
	/// Bodies that are not JSON, lack a `result` field, or carry an unknown `result` value all
	/// surface as [`ProtocolError::MalformedEnvelope`] with the parse path attached.
	pub fn from_body(body: &str) -> Result<Self, ProtocolError> {
		let de = &mut serde_json::Deserializer::from_str(body);

		serde_path_to_error::deserialize(de)
			.map_err(|source| ProtocolError::MalformedEnvelope { source })
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn ok_envelopes_carry_their_payload() {
		let envelope = ResponseEnvelope::from_body(
			"{\"result\":\"OK\",\"response\":{\"user_uuid\":\"u1\",\"username\":\"alice\"}}",
		)
		.expect("A well-formed OK envelope should decode.");

		let ResponseEnvelope::Ok { response: Some(value) } = envelope else {
			panic!("Envelope should decode as OK with a payload.");
		};

		assert_eq!(value["user_uuid"], "u1");
		assert_eq!(value["username"], "alice");
	}

	#[test]
	fn ok_envelopes_may_omit_or_null_the_payload() {
		for body in ["{\"result\":\"OK\"}", "{\"result\":\"OK\",\"response\":null}"] {
			let envelope =
				ResponseEnvelope::from_body(body).expect("A payload-free OK envelope should decode.");

			assert!(matches!(envelope, ResponseEnvelope::Ok { response: None }));
		}
	}

	#[test]
	fn error_envelopes_carry_the_message_verbatim() {
		let envelope = ResponseEnvelope::from_body("{\"result\":\"ERROR\",\"error\":\"no such user\"}")
			.expect("A well-formed ERROR envelope should decode.");

		let ResponseEnvelope::Error { error } = envelope else {
			panic!("Envelope should decode as ERROR.");
		};

		assert_eq!(error, "no such user");
	}

	#[test]
	fn malformed_bodies_are_rejected() {
		for body in [
			"not json at all",
			"{\"response\":{}}",
			"{\"result\":\"MAYBE\"}",
			"[1,2,3]",
		] {
			assert!(
				matches!(
					ResponseEnvelope::from_body(body),
					Err(ProtocolError::MalformedEnvelope { .. }),
				),
				"Body {body:?} should be rejected.",
			);
		}
	}
}
