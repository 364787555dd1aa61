//! Handshake round trips and the user-facing authorization session.
//!
//! Both handshake endpoints speak the pre-JSON `key=value&key=value` body format, so the
//! responses parse through [`Credential::from_wire_string`] rather than the RPC envelope.

// self
use crate::{
	_prelude::*,
	auth::Credential,
	error::TransportError,
	flows::AuthorizationFlow,
	http::{HttpMethod, ServiceHttpClient, WireRequest},
	obs::{self, CallKind, CallOutcome, CallSpan},
	sign::SignedRequestBuilder,
};

/// Handshake state returned by [`AuthorizationFlow::begin_authorization`].
#[derive(Clone, Debug)]
pub struct AuthorizationSession {
	/// Short-lived request credential awaiting user approval. Single-use: once exchanged it
	/// must never be presented again.
	pub request_credential: Credential,
	/// Fully-formed HTTPS authorize URL that callers should send the end-user to. The URL is
	/// constructed locally, never fetched by this crate.
	pub authorize_url: Url,
}

impl<C> AuthorizationFlow<C>
where
	C: ?Sized + ServiceHttpClient,
{
	/// Obtains a request credential and constructs the authorize URL for the end-user.
	///
	/// `callback` is embedded (and signed) as `oauth_callback` when provided, so the service
	/// can redirect the user after approval. Fails with a transport error when the
	/// request-token call cannot be completed and with a credential-parse error when the
	/// response body is not the expected encoded form.
	pub async fn begin_authorization(
		&self,
		callback: Option<&Url>,
	) -> Result<AuthorizationSession> {
		const KIND: CallKind = CallKind::RequestToken;

		let span = CallSpan::new(KIND, "begin_authorization");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let signed = SignedRequestBuilder::new(&self.consumer).build(
					HttpMethod::Get,
					self.service.request_token_endpoint(),
					&BTreeMap::new(),
				)?;
				let response = self
					.http_client
					.execute(WireRequest::get(signed.to_url()))
					.await
					.map_err(TransportError::network)?;

				if !response.is_success() {
					return Err(TransportError::Status {
						status: response.status,
						body: response.body,
					}
					.into());
				}

				let request_credential = Credential::from_wire_string(&response.body)?;
				let mut params = BTreeMap::new();

				if let Some(callback) = callback {
					params.insert("oauth_callback".to_owned(), callback.to_string());
				}

				let authorize_url = SignedRequestBuilder::new(&self.consumer)
					.with_credential(&request_credential)
					.build(HttpMethod::Get, self.service.authorize_endpoint(), &params)?
					.to_url();

				Ok(AuthorizationSession { request_credential, authorize_url })
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Exchanges an approved request credential for the long-lived access credential.
	///
	/// The exchange is deliberately never cached: re-presenting an already-consumed (or
	/// never-approved, or expired) request credential surfaces the service's rejection as
	/// [`Error::AuthorizationRejected`] with the HTTP status and raw body preserved, and the
	/// caller must restart the handshake from [`AuthorizationFlow::begin_authorization`].
	pub async fn complete_authorization(
		&self,
		request_credential: &Credential,
	) -> Result<Credential> {
		const KIND: CallKind = CallKind::AccessToken;

		let span = CallSpan::new(KIND, "complete_authorization");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let signed = SignedRequestBuilder::new(&self.consumer)
					.with_credential(request_credential)
					.build(
						HttpMethod::Get,
						self.service.access_token_endpoint(),
						&BTreeMap::new(),
					)?;
				let response = self
					.http_client
					.execute(WireRequest::get(signed.to_url()))
					.await
					.map_err(TransportError::network)?;

				if !response.is_success() {
					return Err(Error::AuthorizationRejected {
						status: response.status,
						detail: response.body,
					});
				}

				Ok(Credential::from_wire_string(&response.body)?)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}
}
