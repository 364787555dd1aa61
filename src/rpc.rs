//! Dynamic RPC dispatch over signed POST requests.

pub mod call;
pub mod envelope;

pub use call::*;
pub use envelope::*;

// self
use crate::{
	_prelude::*,
	auth::{ConsumerIdentity, Credential},
	error::TransportError,
	http::{HttpMethod, ServiceHttpClient, WireRequest},
	obs::{self, CallKind, CallOutcome, CallSpan},
	service::ServiceDescriptor,
	sign::SignedRequestBuilder,
};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// RPC client specialized for the crate's default reqwest transport.
pub type ReqwestRpcClient = RpcClient<ReqwestHttpClient>;

/// Calls arbitrary named remote methods on behalf of one authorized end-user.
///
/// The client performs no local allow-list validation; any name is forwarded and the server
/// decides whether it exists. All state is immutable after construction, so one instance can
/// be shared freely between concurrent callers.
pub struct RpcClient<C>
where
	C: ?Sized + ServiceHttpClient,
{
	/// HTTP client used for every outbound call.
	pub http_client: Arc<C>,
	/// Endpoint descriptor for the target deployment.
	pub service: ServiceDescriptor,
	/// Consumer identity shared with the handshake layer.
	pub consumer: ConsumerIdentity,
	/// Access credential authorizing every call.
	pub credential: Credential,
}
impl<C> RpcClient<C>
where
	C: ?Sized + ServiceHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		consumer: ConsumerIdentity,
		service: ServiceDescriptor,
		credential: Credential,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), service, consumer, credential }
	}

	/// Invokes the named remote method with the provided named arguments.
	///
	/// Compound argument values (arrays, objects) marshal to their JSON text; scalars pass
	/// through bare. The method name gains exactly one trailing path separator before being
	/// resolved against the API root, and the request goes out as a signed POST form body.
	pub async fn invoke(&self, method: &str, args: BTreeMap<String, Value>) -> Result<Value> {
		const KIND: CallKind = CallKind::Invoke;

		let span = CallSpan::new(KIND, "invoke");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let endpoint = self.service.method_endpoint(method)?;
				let params = call::marshal_args(&args);
				let signed = SignedRequestBuilder::new(&self.consumer)
					.with_credential(&self.credential)
					.build(HttpMethod::Post, &endpoint, &params)?;
				let response = self
					.http_client
					.execute(WireRequest::post_form(endpoint, signed.form_body()))
					.await
					.map_err(TransportError::network)?;

				if !response.is_success() {
					return Err(TransportError::Status {
						status: response.status,
						body: response.body,
					}
					.into());
				}

				match ResponseEnvelope::from_body(&response.body)? {
					ResponseEnvelope::Ok { response } => Ok(response.unwrap_or(Value::Null)),
					ResponseEnvelope::Error { error } => Err(Error::RemoteOperation { message: error }),
				}
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Convenience entry point forwarding a built [`MethodCall`] to [`RpcClient::invoke`].
	pub async fn call(&self, call: MethodCall) -> Result<Value> {
		self.invoke(&call.method, call.args).await
	}
}
#[cfg(feature = "reqwest")]
impl RpcClient<ReqwestHttpClient> {
	/// Creates a client with the crate's default reqwest transport.
	pub fn new(
		consumer: ConsumerIdentity,
		service: ServiceDescriptor,
		credential: Credential,
	) -> Self {
		Self::with_http_client(consumer, service, credential, ReqwestHttpClient::default())
	}
}
impl<C> Clone for RpcClient<C>
where
	C: ?Sized + ServiceHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			service: self.service.clone(),
			consumer: self.consumer.clone(),
			credential: self.credential.clone(),
		}
	}
}
impl<C> Debug for RpcClient<C>
where
	C: ?Sized + ServiceHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RpcClient")
			.field("service", &self.service)
			.field("consumer_key", &self.consumer.key)
			.field("token", &self.credential.token)
			.finish()
	}
}
