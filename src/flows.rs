//! Authorization handshake orchestration.

pub mod handshake;

pub use handshake::*;

// self
use crate::{_prelude::*, auth::ConsumerIdentity, http::ServiceHttpClient, service::ServiceDescriptor};
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Authorization flow specialized for the crate's default reqwest transport.
pub type ReqwestAuthorizationFlow = AuthorizationFlow<ReqwestHttpClient>;

/// Orchestrates the three-legged authorization handshake against one service deployment.
///
/// One flow instance walks a single session: [`AuthorizationFlow::begin_authorization`]
/// obtains a request credential and the URL the end-user must visit; the caller detects
/// approval out of band (redirect capture, polling, or manual confirmation); and
/// [`AuthorizationFlow::complete_authorization`] exchanges the approved request credential for
/// the long-lived access credential that seeds an [`RpcClient`](crate::rpc::RpcClient).
pub struct AuthorizationFlow<C>
where
	C: ?Sized + ServiceHttpClient,
{
	/// HTTP client used for both handshake round trips.
	pub http_client: Arc<C>,
	/// Endpoint descriptor for the target deployment.
	pub service: ServiceDescriptor,
	/// Consumer identity performing the handshake.
	pub consumer: ConsumerIdentity,
}
impl<C> AuthorizationFlow<C>
where
	C: ?Sized + ServiceHttpClient,
{
	/// Creates a flow that reuses the caller-provided transport.
	pub fn with_http_client(
		consumer: ConsumerIdentity,
		service: ServiceDescriptor,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), service, consumer }
	}
}
#[cfg(feature = "reqwest")]
impl AuthorizationFlow<ReqwestHttpClient> {
	/// Creates a flow with the crate's default reqwest transport.
	pub fn new(consumer: ConsumerIdentity, service: ServiceDescriptor) -> Self {
		Self::with_http_client(consumer, service, ReqwestHttpClient::default())
	}
}
impl<C> Clone for AuthorizationFlow<C>
where
	C: ?Sized + ServiceHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: self.http_client.clone(),
			service: self.service.clone(),
			consumer: self.consumer.clone(),
		}
	}
}
impl<C> Debug for AuthorizationFlow<C>
where
	C: ?Sized + ServiceHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthorizationFlow")
			.field("service", &self.service)
			.field("consumer_key", &self.consumer.key)
			.finish()
	}
}
