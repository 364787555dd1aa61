//! Delegated-authorization RPC client—three-legged OAuth 1.0a handshakes, HMAC-SHA1 signed
//! requests, and dynamic JSON method dispatch in one crate.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod error;
pub mod flows;
pub mod http;
pub mod obs;
pub mod rpc;
pub mod service;
pub mod sign;
pub mod store;
#[cfg(all(any(test, feature = "test"), feature = "reqwest"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// self
	use crate::{
		auth::{ConsumerIdentity, Credential},
		flows::AuthorizationFlow,
		http::ReqwestHttpClient,
		rpc::RpcClient,
		service::ServiceDescriptor,
	};

	/// Builds a reqwest HTTP client that accepts the self-signed certificates produced by
	/// `httpmock` during tests.
	pub fn test_reqwest_http_client() -> ReqwestHttpClient {
		let client = ReqwestClient::builder()
			.danger_accept_invalid_certs(true)
			.danger_accept_invalid_hostnames(true)
			.build()
			.expect("Failed to build insecure Reqwest client for tests.");

		ReqwestHttpClient::with_client(client)
	}

	/// Constructs an [`AuthorizationFlow`] backed by the insecure reqwest transport used across
	/// integration tests.
	pub fn build_test_authorization_flow(
		service: ServiceDescriptor,
		consumer_key: &str,
		consumer_secret: &str,
	) -> AuthorizationFlow<ReqwestHttpClient> {
		AuthorizationFlow::with_http_client(
			ConsumerIdentity::new(consumer_key, consumer_secret),
			service,
			test_reqwest_http_client(),
		)
	}

	/// Constructs an [`RpcClient`] holding `credential`, backed by the insecure reqwest
	/// transport used across integration tests.
	pub fn build_test_rpc_client(
		service: ServiceDescriptor,
		consumer_key: &str,
		consumer_secret: &str,
		credential: Credential,
	) -> RpcClient<ReqwestHttpClient> {
		RpcClient::with_http_client(
			ConsumerIdentity::new(consumer_key, consumer_secret),
			service,
			credential,
			test_reqwest_http_client(),
		)
	}
}

mod _prelude {
	pub use std::{
		collections::BTreeMap,
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::Value;
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(all(test, feature = "reqwest"))] use {color_eyre as _, httpmock as _, oauth1_rpc as _};
