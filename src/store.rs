//! Storage contracts and built-in stores for the persisted access credential.
//!
//! The handshake and RPC layers never touch storage themselves: callers load a persisted
//! credential at startup, seed an [`RpcClient`](crate::rpc::RpcClient) with it, and save the
//! credential produced by a completed handshake.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::{_prelude::*, auth::Credential};

/// Future type returned by [`CredentialStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Persistence contract for the caller-owned access credential.
pub trait CredentialStore
where
	Self: Send + Sync,
{
	/// Persists or replaces the stored credential.
	fn save(&self, credential: Credential) -> StoreFuture<'_, ()>;

	/// Fetches the stored credential, if present.
	fn load(&self) -> StoreFuture<'_, Option<Credential>>;

	/// Removes the stored credential, e.g. after the service rejects it.
	fn clear(&self) -> StoreFuture<'_, ()>;
}

/// Error type produced by [`CredentialStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// The persisted payload could not be parsed back into a credential.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;
	use crate::error::Error;

	#[test]
	fn store_error_converts_into_client_error_with_source() {
		let store_error = StoreError::Backend { message: "disk unreachable".into() };
		let client_error: Error = store_error.clone().into();

		assert!(matches!(client_error, Error::Store(_)));
		assert!(client_error.to_string().contains("disk unreachable"));

		let source = StdError::source(&client_error)
			.expect("Client error should expose the original store error as its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}
}
