//! In-memory [`CredentialStore`] for tests and short-lived processes.

// self
use crate::{
	_prelude::*,
	auth::Credential,
	store::{CredentialStore, StoreFuture},
};

/// Keeps the credential in process memory behind a read-mostly lock.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
	inner: Arc<RwLock<Option<Credential>>>,
}
impl CredentialStore for MemoryStore {
	fn save(&self, credential: Credential) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			*self.inner.write() = Some(credential);

			Ok(())
		})
	}

	fn load(&self) -> StoreFuture<'_, Option<Credential>> {
		Box::pin(async move { Ok(self.inner.read().clone()) })
	}

	fn clear(&self) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			*self.inner.write() = None;

			Ok(())
		})
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use tokio::runtime::Runtime;
	// self
	use super::*;

	#[test]
	fn save_load_clear_cycle() {
		let store = MemoryStore::default();
		let credential = Credential::new("tok", "sec");
		let rt = Runtime::new().expect("Failed to build Tokio runtime for memory store test.");

		assert_eq!(rt.block_on(store.load()).expect("Empty store should load as None."), None);

		rt.block_on(store.save(credential.clone())).expect("Save should succeed.");

		assert_eq!(
			rt.block_on(store.load()).expect("Load should succeed."),
			Some(credential),
		);

		rt.block_on(store.clear()).expect("Clear should succeed.");

		assert_eq!(rt.block_on(store.load()).expect("Cleared store should load as None."), None);
	}
}
