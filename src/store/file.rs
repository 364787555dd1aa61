//! Simple file-backed [`CredentialStore`] for command-line tools and bots.

// std
use std::{
	fs::{self, File},
	io::Write,
	path::{Path, PathBuf},
};
// self
use crate::{
	_prelude::*,
	auth::Credential,
	store::{CredentialStore, StoreError, StoreFuture},
};

/// Persists the access credential to a single file in its compact wire string form, so the
/// stored payload stays interchangeable with tokens saved by other client implementations.
#[derive(Clone, Debug)]
pub struct FileStore {
	path: PathBuf,
}
impl FileStore {
	/// Creates a store at the provided path; the file itself appears on first save.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// Path the credential is persisted at.
	pub fn path(&self) -> &Path {
		&self.path
	}

	fn read_current(&self) -> Result<Option<Credential>, StoreError> {
		if !self.path.exists() {
			return Ok(None);
		}

		let contents = fs::read_to_string(&self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to read {}: {e}", self.path.display()),
		})?;
		let trimmed = contents.trim();

		if trimmed.is_empty() {
			return Ok(None);
		}

		Credential::from_wire_string(trimmed).map(Some).map_err(|e| StoreError::Serialization {
			message: format!("Failed to parse {}: {e}", self.path.display()),
		})
	}

	fn ensure_parent_exists(&self) -> Result<(), StoreError> {
		if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent).map_err(|e| StoreError::Backend {
				message: format!("Failed to create store directory {}: {e}", parent.display()),
			})?;
		}

		Ok(())
	}

	fn persist(&self, payload: &str) -> Result<(), StoreError> {
		self.ensure_parent_exists()?;

		let mut tmp_path = self.path.clone();

		tmp_path.set_extension("tmp");

		{
			let mut file = File::create(&tmp_path).map_err(|e| StoreError::Backend {
				message: format!("Failed to create {}: {e}", tmp_path.display()),
			})?;

			file.write_all(payload.as_bytes()).map_err(|e| StoreError::Backend {
				message: format!("Failed to write {}: {e}", tmp_path.display()),
			})?;
			file.sync_all().map_err(|e| StoreError::Backend {
				message: format!("Failed to sync {}: {e}", tmp_path.display()),
			})?;
		}

		fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Backend {
			message: format!("Failed to replace {}: {e}", self.path.display()),
		})
	}
}
impl CredentialStore for FileStore {
	fn save(&self, credential: Credential) -> StoreFuture<'_, ()> {
		Box::pin(async move { self.persist(&credential.to_wire_string()) })
	}

	fn load(&self) -> StoreFuture<'_, Option<Credential>> {
		Box::pin(async move { self.read_current() })
	}

	fn clear(&self) -> StoreFuture<'_, ()> {
		Box::pin(async move {
			if !self.path.exists() {
				return Ok(());
			}

			fs::remove_file(&self.path).map_err(|e| StoreError::Backend {
				message: format!("Failed to remove {}: {e}", self.path.display()),
			})
		})
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::{env, process};
	// crates.io
	use tokio::runtime::Runtime;
	// self
	use super::*;

	fn temp_path() -> PathBuf {
		let unique = format!(
			"oauth1_rpc_file_store_{}_{}.tok",
			process::id(),
			OffsetDateTime::now_utc().unix_timestamp_nanos(),
		);

		env::temp_dir().join(unique)
	}

	#[test]
	fn save_and_reload_round_trip() {
		let path = temp_path();
		let store = FileStore::new(&path);
		let credential = Credential::new("8a8u79TUnbWKs3Bp", "8rGSdemBs2zne2yV");
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		rt.block_on(store.save(credential.clone()))
			.expect("Failed to save fixture credential to file store.");

		let raw = fs::read_to_string(&path).expect("Store file should exist after save.");

		assert_eq!(raw, credential.to_wire_string());

		let reopened = FileStore::new(&path);
		let fetched = rt
			.block_on(reopened.load())
			.expect("Failed to load fixture credential from file store.")
			.expect("File store lost credential after reopen.");

		assert_eq!(fetched, credential);

		rt.block_on(store.clear()).expect("Failed to clear file store.");

		assert!(!path.exists());
	}

	#[test]
	fn load_treats_missing_and_empty_files_as_absent() {
		let path = temp_path();
		let store = FileStore::new(&path);
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		assert_eq!(rt.block_on(store.load()).expect("Missing file should load as None."), None);

		fs::write(&path, "  \n").expect("Failed to write empty store fixture.");

		assert_eq!(rt.block_on(store.load()).expect("Empty file should load as None."), None);

		fs::remove_file(&path).expect("Failed to remove empty store fixture.");
	}

	#[test]
	fn load_rejects_corrupt_payloads() {
		let path = temp_path();
		let store = FileStore::new(&path);
		let rt = Runtime::new().expect("Failed to build Tokio runtime for file store test.");

		fs::write(&path, "not-a-credential").expect("Failed to write corrupt store fixture.");

		let err = rt
			.block_on(store.load())
			.expect_err("Corrupt payloads should surface a serialization error.");

		assert!(matches!(err, StoreError::Serialization { .. }));

		fs::remove_file(&path).expect("Failed to remove corrupt store fixture.");
	}
}
