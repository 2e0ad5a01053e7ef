//! Bundles held in memory.

use std::collections::{BTreeMap, BTreeSet};

use crate::{ResourceLoader, error::VfsError};

/// An in-memory set of bundles, for synthetic assets and tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLoader {
	bundles: BTreeMap<String, BTreeMap<String, Vec<u8>>>,
}

impl MemoryLoader {
	/// Creates a loader with no bundles.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces `file` in `bundle`, creating the bundle if needed.
	pub fn insert_file(
		&mut self,
		bundle: impl Into<String>,
		file: impl Into<String>,
		data: impl Into<Vec<u8>>,
	) {
		self.bundles.entry(bundle.into()).or_default().insert(file.into(), data.into());
	}

	/// Builder form of [`MemoryLoader::insert_file`].
	#[must_use]
	pub fn with_file(
		mut self,
		bundle: impl Into<String>,
		file: impl Into<String>,
		data: impl Into<Vec<u8>>,
	) -> Self {
		self.insert_file(bundle, file, data);
		self
	}

	/// Creates `bundle` with no files, if it does not exist yet.
	pub fn insert_bundle(&mut self, bundle: impl Into<String>) {
		self.bundles.entry(bundle.into()).or_default();
	}

	/// Returns the bundle names in sorted order.
	pub fn bundles(&self) -> impl Iterator<Item = &str> {
		self.bundles.keys().map(String::as_str)
	}

	fn bundle(&self, bundle: &str) -> Result<&BTreeMap<String, Vec<u8>>, VfsError> {
		self.bundles.get(bundle).ok_or_else(|| VfsError::BundleNotFound(bundle.to_string()))
	}
}

impl ResourceLoader for MemoryLoader {
	fn list_files(&self, bundle: &str) -> Result<BTreeSet<String>, VfsError> {
		Ok(self.bundle(bundle)?.keys().cloned().collect())
	}

	fn read_binary(&self, bundle: &str, file: &str) -> Result<Vec<u8>, VfsError> {
		self.bundle(bundle)?.get(file).cloned().ok_or_else(|| VfsError::FileNotFound {
			bundle: bundle.to_string(),
			file: file.to_string(),
		})
	}
}
