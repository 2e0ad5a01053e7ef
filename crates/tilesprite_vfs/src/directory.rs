//! Bundles backed by directories on disk.

use std::{
	collections::BTreeSet,
	fs,
	io::ErrorKind,
	path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{ResourceLoader, error::VfsError};

/// Loads bundles from directories below a root path.
///
/// The bundle `walkabouts/debug` maps to `<root>/walkabouts/debug/`. Only
/// regular files directly inside that directory belong to the bundle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLoader {
	root: PathBuf,
}

impl DirectoryLoader {
	/// Creates a loader rooted at `root`.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		Self {
			root: root.into(),
		}
	}

	/// Returns the root directory.
	pub fn root(&self) -> &Path {
		&self.root
	}

	fn bundle_dir(&self, bundle: &str) -> Result<PathBuf, VfsError> {
		let path = self.root.join(bundle);
		if path.is_dir() {
			Ok(path)
		} else {
			Err(VfsError::BundleNotFound(bundle.to_string()))
		}
	}
}

/// File names must not escape their bundle directory.
fn is_plain_file_name(file: &str) -> bool {
	!file.is_empty() && file != "." && file != ".." && !file.contains(['/', '\\'])
}

impl ResourceLoader for DirectoryLoader {
	fn list_files(&self, bundle: &str) -> Result<BTreeSet<String>, VfsError> {
		let dir = self.bundle_dir(bundle)?;
		let mut files = BTreeSet::new();

		for entry in fs::read_dir(&dir)? {
			let entry = entry?;
			if !entry.file_type()?.is_file() {
				continue;
			}
			match entry.file_name().into_string() {
				Ok(name) => {
					files.insert(name);
				}
				Err(name) => warn!("Skipping non UTF-8 file name {:?} in {}", name, dir.display()),
			}
		}

		debug!("Bundle {} lists {} files", bundle, files.len());
		Ok(files)
	}

	fn read_binary(&self, bundle: &str, file: &str) -> Result<Vec<u8>, VfsError> {
		let not_found = || VfsError::FileNotFound {
			bundle: bundle.to_string(),
			file: file.to_string(),
		};

		if !is_plain_file_name(file) {
			return Err(not_found());
		}

		let path = self.bundle_dir(bundle)?.join(file);
		fs::read(&path).map_err(|e| match e.kind() {
			ErrorKind::NotFound => not_found(),
			_ => VfsError::IOError(e),
		})
	}
}
