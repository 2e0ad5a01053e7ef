//! Resource bundle access for `tilesprite`.
//!
//! A bundle is a named, flat collection of files, such as every animation and
//! anchor sidecar belonging to one walkabout. The engine never touches the
//! file system directly; it goes through a [`ResourceLoader`], so callers can
//! back bundles with directories, archives or synthetic data.
//!
//! # Examples
//!
//! ```
//! use tilesprite_vfs::{MemoryLoader, ResourceLoader};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let loader = MemoryLoader::new()
//!     .with_file("hat", "only.gif", b"GIF89a".to_vec())
//!     .with_file("hat", "only.ini", b"[head_anchor]\n0=1,1\n".to_vec());
//!
//! let files = loader.list_files("hat")?;
//! assert_eq!(files.len(), 2);
//!
//! let anchors = loader.read_key_value_table("hat", "only.ini")?;
//! assert_eq!(anchors["head_anchor"]["0"], "1,1");
//! # Ok(())
//! # }
//! ```

use std::collections::{BTreeMap, BTreeSet};

mod directory;
mod error;
mod ini;
mod memory;

pub use directory::DirectoryLoader;
pub use error::VfsError;
pub use ini::parse_key_value_table;
pub use memory::MemoryLoader;

/// Sections of an INI-style file: section name to key to raw value.
pub type KeyValueTable = BTreeMap<String, BTreeMap<String, String>>;

/// Read access to named resource bundles.
///
/// Only [`list_files`](ResourceLoader::list_files) and
/// [`read_binary`](ResourceLoader::read_binary) must be implemented; text and
/// key/value access are derived from them.
pub trait ResourceLoader {
	/// Returns the names of every file in `bundle`, in sorted order.
	///
	/// # Errors
	///
	/// Returns [`VfsError::BundleNotFound`] if the bundle does not exist.
	fn list_files(&self, bundle: &str) -> Result<BTreeSet<String>, VfsError>;

	/// Returns the raw bytes of `file` in `bundle`.
	///
	/// # Errors
	///
	/// Returns [`VfsError::BundleNotFound`] or [`VfsError::FileNotFound`] if
	/// the file does not exist, [`VfsError::IOError`] if it cannot be read.
	fn read_binary(&self, bundle: &str, file: &str) -> Result<Vec<u8>, VfsError>;

	/// Returns `file` in `bundle` decoded as UTF-8.
	///
	/// # Errors
	///
	/// Same as [`read_binary`](ResourceLoader::read_binary), plus
	/// [`VfsError::Utf8`] for invalid text.
	fn read_text(&self, bundle: &str, file: &str) -> Result<String, VfsError> {
		let bytes = self.read_binary(bundle, file)?;
		String::from_utf8(bytes).map_err(|source| VfsError::Utf8 {
			file: file.to_string(),
			source,
		})
	}

	/// Returns `file` in `bundle` parsed as an INI-style key/value table.
	///
	/// # Errors
	///
	/// Same as [`read_text`](ResourceLoader::read_text), plus
	/// [`VfsError::Ini`] for malformed content.
	fn read_key_value_table(&self, bundle: &str, file: &str) -> Result<KeyValueTable, VfsError> {
		let text = self.read_text(bundle, file)?;
		parse_key_value_table(file, &text)
	}

	/// Returns true if `bundle` exists and contains `file`.
	fn contains(&self, bundle: &str, file: &str) -> bool {
		self.list_files(bundle).is_ok_and(|files| files.contains(file))
	}
}

impl<T: ResourceLoader + ?Sized> ResourceLoader for &T {
	fn list_files(&self, bundle: &str) -> Result<BTreeSet<String>, VfsError> {
		(**self).list_files(bundle)
	}

	fn read_binary(&self, bundle: &str, file: &str) -> Result<Vec<u8>, VfsError> {
		(**self).read_binary(bundle, file)
	}

	fn read_text(&self, bundle: &str, file: &str) -> Result<String, VfsError> {
		(**self).read_text(bundle, file)
	}

	fn read_key_value_table(&self, bundle: &str, file: &str) -> Result<KeyValueTable, VfsError> {
		(**self).read_key_value_table(bundle, file)
	}
}
