//! Error types for resource bundle access.

use thiserror::Error;

/// Errors that can occur while reading resource bundles
#[derive(Debug, Error)]
pub enum VfsError {
	/// Bundle does not exist
	#[error("Bundle not found: {0}")]
	BundleNotFound(String),

	/// File does not exist in the bundle
	#[error("File {file} not found in bundle {bundle}")]
	FileNotFound {
		/// Bundle that was searched
		bundle: String,
		/// Requested file name
		file: String,
	},

	/// File is not valid UTF-8 text
	#[error("File {file} is not valid UTF-8: {source}")]
	Utf8 {
		/// Offending file name
		file: String,
		/// Underlying decode error
		source: std::string::FromUtf8Error,
	},

	/// File is not a valid key/value table
	#[error("File {file} is not a valid key/value table: {source}")]
	Ini {
		/// Offending file name
		file: String,
		/// Underlying parse error
		source: config::ConfigError,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}
