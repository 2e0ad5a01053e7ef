//! INI-style key/value tables.

use config::{Config, File, FileFormat};

use crate::{KeyValueTable, error::VfsError};

/// Parses INI text into sections of key/value pairs.
///
/// Values are kept as raw strings; interpreting them is up to the caller.
/// Keys that appear before the first section header have nowhere to go and
/// are rejected.
///
/// # Errors
///
/// Returns [`VfsError::Ini`] naming `file` if the text cannot be parsed.
pub fn parse_key_value_table(file: &str, text: &str) -> Result<KeyValueTable, VfsError> {
	let ini_error = |source| VfsError::Ini {
		file: file.to_string(),
		source,
	};

	Config::builder()
		.add_source(File::from_str(text, FileFormat::Ini))
		.build()
		.and_then(|config| config.try_deserialize::<KeyValueTable>())
		.map_err(ini_error)
}
