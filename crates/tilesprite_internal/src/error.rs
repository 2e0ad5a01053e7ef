//! Error type for walkabout loading.

use thiserror::Error;
use tilesprite_types::AnimError;
use tilesprite_vfs::VfsError;

/// Errors that can occur when loading or configuring a walkabout
#[derive(Debug, Error)]
pub enum WalkaboutError {
	/// The bundle holds no animation files
	#[error("Bundle {bundle} has no walkabout animations")]
	BadWalkabout {
		/// Name of the offending bundle
		bundle: String,
	},

	/// An animation file could not be decoded
	#[error("Failed to decode {file}: {source}")]
	Decode {
		/// Name of the file being decoded
		file: String,
		/// Underlying decoder error
		#[source]
		source: image::ImageError,
	},

	/// Invalid animation, anchor or set
	#[error(transparent)]
	Anim(#[from] AnimError),

	/// Resource access failed
	#[error(transparent)]
	Resource(#[from] VfsError),

	/// Malformed walkabout configuration
	#[error("Invalid walkabout configuration: {0}")]
	Config(#[from] config::ConfigError),
}
