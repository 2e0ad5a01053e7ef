//! Walkabout loading and composition settings.

use config::{Config, File, FileFormat};
use serde::Deserialize;
use tilesprite_types::HEAD_ANCHOR;

use crate::error::WalkaboutError;

/// Display time substituted for GIF frames that declare no delay
pub const DEFAULT_ZERO_DELAY_FRAME_MS: u32 = 100;

/// Settings shared by a walkabout tree.
///
/// Every field has a default, so a TOML document only needs to list what it
/// overrides:
///
/// ```
/// use tilesprite_internal::WalkaboutConfig;
///
/// let config = WalkaboutConfig::from_toml_str("anchor_group = \"hand_anchor\"").unwrap();
/// assert_eq!(config.anchor_group, "hand_anchor");
/// assert_eq!(config.zero_delay_frame_ms, 100);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct WalkaboutConfig {
	/// Anchor group used to pin children to their parent
	pub anchor_group: String,
	/// Duration given to frames whose encoded delay is zero, in milliseconds
	pub zero_delay_frame_ms: u32,
}

impl Default for WalkaboutConfig {
	fn default() -> Self {
		Self {
			anchor_group: HEAD_ANCHOR.to_string(),
			zero_delay_frame_ms: DEFAULT_ZERO_DELAY_FRAME_MS,
		}
	}
}

impl WalkaboutConfig {
	/// Creates a configuration with explicit values.
	pub fn new(anchor_group: impl Into<String>, zero_delay_frame_ms: u32) -> Self {
		Self {
			anchor_group: anchor_group.into(),
			zero_delay_frame_ms,
		}
	}

	/// Parses a configuration from TOML text.
	///
	/// # Errors
	///
	/// Returns [`WalkaboutError::Config`] if the text is not valid TOML or a
	/// field has the wrong type.
	pub fn from_toml_str(text: &str) -> Result<Self, WalkaboutError> {
		let config = Config::builder().add_source(File::from_str(text, FileFormat::Toml)).build()?;
		Ok(config.try_deserialize()?)
	}
}
