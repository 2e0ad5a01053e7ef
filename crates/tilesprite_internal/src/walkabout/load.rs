//! Loading walkabouts from resource bundles.
//!
//! A bundle holds either a single `only.gif` or one `{action}_{direction}.gif`
//! per animation. Any animation may have an anchor sidecar with the same stem
//! and an `.ini` extension. Other files are ignored.

use log::debug;
use tilesprite_types::{AnchorTable, Animation, AnimationKey, DirectedAnimationSet};
use tilesprite_vfs::{KeyValueTable, ResourceLoader};

use super::Walkabout;
use crate::{
	config::WalkaboutConfig,
	decode::{FrameDecoder, GifFrameDecoder},
	error::WalkaboutError,
};

/// Extension of animation files in a walkabout bundle
pub const ANIMATION_EXTENSION: &str = ".gif";

/// Extension of anchor sidecar files in a walkabout bundle
pub const ANCHOR_EXTENSION: &str = ".ini";

impl Walkabout {
	/// Loads the walkabout stored in `bundle`.
	///
	/// # Errors
	///
	/// - [`WalkaboutError::BadWalkabout`] if the bundle has no animations
	/// - [`WalkaboutError::Anim`] for a misnamed animation, malformed anchors
	///   or an incomplete directional set
	/// - [`WalkaboutError::Decode`] if an animation cannot be decoded
	/// - [`WalkaboutError::Resource`] if the bundle cannot be read
	pub fn from_resource<L, D>(
		loader: &L,
		decoder: &D,
		bundle: &str,
		config: &WalkaboutConfig,
	) -> Result<Self, WalkaboutError>
	where
		L: ResourceLoader + ?Sized,
		D: FrameDecoder + ?Sized,
	{
		let files = loader.list_files(bundle)?;
		let mut builder = DirectedAnimationSet::builder();

		for file in &files {
			let Some(stem) = file.strip_suffix(ANIMATION_EXTENSION) else {
				continue;
			};
			let key = AnimationKey::from_file_stem(stem)?;

			let bytes = loader.read_binary(bundle, file)?;
			let frames = decoder.decode_animated_image(&bytes).map_err(|source| {
				WalkaboutError::Decode {
					file: file.clone(),
					source,
				}
			})?;

			let sidecar = format!("{stem}{ANCHOR_EXTENSION}");
			let animation = if files.contains(&sidecar) {
				let sections = loader.read_key_value_table(bundle, &sidecar)?;
				Animation::with_anchors(frames, anchor_table(&sections)?)?
			} else {
				Animation::from_surface_durations(frames)?
			};

			debug!(
				"{bundle}/{file}: {} frames over {}ms, anchors: {}",
				animation.len(),
				animation.total_duration(),
				animation.has_anchors()
			);
			builder.insert(key, animation)?;
		}

		if builder.is_empty() {
			return Err(WalkaboutError::BadWalkabout {
				bundle: bundle.to_string(),
			});
		}

		let animations = builder.build()?;
		debug!("loaded walkabout {bundle} with {} animations", animations.len());

		Ok(Self::new(animations).with_anchor_group(config.anchor_group.clone()))
	}

	/// Loads the walkabout stored in `bundle` with the GIF decoder and the
	/// default configuration.
	///
	/// # Errors
	///
	/// Same as [`Walkabout::from_resource`].
	pub fn from_resource_with_defaults<L>(loader: &L, bundle: &str) -> Result<Self, WalkaboutError>
	where
		L: ResourceLoader + ?Sized,
	{
		let config = WalkaboutConfig::default();
		Self::from_resource(loader, &GifFrameDecoder::from_config(&config), bundle, &config)
	}
}

fn anchor_table(sections: &KeyValueTable) -> Result<AnchorTable, WalkaboutError> {
	let table = AnchorTable::from_sections(sections.iter().map(|(label, entries)| {
		(label.as_str(), entries.iter().map(|(key, value)| (key.as_str(), value.as_str())))
	}))?;
	Ok(table)
}
