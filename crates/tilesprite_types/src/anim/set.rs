//! Animations keyed by `(action, direction)`.
//!
//! A walkabout bundle contains either one universal animation, stored as
//! `only.gif`, or one animation per action and facing, stored as
//! `{action}_{direction}.gif`. [`AnimationKey`] decodes those names and
//! [`DirectedAnimationSetBuilder`] validates that the collected animations
//! form a usable set.

use std::{collections::BTreeMap, fmt};

use crate::{
	error::AnimError,
	state::{Action, Direction},
};

use super::animation::Animation;

/// File stem reserved for sprites with a single universal pose
pub const ONLY_STEM: &str = "only";

/// Where an animation belongs in a [`DirectedAnimationSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationKey {
	/// The universal pose, addressed as `(stand, south)`
	Only,
	/// A specific action and facing
	Directed(Action, Direction),
}

impl AnimationKey {
	/// Decodes an asset file stem such as `walk_north` or `only`.
	///
	/// The action is everything before the first underscore and the direction
	/// everything after it, so `stand_north_east` is valid.
	///
	/// # Errors
	///
	/// Returns [`AnimError::BadWalkaboutAsset`] naming the stem if it does not
	/// decompose into a known action and direction.
	pub fn from_file_stem(stem: &str) -> Result<Self, AnimError> {
		if stem == ONLY_STEM {
			return Ok(Self::Only);
		}

		let bad = || AnimError::BadWalkaboutAsset {
			name: stem.to_string(),
		};

		let (action, direction) = stem.split_once('_').ok_or_else(bad)?;
		let action = Action::from_name(action).ok_or_else(bad)?;
		let direction = Direction::from_name(direction).ok_or_else(bad)?;

		Ok(Self::Directed(action, direction))
	}

	/// Returns the `(action, direction)` pair this key is addressed by.
	pub fn pair(self) -> (Action, Direction) {
		match self {
			Self::Only => (Action::Stand, Direction::South),
			Self::Directed(action, direction) => (action, direction),
		}
	}

	/// Returns the file stem this key is stored under.
	pub fn file_stem(self) -> String {
		match self {
			Self::Only => ONLY_STEM.to_string(),
			Self::Directed(action, direction) => format!("{action}_{direction}"),
		}
	}
}

impl fmt::Display for AnimationKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.file_stem())
	}
}

type Slots = [[Option<usize>; Direction::COUNT]; Action::COUNT];

/// A validated mapping from `(action, direction)` to [`Animation`].
///
/// Lookups go through a fixed table indexed by the two enums. A
/// single-animation set fills every slot with its one animation, which is how
/// any query against it resolves to `(stand, south)`.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectedAnimationSet {
	/// Stored animations, never empty
	animations: Vec<Animation>,
	/// Key of each stored animation, parallel to `animations`
	keys: Vec<AnimationKey>,
	/// Index into `animations` per `(action, direction)`
	slots: Slots,
	/// Index of the `(stand, south)` animation
	default_index: usize,
}

impl DirectedAnimationSet {
	/// Creates a set with a single universal animation.
	pub fn single(animation: Animation) -> Self {
		Self {
			animations: vec![animation],
			keys: vec![AnimationKey::Only],
			slots: [[Some(0); Direction::COUNT]; Action::COUNT],
			default_index: 0,
		}
	}

	/// Returns a builder for a set assembled entry by entry.
	pub fn builder() -> DirectedAnimationSetBuilder {
		DirectedAnimationSetBuilder::new()
	}

	/// Returns true if this set holds one universal animation.
	pub fn is_single(&self) -> bool {
		self.keys == [AnimationKey::Only]
	}

	/// Returns true if `resolve(action, direction)` would succeed.
	pub fn contains(&self, action: Action, direction: Direction) -> bool {
		self.slot(action, direction).is_some()
	}

	#[inline]
	fn slot(&self, action: Action, direction: Direction) -> Option<usize> {
		self.slots[action.index()][direction.index()]
	}

	/// Returns the animation for `(action, direction)`.
	///
	/// A single-animation set answers every query with its one animation.
	///
	/// # Errors
	///
	/// Returns [`AnimError::InvalidActionDirection`] if a directional set has
	/// no entry for the pair.
	pub fn resolve(&self, action: Action, direction: Direction) -> Result<&Animation, AnimError> {
		self.slot(action, direction).map(|index| &self.animations[index]).ok_or(
			AnimError::InvalidActionDirection {
				action,
				direction,
			},
		)
	}

	/// Mutable variant of [`DirectedAnimationSet::resolve`].
	///
	/// # Errors
	///
	/// Same as [`DirectedAnimationSet::resolve`].
	pub fn resolve_mut(
		&mut self,
		action: Action,
		direction: Direction,
	) -> Result<&mut Animation, AnimError> {
		match self.slot(action, direction) {
			Some(index) => Ok(&mut self.animations[index]),
			None => Err(AnimError::InvalidActionDirection {
				action,
				direction,
			}),
		}
	}

	/// Returns the animation for `(action, direction)`, or the `(stand, south)`
	/// animation if the pair is absent.
	pub fn resolve_or_default(&self, action: Action, direction: Direction) -> &Animation {
		let index = self.slot(action, direction).unwrap_or(self.default_index);
		&self.animations[index]
	}

	/// Mutable variant of [`DirectedAnimationSet::resolve_or_default`].
	pub fn resolve_or_default_mut(&mut self, action: Action, direction: Direction) -> &mut Animation {
		let index = self.slot(action, direction).unwrap_or(self.default_index);
		&mut self.animations[index]
	}

	/// Returns the number of distinct animations stored.
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.animations.len()
	}

	/// Iterates over the stored animations and their keys.
	pub fn iter(&self) -> impl Iterator<Item = (AnimationKey, &Animation)> {
		self.keys.iter().copied().zip(self.animations.iter())
	}

	/// Returns the `(width, height)` of the largest frame across all animations.
	pub fn largest_frame_size(&self) -> (u32, u32) {
		self.animations
			.iter()
			.map(Animation::largest_frame_size)
			.max_by_key(|(width, height)| u64::from(*width) * u64::from(*height))
			.unwrap_or_default()
	}
}

/// Collects animations and validates them into a [`DirectedAnimationSet`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use image::RgbaImage;
/// use tilesprite_types::{Animation, AnimationKey, DirectedAnimationSet};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let surface = Arc::new(RgbaImage::new(1, 1));
/// let mut builder = DirectedAnimationSet::builder();
/// builder.insert(
///     AnimationKey::from_file_stem("only")?,
///     Animation::from_surface_durations([(surface, 100)])?,
/// )?;
/// let set = builder.build()?;
/// assert!(set.is_single());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct DirectedAnimationSetBuilder {
	only: Option<Animation>,
	directed: BTreeMap<(Action, Direction), Animation>,
}

impl DirectedAnimationSetBuilder {
	/// Creates an empty builder.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds an animation under `key`.
	///
	/// # Errors
	///
	/// Returns [`AnimError::BadWalkaboutAsset`] naming the key if it is
	/// already taken, or if `only` would be mixed with directional entries.
	pub fn insert(&mut self, key: AnimationKey, animation: Animation) -> Result<(), AnimError> {
		let conflict = AnimError::BadWalkaboutAsset {
			name: key.file_stem(),
		};

		match key {
			AnimationKey::Only => {
				if self.only.is_some() || !self.directed.is_empty() {
					return Err(conflict);
				}
				self.only = Some(animation);
			}
			AnimationKey::Directed(action, direction) => {
				if self.only.is_some() || self.directed.contains_key(&(action, direction)) {
					return Err(conflict);
				}
				self.directed.insert((action, direction), animation);
			}
		}

		Ok(())
	}

	/// Returns true if nothing has been inserted.
	pub fn is_empty(&self) -> bool {
		self.only.is_none() && self.directed.is_empty()
	}

	/// Validates and finishes the set.
	///
	/// A directional set must cover every action facing every cardinal
	/// direction; ordinal directions are optional.
	///
	/// # Errors
	///
	/// Returns [`AnimError::EmptyAnimation`] if nothing was inserted and
	/// [`AnimError::IncompleteAnimationSet`] naming the first missing pair.
	pub fn build(self) -> Result<DirectedAnimationSet, AnimError> {
		if let Some(only) = self.only {
			return Ok(DirectedAnimationSet::single(only));
		}

		if self.directed.is_empty() {
			return Err(AnimError::EmptyAnimation);
		}

		for action in Action::ALL {
			for direction in Direction::CARDINAL {
				if !self.directed.contains_key(&(action, direction)) {
					return Err(AnimError::IncompleteAnimationSet {
						action,
						direction,
					});
				}
			}
		}

		let mut slots: Slots = [[None; Direction::COUNT]; Action::COUNT];
		let mut animations = Vec::with_capacity(self.directed.len());
		let mut keys = Vec::with_capacity(self.directed.len());

		for ((action, direction), animation) in self.directed {
			slots[action.index()][direction.index()] = Some(animations.len());
			keys.push(AnimationKey::Directed(action, direction));
			animations.push(animation);
		}

		let default_index = slots[Action::Stand.index()][Direction::South.index()].ok_or(
			AnimError::IncompleteAnimationSet {
				action: Action::Stand,
				direction: Direction::South,
			},
		)?;

		Ok(DirectedAnimationSet {
			animations,
			keys,
			slots,
			default_index,
		})
	}
}
