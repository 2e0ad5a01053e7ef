//! Prelude module for `tilesprite_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```no_run
//! use tilesprite_types::prelude::*;
//!
//! let key = AnimationKey::Directed(Action::Walk, Direction::North);
//! assert_eq!(key.file_stem(), "walk_north");
//! ```

#[doc(inline)]
pub use crate::{
	// Geometry
	Coordinate,
	Position,

	// State
	Action,
	Direction,

	// Animation types
	AnchorTable,
	Animation,
	AnimationFrame,
	AnimationKey,
	DirectedAnimationSet,
	DirectedAnimationSetBuilder,
	FrameAnchors,
	Surface,
	SurfaceHandle,

	// Constants
	HEAD_ANCHOR,

	// Errors
	AnimError,
};

#[doc(inline)]
pub use crate::anim::palette::palette_cycle;

// Re-export the anim module for advanced usage
#[doc(inline)]
pub use crate::anim;
