//! This crate provides the core data types of the `tilesprite` animation engine.
//!
//! # Contents
//!
//! - **Geometry**: integer [`Coordinate`]s for anchors, float [`Position`]s for the world
//! - **State**: the [`Action`] and [`Direction`] a walkabout is displaying
//! - **Animation**: timed frames, anchor tables and directional animation sets
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```no_run
//! use tilesprite_types::prelude::*;
//!
//! let anchor = Coordinate::new(2, 3);
//! let position = Position::new(10.0, 10.0) + anchor;
//! assert_eq!(position.floor(), Coordinate::new(12, 13));
//! ```
//!
//! Or use explicit paths:
//!
//! ```no_run
//! use tilesprite_types::anim::{AnimationKey, AnchorTable};
//!
//! let key = AnimationKey::from_file_stem("walk_north").unwrap();
//! let table = AnchorTable::new();
//! ```

pub mod anim;
mod error;
pub mod geometry;
pub mod state;

/// `use tilesprite_types::prelude::*;` to import commonly used items.
pub mod prelude;

pub use anim::{
	AnchorTable, Animation, AnimationFrame, AnimationKey, DirectedAnimationSet,
	DirectedAnimationSetBuilder, FrameAnchors, HEAD_ANCHOR, Surface, SurfaceHandle,
};
pub use error::AnimError;
pub use geometry::{Coordinate, Position};
pub use state::{Action, Direction};
