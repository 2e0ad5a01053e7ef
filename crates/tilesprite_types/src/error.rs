//! Error types for animation construction and lookup.

use thiserror::Error;

use crate::state::{Action, Direction};

/// Errors raised while building or querying animations, anchor tables and
/// directed animation sets.
///
/// Load-time variants (`EmptyAnimation`, `InvalidFrameDuration`, `Config`,
/// `BadWalkaboutAsset`, `IncompleteAnimationSet`) mean the asset cannot be
/// rendered at all. Lookup variants (`UnknownAnchorGroup`,
/// `InvalidActionDirection`) never alter the state of the value queried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimError {
	/// An animation needs at least one frame
	#[error("Animation has no frames")]
	EmptyAnimation,

	/// Frame durations must be positive
	#[error("Frame {index} has a zero duration")]
	InvalidFrameDuration {
		/// Index of the offending frame
		index: usize,
	},

	/// Anchor group is not defined by the table
	#[error("Unknown anchor group: {0}")]
	UnknownAnchorGroup(String),

	/// The animation set has no entry for this pair
	#[error("No animation for action {action} facing {direction}")]
	InvalidActionDirection {
		/// Requested action
		action: Action,
		/// Requested direction
		direction: Direction,
	},

	/// Malformed anchor or animation configuration
	#[error("Configuration error: {reason}")]
	Config {
		/// Human readable description of what is wrong
		reason: String,
	},

	/// Asset name does not decompose into an `(action, direction)` pair
	#[error("Bad walkabout asset: {name}")]
	BadWalkaboutAsset {
		/// Offending resource name
		name: String,
	},

	/// Directional set is missing a required combination
	#[error("Animation set is missing action {action} facing {direction}")]
	IncompleteAnimationSet {
		/// Missing action
		action: Action,
		/// Missing direction
		direction: Direction,
	},
}
