//! Animated, directional sprites and their composition.
//!
//! A [`Walkabout`] owns a [`DirectedAnimationSet`], the `(action, direction)`
//! it is currently showing and a world position. It may also own child
//! walkabouts, such as a hat worn on a character's head. Every
//! [`tick`](Walkabout::tick) advances the tree top-down and pins each child
//! so that its anchor sits exactly on its parent's anchor:
//!
//! ```text
//! child.position = parent.position + parent_anchor - child_anchor
//! ```
//!
//! Both anchors are read from the anchor group named by
//! [`WalkaboutConfig::anchor_group`](crate::WalkaboutConfig), `head_anchor`
//! unless configured otherwise.

use log::trace;
use tilesprite_types::{
	Action, AnimError, Animation, Coordinate, DirectedAnimationSet, Direction, HEAD_ANCHOR,
	Position, SurfaceHandle,
};

mod load;

pub use load::{ANCHOR_EXTENSION, ANIMATION_EXTENSION};

/// An animated sprite that can face eight directions and carry children.
#[derive(Debug, Clone, PartialEq)]
pub struct Walkabout {
	animations: DirectedAnimationSet,
	action: Action,
	direction: Direction,
	position: Position,
	anchor_group: String,
	children: Vec<Walkabout>,
}

impl Walkabout {
	/// Creates a walkabout at the origin, standing and facing south.
	pub fn new(animations: DirectedAnimationSet) -> Self {
		Self {
			animations,
			action: Action::default(),
			direction: Direction::default(),
			position: Position::ORIGIN,
			anchor_group: HEAD_ANCHOR.to_string(),
			children: Vec::new(),
		}
	}

	/// Places the walkabout at `position`.
	#[must_use]
	pub fn with_position(mut self, position: Position) -> Self {
		self.position = position;
		self
	}

	/// Selects the anchor group used to pin children.
	#[must_use]
	pub fn with_anchor_group(mut self, anchor_group: impl Into<String>) -> Self {
		self.anchor_group = anchor_group.into();
		self
	}

	/// Attaches `child`, which is drawn after any existing children.
	#[must_use]
	pub fn with_child(mut self, child: Walkabout) -> Self {
		self.add_child(child);
		self
	}

	/// Attaches `child`, which is drawn after any existing children.
	pub fn add_child(&mut self, child: Walkabout) {
		self.children.push(child);
	}

	/// Detaches and returns the child at `index`, if any.
	pub fn remove_child(&mut self, index: usize) -> Option<Walkabout> {
		(index < self.children.len()).then(|| self.children.remove(index))
	}

	/// Returns the children in draw order.
	pub fn children(&self) -> &[Walkabout] {
		&self.children
	}

	/// Returns the children in draw order, mutably.
	pub fn children_mut(&mut self) -> &mut [Walkabout] {
		&mut self.children
	}

	/// Returns the world position of the top-left corner.
	#[inline]
	pub fn position(&self) -> Position {
		self.position
	}

	/// Moves the walkabout.
	///
	/// Children follow on the next [`tick`](Walkabout::tick).
	pub fn set_position(&mut self, position: Position) {
		self.position = position;
	}

	/// Returns the current action.
	#[inline]
	pub fn action(&self) -> Action {
		self.action
	}

	/// Returns the current facing.
	#[inline]
	pub fn direction(&self) -> Direction {
		self.direction
	}

	/// Returns the anchor group used to pin children.
	pub fn anchor_group(&self) -> &str {
		&self.anchor_group
	}

	/// Returns every animation this walkabout can show.
	pub fn animations(&self) -> &DirectedAnimationSet {
		&self.animations
	}

	/// Switches to the animation for `(action, direction)`.
	///
	/// The newly selected animation resumes from wherever its own clock
	/// stands; it is not rewound.
	///
	/// # Errors
	///
	/// Returns [`AnimError::InvalidActionDirection`] and keeps the current
	/// state if the set has no such animation.
	pub fn set_active_state(&mut self, action: Action, direction: Direction) -> Result<(), AnimError> {
		if !self.animations.contains(action, direction) {
			return Err(AnimError::InvalidActionDirection {
				action,
				direction,
			});
		}

		self.action = action;
		self.direction = direction;
		Ok(())
	}

	/// Returns the animation for the current state.
	pub fn active_animation(&self) -> &Animation {
		self.animations.resolve_or_default(self.action, self.direction)
	}

	fn active_animation_mut(&mut self) -> &mut Animation {
		self.animations.resolve_or_default_mut(self.action, self.direction)
	}

	/// Returns the surface to draw this tick.
	pub fn active_frame_surface(&self) -> &SurfaceHandle {
		self.active_animation().active_frame().surface()
	}

	/// Returns the `(width, height)` of the active frame.
	pub fn size(&self) -> (u32, u32) {
		self.active_animation().active_frame().size()
	}

	/// Returns where to draw the walkabout given the viewport's top-left
	/// corner in world space.
	pub fn current_screen_position(&self, viewport: Coordinate) -> Coordinate {
		self.position.relative_to(viewport)
	}

	/// Returns the active frame's anchor in the configured group, relative to
	/// the frame's top-left corner.
	pub fn current_anchor(&self) -> Option<Coordinate> {
		self.anchor_in(&self.anchor_group)
	}

	fn anchor_in(&self, group: &str) -> Option<Coordinate> {
		let frame = self.active_animation().active_frame();
		let anchors = frame.anchors()?;
		match anchors.get(group) {
			Ok(anchor) => Some(anchor),
			Err(e) => {
				trace!("frame {} has no usable anchor: {}", anchors.frame_index(), e);
				None
			}
		}
	}

	/// Advances the whole tree by `delta_ms` milliseconds.
	///
	/// This walkabout advances first. Then each child, in order, advances its
	/// own animation, is pinned to this walkabout's anchor and recurses into
	/// its own children. If the active frame has no anchor for the group,
	/// children keep their previous positions.
	pub fn tick(&mut self, delta_ms: u64) {
		self.active_animation_mut().advance(delta_ms);
		self.tick_children(delta_ms);
	}

	fn tick_children(&mut self, delta_ms: u64) {
		let parent_anchor = self.current_anchor().map(|anchor| self.position + anchor);
		if parent_anchor.is_none() && !self.children.is_empty() {
			trace!("no {} on active frame, children stay put", self.anchor_group);
		}

		for child in &mut self.children {
			child.active_animation_mut().advance(delta_ms);

			if let Some(parent_anchor) = parent_anchor {
				// unanchored children hang from their top-left corner
				let child_anchor = child.anchor_in(&self.anchor_group).unwrap_or(Coordinate::ZERO);
				child.position = parent_anchor - child_anchor;
				trace!("pinned child to {} with anchor {}", child.position, child_anchor);
			}

			child.tick_children(delta_ms);
		}
	}
}
