//! Benchmark helper utilities for tilesprite
//!
//! This module builds synthetic animations and walkabout trees so the
//! benchmarks do not depend on asset files.

use std::sync::Arc;

use image::RgbaImage;
use tilesprite_internal::{
	Walkabout,
	tilesprite_types::{AnchorTable, Animation, Coordinate, DirectedAnimationSet, HEAD_ANCHOR, Position},
};

/// Builds an animation of `frames` frames with varying durations and a
/// head anchor per frame.
pub fn anchored_animation(frames: usize) -> Animation {
	let surface = Arc::new(RgbaImage::new(32, 48));
	let coordinates = (0..frames).map(|i| Coordinate::new((i % 7) as i32, (i % 5) as i32)).collect();
	let anchors =
		AnchorTable::from_groups([(HEAD_ANCHOR, coordinates)]).expect("benchmark animations need frames");

	let timed = (0..frames).map(|i| (Arc::clone(&surface), 50 + (i as u32 % 4) * 25));
	Animation::with_anchors(timed, anchors).expect("valid benchmark animation")
}

/// Builds a walkabout whose every node has `fan_out` children, `depth` levels
/// deep below the root.
pub fn walkabout_tree(depth: usize, fan_out: usize, frames: usize) -> Walkabout {
	let mut node = Walkabout::new(DirectedAnimationSet::single(anchored_animation(frames)))
		.with_position(Position::new(100.0, 100.0));
	if depth > 0 {
		for _ in 0..fan_out {
			node.add_child(walkabout_tree(depth - 1, fan_out, frames));
		}
	}
	node
}

/// Returns the number of nodes in a tree built by [`walkabout_tree`].
pub fn tree_size(depth: usize, fan_out: usize) -> usize {
	(0..=depth).map(|level| fan_out.pow(level as u32)).sum()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_anchored_animation() {
		let animation = anchored_animation(12);
		assert_eq!(animation.len(), 12);
		assert!(animation.has_anchors());
	}

	#[test]
	fn test_tree_size() {
		assert_eq!(tree_size(0, 3), 1);
		assert_eq!(tree_size(2, 3), 13);

		let tree = walkabout_tree(2, 3, 4);
		assert_eq!(tree.children().len(), 3);
		assert_eq!(tree.children()[0].children().len(), 3);
	}
}
