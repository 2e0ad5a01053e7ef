//! Palette cycling.
//!
//! Derives a looping animation from a single surface by rotating its
//! distinct colors, the classic trick for shimmering water or glowing
//! crystals without authoring extra frames.

use std::{
	collections::{HashMap, HashSet},
	sync::Arc,
};

use image::Rgba;
use log::debug;

use super::{animation::Animation, frame::Surface};
use crate::error::AnimError;

/// Default display time of each palette-cycled frame, in milliseconds
pub const DEFAULT_CYCLE_FRAME_MS: u32 = 250;

/// Returns the distinct colors of `surface` in first-seen order, scanning
/// column by column.
pub fn ordered_colors(surface: &Surface) -> Vec<Rgba<u8>> {
	let (width, height) = surface.dimensions();
	let mut seen = HashSet::new();
	let mut colors = Vec::new();

	for x in 0..width {
		for y in 0..height {
			let color = *surface.get_pixel(x, y);
			if seen.insert(color.0) {
				colors.push(color);
			}
		}
	}

	colors
}

/// Builds an animation that cycles the colors of `surface`.
///
/// With `n` distinct colors the animation has `n` frames. In frame `k`
/// (counting from one) every occurrence of color `i` is replaced by color
/// `(i - k) mod n`, so the final frame shows the original surface again.
/// The base surface is not modified.
///
/// # Errors
///
/// Returns [`AnimError::EmptyAnimation`] for a zero-sized surface and
/// [`AnimError::InvalidFrameDuration`] if `frame_ms` is zero.
pub fn palette_cycle(surface: &Surface, frame_ms: u32) -> Result<Animation, AnimError> {
	let colors = ordered_colors(surface);
	let count = colors.len();
	debug!("palette cycling {} colors over {}ms frames", count, frame_ms);

	let index_of: HashMap<[u8; 4], usize> =
		colors.iter().enumerate().map(|(index, color)| (color.0, index)).collect();

	let frames = (1..=count).map(|step| {
		let mut shifted = surface.clone();
		for pixel in shifted.pixels_mut() {
			// every pixel color was collected by ordered_colors
			let index = index_of[&pixel.0];
			*pixel = colors[(index + count - step % count) % count];
		}
		(Arc::new(shifted), frame_ms)
	});

	Animation::from_surface_durations(frames)
}
