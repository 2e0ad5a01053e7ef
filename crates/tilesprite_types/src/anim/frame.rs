//! A single timed animation frame.

use std::{fmt, sync::Arc};

use image::RgbaImage;

use super::anchor::FrameAnchors;

/// Decoded pixel data of a frame.
pub type Surface = RgbaImage;

/// Shared, immutable handle to a [`Surface`].
///
/// Surfaces are decoded once at load time and may be referenced by many
/// frames at once.
pub type SurfaceHandle = Arc<Surface>;

/// One frame of an [`Animation`](super::Animation).
///
/// A frame covers the half-open playback interval `[start_time, end_time)`,
/// measured in milliseconds from the start of its animation.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationFrame {
	surface: SurfaceHandle,
	start_time: u64,
	duration: u32,
	anchors: Option<FrameAnchors>,
}

impl AnimationFrame {
	/// Creates a frame starting at `start_time` and lasting `duration` ms.
	pub fn new(
		surface: SurfaceHandle,
		start_time: u64,
		duration: u32,
		anchors: Option<FrameAnchors>,
	) -> Self {
		Self {
			surface,
			start_time,
			duration,
			anchors,
		}
	}

	/// Returns the frame's pixel surface.
	#[inline]
	pub fn surface(&self) -> &SurfaceHandle {
		&self.surface
	}

	/// Returns the playback time at which this frame becomes active.
	#[inline]
	pub fn start_time(&self) -> u64 {
		self.start_time
	}

	/// Returns how long this frame is displayed, in milliseconds.
	#[inline]
	pub fn duration(&self) -> u32 {
		self.duration
	}

	/// Returns the playback time at which this frame stops being active.
	#[inline]
	pub fn end_time(&self) -> u64 {
		self.start_time + u64::from(self.duration)
	}

	/// Returns true if `time` falls within `[start_time, end_time)`.
	#[inline]
	pub fn covers(&self, time: u64) -> bool {
		self.start_time <= time && time < self.end_time()
	}

	/// Returns the frame's anchors, if the animation has any.
	#[inline]
	pub fn anchors(&self) -> Option<&FrameAnchors> {
		self.anchors.as_ref()
	}

	/// Returns the surface dimensions as `(width, height)`.
	pub fn size(&self) -> (u32, u32) {
		self.surface.dimensions()
	}
}

impl fmt::Display for AnimationFrame {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let (width, height) = self.size();
		write!(
			f,
			"{}×{} [{}ms, {}ms) duration {}ms",
			width,
			height,
			self.start_time,
			self.end_time(),
			self.duration
		)
	}
}
