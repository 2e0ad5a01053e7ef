//! Frame timing and playback state.

use std::sync::Arc;

use log::trace;

use super::{
	anchor::{AnchorTable, FrameAnchors},
	frame::{AnimationFrame, SurfaceHandle},
};
use crate::error::AnimError;

/// An ordered, looping sequence of timed frames plus its playback clock.
///
/// Frames partition the playback interval `[0, total_duration)`: frame *i*
/// is active exactly when `start_time <= elapsed < end_time`. Advancing past
/// the end wraps around to the first frame.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use image::RgbaImage;
/// use tilesprite_types::Animation;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let surface = Arc::new(RgbaImage::new(4, 4));
/// let mut animation = Animation::from_surface_durations([
///     (Arc::clone(&surface), 100),
///     (surface, 100),
/// ])?;
///
/// animation.advance(250);
/// assert_eq!(animation.elapsed_ms(), 50);
/// assert_eq!(animation.active_frame_index(), 0);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
	frames: Vec<AnimationFrame>,
	total_duration: u64,
	elapsed_ms: u64,
	active_frame_index: usize,
}

impl Animation {
	/// Creates an animation from `(surface, duration_ms)` pairs, without anchors.
	///
	/// # Errors
	///
	/// Returns [`AnimError::EmptyAnimation`] if no frames are given and
	/// [`AnimError::InvalidFrameDuration`] if a duration is zero.
	pub fn from_surface_durations<I>(frames: I) -> Result<Self, AnimError>
	where
		I: IntoIterator<Item = (SurfaceHandle, u32)>,
	{
		Self::build(frames, None)
	}

	/// Creates an animation whose frames carry rows of `anchors`.
	///
	/// Frame *i* receives row *i* of the table; the table itself decides how
	/// rows past its authored length resolve.
	///
	/// # Errors
	///
	/// Same as [`Animation::from_surface_durations`].
	pub fn with_anchors<I>(frames: I, anchors: AnchorTable) -> Result<Self, AnimError>
	where
		I: IntoIterator<Item = (SurfaceHandle, u32)>,
	{
		Self::build(frames, Some(Arc::new(anchors)))
	}

	/// Creates an animation from prebuilt frames.
	///
	/// Start times are taken as given, so the frames must be contiguous: each
	/// frame must start where the previous one ends, beginning at zero.
	///
	/// # Errors
	///
	/// Returns [`AnimError::EmptyAnimation`] for an empty list,
	/// [`AnimError::InvalidFrameDuration`] for a zero duration and
	/// [`AnimError::Config`] for non-contiguous start times.
	pub fn new(frames: Vec<AnimationFrame>) -> Result<Self, AnimError> {
		if frames.is_empty() {
			return Err(AnimError::EmptyAnimation);
		}

		let mut expected_start = 0u64;
		for (index, frame) in frames.iter().enumerate() {
			if frame.duration() == 0 {
				return Err(AnimError::InvalidFrameDuration {
					index,
				});
			}
			if frame.start_time() != expected_start {
				return Err(AnimError::Config {
					reason: format!(
						"frame {index} starts at {}ms, expected {expected_start}ms",
						frame.start_time()
					),
				});
			}
			expected_start = frame.end_time();
		}

		Ok(Self {
			frames,
			total_duration: expected_start,
			elapsed_ms: 0,
			active_frame_index: 0,
		})
	}

	fn build<I>(frames: I, anchors: Option<Arc<AnchorTable>>) -> Result<Self, AnimError>
	where
		I: IntoIterator<Item = (SurfaceHandle, u32)>,
	{
		let mut start_time = 0u64;
		let mut built = Vec::new();

		for (index, (surface, duration)) in frames.into_iter().enumerate() {
			let row = anchors.as_ref().map(|table| FrameAnchors::new(Arc::clone(table), index));
			built.push(AnimationFrame::new(surface, start_time, duration, row));
			start_time += u64::from(duration);
		}

		Self::new(built)
	}

	/// Advances the playback clock by `delta_ms`.
	///
	/// Reaching or passing the total duration wraps the clock and restarts the
	/// frame scan from the first frame. The scan then moves forward one frame
	/// at a time, which is cheap because ticks are short compared to frames.
	pub fn advance(&mut self, delta_ms: u64) {
		self.elapsed_ms = self.elapsed_ms.saturating_add(delta_ms);

		if self.elapsed_ms >= self.total_duration {
			self.elapsed_ms %= self.total_duration;
			self.active_frame_index = 0;
			trace!("animation wrapped, elapsed now {}ms", self.elapsed_ms);
		}

		let last = self.frames.len() - 1;
		while self.active_frame_index < last
			&& self.elapsed_ms >= self.frames[self.active_frame_index].end_time()
		{
			self.active_frame_index += 1;
		}
	}

	/// Resets playback to the start of the first frame.
	pub fn rewind(&mut self) {
		self.elapsed_ms = 0;
		self.active_frame_index = 0;
	}

	/// Returns the frame for the current playback position.
	#[inline]
	pub fn active_frame(&self) -> &AnimationFrame {
		&self.frames[self.active_frame_index]
	}

	/// Returns the index of the active frame.
	#[inline]
	pub fn active_frame_index(&self) -> usize {
		self.active_frame_index
	}

	/// Returns the playback position in `[0, total_duration)`.
	#[inline]
	pub fn elapsed_ms(&self) -> u64 {
		self.elapsed_ms
	}

	/// Returns the sum of all frame durations.
	#[inline]
	pub fn total_duration(&self) -> u64 {
		self.total_duration
	}

	/// Returns the index of the frame covering playback time `time_ms`,
	/// taken modulo the total duration.
	///
	/// This does not touch the playback state.
	pub fn frame_index_at(&self, time_ms: u64) -> usize {
		let time = time_ms % self.total_duration;
		self.frames.partition_point(|frame| frame.end_time() <= time)
	}

	/// Returns all frames in playback order.
	pub fn frames(&self) -> &[AnimationFrame] {
		&self.frames
	}

	/// Returns the frame at `index`.
	pub fn frame(&self, index: usize) -> Option<&AnimationFrame> {
		self.frames.get(index)
	}

	/// Returns the number of frames, always at least one.
	#[allow(clippy::len_without_is_empty)]
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Returns true if any frame carries anchors.
	pub fn has_anchors(&self) -> bool {
		self.frames.iter().any(|frame| frame.anchors().is_some())
	}

	/// Returns the `(width, height)` of the frame with the largest area.
	pub fn largest_frame_size(&self) -> (u32, u32) {
		self.frames
			.iter()
			.map(AnimationFrame::size)
			.max_by_key(|(width, height)| u64::from(*width) * u64::from(*height))
			.unwrap_or_default()
	}
}

#[cfg(test)]
mod tests {
	use image::RgbaImage;

	use super::*;
	use crate::{anim::anchor::HEAD_ANCHOR, geometry::Coordinate};

	fn surface(width: u32, height: u32) -> SurfaceHandle {
		Arc::new(RgbaImage::new(width, height))
	}

	fn animation(durations: &[u32]) -> Animation {
		Animation::from_surface_durations(durations.iter().map(|&d| (surface(2, 2), d))).unwrap()
	}

	#[test]
	fn test_empty_animation_rejected() {
		let result = Animation::from_surface_durations(Vec::new());
		assert_eq!(result, Err(AnimError::EmptyAnimation));
	}

	#[test]
	fn test_zero_duration_rejected() {
		let result = Animation::from_surface_durations([(surface(1, 1), 10), (surface(1, 1), 0)]);
		assert_eq!(
			result,
			Err(AnimError::InvalidFrameDuration {
				index: 1
			})
		);
	}

	#[test]
	fn test_frame_times() {
		let anim = animation(&[100, 150, 200]);
		let times: Vec<_> = anim.frames().iter().map(|f| (f.start_time(), f.end_time())).collect();

		assert_eq!(times, vec![(0, 100), (100, 250), (250, 450)]);
		assert_eq!(anim.total_duration(), 450);
		assert_eq!(anim.len(), 3);
	}

	#[test]
	fn test_non_contiguous_frames_rejected() {
		let frames = vec![
			AnimationFrame::new(surface(1, 1), 0, 10, None),
			AnimationFrame::new(surface(1, 1), 20, 10, None),
		];
		assert!(matches!(Animation::new(frames), Err(AnimError::Config { .. })));
	}

	#[test]
	fn test_frames_partition_playback_interval() {
		let anim = animation(&[3, 1, 4, 1, 5]);

		for time in 0..anim.total_duration() {
			let covering: Vec<_> =
				anim.frames().iter().enumerate().filter(|(_, f)| f.covers(time)).collect();
			assert_eq!(covering.len(), 1, "time {time} covered by {} frames", covering.len());
			assert_eq!(covering[0].0, anim.frame_index_at(time));
		}
	}

	#[test]
	fn test_advance_matches_partition() {
		let durations = [3, 1, 4, 1, 5];
		let total: u64 = durations.iter().map(|&d| u64::from(d)).sum();

		for step in 1..=7u64 {
			let mut anim = animation(&durations);
			let mut clock = 0u64;
			for _ in 0..40 {
				anim.advance(step);
				clock += step;
				assert_eq!(anim.elapsed_ms(), clock % total);
				assert_eq!(anim.active_frame_index(), anim.frame_index_at(clock), "step {step}");
				assert!(anim.active_frame().covers(anim.elapsed_ms()));
			}
		}
	}

	#[test]
	fn test_frame_boundary_switches_frame() {
		let mut anim = animation(&[100, 100]);
		anim.advance(99);
		assert_eq!(anim.active_frame_index(), 0);
		anim.advance(1);
		assert_eq!(anim.active_frame_index(), 1);
	}

	#[test_log::test]
	fn test_wraparound_scenario() {
		let mut anim = animation(&[100, 100]);
		anim.advance(250);

		assert_eq!(anim.elapsed_ms(), 50);
		assert_eq!(anim.active_frame_index(), 0);
	}

	#[test_log::test]
	fn test_full_cycle_returns_to_start() {
		let mut anim = animation(&[100, 150, 200]);
		anim.advance(120);
		assert_eq!(anim.active_frame_index(), 1);

		let mut fresh = animation(&[100, 150, 200]);
		fresh.advance(fresh.total_duration());
		assert_eq!(fresh.elapsed_ms(), 0);
		assert_eq!(fresh.active_frame_index(), 0);
	}

	#[test]
	fn test_zero_advance_is_idempotent() {
		let mut anim = animation(&[10, 20, 30]);
		for delta in [0, 15, 0, 0, 20, 0] {
			anim.advance(delta);
			let before = anim.active_frame_index();
			anim.advance(0);
			assert_eq!(anim.active_frame_index(), before);
		}
	}

	#[test]
	fn test_huge_advance_stays_in_bounds() {
		let mut anim = animation(&[10, 20, 30]);
		anim.advance(u64::MAX);
		assert!(anim.active_frame_index() < anim.len());
		assert!(anim.active_frame().covers(anim.elapsed_ms()));
	}

	#[test]
	fn test_single_frame_animation() {
		let mut anim = animation(&[250]);
		assert_eq!(anim.total_duration(), 250);

		for delta in [1, 100, 249, 1000] {
			anim.advance(delta);
			assert_eq!(anim.active_frame_index(), 0);
		}
	}

	#[test]
	fn test_rewind() {
		let mut anim = animation(&[10, 10]);
		anim.advance(15);
		anim.rewind();
		assert_eq!(anim.elapsed_ms(), 0);
		assert_eq!(anim.active_frame_index(), 0);
	}

	#[test]
	fn test_anchor_rows_follow_frame_index() {
		let table = AnchorTable::from_sections([(HEAD_ANCHOR, [("0", "0,2"), ("1", "1,3")])]).unwrap();
		let frames = [(surface(2, 2), 100), (surface(2, 2), 150), (surface(2, 2), 200)];
		let anim = Animation::with_anchors(frames, table).unwrap();

		let anchors: Vec<_> = anim
			.frames()
			.iter()
			.map(|f| f.anchors().unwrap().get(HEAD_ANCHOR).unwrap())
			.collect();
		assert_eq!(anchors, vec![Coordinate::new(0, 2), Coordinate::new(1, 3), Coordinate::new(1, 3)]);
		assert!(anim.has_anchors());
	}

	#[test]
	fn test_largest_frame_size() {
		let anim = Animation::from_surface_durations([
			(surface(2, 9), 10),
			(surface(5, 3), 10),
			(surface(4, 4), 10),
		])
		.unwrap();
		assert_eq!(anim.largest_frame_size(), (2, 9));
	}
}
