//! Animated image decoding.

use std::{io::Cursor, sync::Arc};

use image::{AnimationDecoder, ImageResult, codecs::gif::GifDecoder};
use log::{debug, warn};
use tilesprite_types::SurfaceHandle;

use crate::config::{DEFAULT_ZERO_DELAY_FRAME_MS, WalkaboutConfig};

/// Turns encoded animation bytes into timed surfaces.
pub trait FrameDecoder {
	/// Decodes every frame of `bytes` as `(surface, duration_ms)`, in order.
	///
	/// # Errors
	///
	/// Returns the underlying [`image::ImageError`] if the data is malformed.
	fn decode_animated_image(&self, bytes: &[u8]) -> ImageResult<Vec<(SurfaceHandle, u32)>>;
}

impl<T: FrameDecoder + ?Sized> FrameDecoder for &T {
	fn decode_animated_image(&self, bytes: &[u8]) -> ImageResult<Vec<(SurfaceHandle, u32)>> {
		(**self).decode_animated_image(bytes)
	}
}

/// [`FrameDecoder`] for animated GIFs.
///
/// Frames come back fully composited at the logical screen size. A frame
/// declaring a zero delay is shown for `zero_delay_frame_ms` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GifFrameDecoder {
	zero_delay_frame_ms: u32,
}

impl Default for GifFrameDecoder {
	fn default() -> Self {
		Self::new(DEFAULT_ZERO_DELAY_FRAME_MS)
	}
}

impl GifFrameDecoder {
	/// Creates a decoder with the given zero-delay substitute.
	pub fn new(zero_delay_frame_ms: u32) -> Self {
		Self {
			zero_delay_frame_ms,
		}
	}

	/// Creates a decoder following `config`.
	pub fn from_config(config: &WalkaboutConfig) -> Self {
		Self::new(config.zero_delay_frame_ms)
	}

	/// Returns the duration substituted for zero-delay frames.
	pub fn zero_delay_frame_ms(&self) -> u32 {
		self.zero_delay_frame_ms
	}
}

impl FrameDecoder for GifFrameDecoder {
	fn decode_animated_image(&self, bytes: &[u8]) -> ImageResult<Vec<(SurfaceHandle, u32)>> {
		let decoder = GifDecoder::new(Cursor::new(bytes))?;
		let frames = decoder.into_frames().collect_frames()?;
		debug!("decoded {} gif frames", frames.len());

		let timed = frames
			.into_iter()
			.enumerate()
			.map(|(index, frame)| {
				let (numer, denom) = frame.delay().numer_denom_ms();
				let mut duration = numer.checked_div(denom).unwrap_or(0);
				if duration == 0 {
					warn!(
						"gif frame {index} has no delay, showing it for {}ms",
						self.zero_delay_frame_ms
					);
					duration = self.zero_delay_frame_ms;
				}
				(Arc::new(frame.into_buffer()), duration)
			})
			.collect();

		Ok(timed)
	}
}
