//! Sprite animation support for `tilesprite`.
//!
//! This module holds the time-domain half of the engine: frames with
//! durations, animations that map a playback clock onto those frames, the
//! anchor tables that give each frame its named pin points, and the
//! directional sets a walkabout chooses its active animation from.
//!
//! # Timing Model
//!
//! ```text
//! frame      0          1               2
//!         |------|-------------|--------------------|
//! time    0     100           250                  450 (= total duration)
//! ```
//!
//! Frame *i* is active for `start_time <= elapsed < end_time`. Advancing the
//! clock to or past the total duration wraps it modulo the total duration and
//! restarts the frame scan from frame 0.
//!
//! # Anchors
//!
//! Anchors are stored per animation in an [`AnchorTable`] and exposed to each
//! frame as a [`FrameAnchors`] row. Rows past the authored length of a group
//! resolve to its last entry, so authors only need to write anchors for the
//! frames where they change.
//!
//! # Usage Examples
//!
//! ```
//! use std::sync::Arc;
//! use image::RgbaImage;
//! use tilesprite_types::anim::{AnchorTable, Animation, HEAD_ANCHOR};
//! use tilesprite_types::Coordinate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let anchors = AnchorTable::from_sections([(HEAD_ANCHOR, [("0", "0,2"), ("1", "1,3")])])?;
//! let surface = Arc::new(RgbaImage::new(6, 8));
//! let mut walk = Animation::with_anchors(
//!     [(Arc::clone(&surface), 100), (Arc::clone(&surface), 150), (surface, 200)],
//!     anchors,
//! )?;
//!
//! walk.advance(300);
//! let frame = walk.active_frame();
//! assert_eq!(walk.active_frame_index(), 2);
//! assert_eq!(frame.anchors().unwrap().get(HEAD_ANCHOR)?, Coordinate::new(1, 3));
//! # Ok(())
//! # }
//! ```

pub mod anchor;
pub mod animation;
pub mod frame;
pub mod palette;
pub mod set;

pub use self::anchor::{AnchorTable, FrameAnchors, HEAD_ANCHOR};
pub use self::animation::Animation;
pub use self::frame::{AnimationFrame, Surface, SurfaceHandle};
pub use self::palette::{DEFAULT_CYCLE_FRAME_MS, palette_cycle};
pub use self::set::{AnimationKey, DirectedAnimationSet, DirectedAnimationSetBuilder, ONLY_STEM};
