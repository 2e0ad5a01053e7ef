//! This module is separated into its own crate to enable simple dynamic linking for `tilesprite`, and should not be used directly.

mod config;
mod decode;
mod error;
pub mod walkabout;

/// `use tilesprite::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export the member crates for convenience
pub use tilesprite_types;
pub use tilesprite_vfs;

// Re-export commonly used types at crate root
pub use self::config::{DEFAULT_ZERO_DELAY_FRAME_MS, WalkaboutConfig};
pub use self::decode::{FrameDecoder, GifFrameDecoder};
pub use self::error::WalkaboutError;
pub use self::walkabout::Walkabout;
