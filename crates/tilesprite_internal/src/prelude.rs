//! Prelude module for `tilesprite_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use tilesprite_internal::prelude::*;
//!
//! # fn main() -> Result<(), WalkaboutError> {
//! let loader = MemoryLoader::new();
//! let config = WalkaboutConfig::default();
//! let decoder = GifFrameDecoder::from_config(&config);
//!
//! // an unknown bundle is a resource error
//! assert!(Walkabout::from_resource(&loader, &decoder, "hat", &config).is_err());
//! # Ok(())
//! # }
//! ```

// Re-export everything from tilesprite_types::prelude
#[doc(inline)]
pub use tilesprite_types::prelude::*;

#[doc(inline)]
pub use tilesprite_vfs::{DirectoryLoader, KeyValueTable, MemoryLoader, ResourceLoader, VfsError};

#[doc(inline)]
pub use crate::{
	FrameDecoder, GifFrameDecoder, Walkabout, WalkaboutConfig, WalkaboutError,
};

// Re-export the member crates for advanced usage
#[doc(inline)]
pub use tilesprite_types;
#[doc(inline)]
pub use tilesprite_vfs;
