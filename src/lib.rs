#![allow(clippy::single_component_path_imports)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `tilesprite` animates directional sprites for tile based games.
//!
//! A [`Walkabout`] plays one animation per action and facing, loaded from a
//! bundle of GIFs with optional anchor sidecars, and carries child walkabouts
//! pinned to its anchors.
//!
//! ```no_run
//! use tilesprite::prelude::*;
//!
//! # fn main() -> Result<(), WalkaboutError> {
//! let loader = DirectoryLoader::new("assets/walkabouts");
//! let hat = Walkabout::from_resource_with_defaults(&loader, "hat")?;
//! let mut knight = Walkabout::from_resource_with_defaults(&loader, "knight")?.with_child(hat);
//!
//! knight.set_active_state(Action::Walk, Direction::North)?;
//! knight.tick(16);
//! let at = knight.current_screen_position(Coordinate::ZERO);
//! # let _ = at;
//! # Ok(())
//! # }
//! ```
pub use tilesprite_internal::*;

#[cfg(all(feature = "dynamic_linking", not(target_family = "wasm")))]
#[allow(unused_imports)]
use tilesprite_dylib;
