//! Forces dynamic linking of `tilesprite`.
//!
//! Enable the `dynamic_linking` feature of `tilesprite` to link against this
//! crate as a dylib, which keeps incremental rebuilds of dependent games fast.

#![allow(clippy::single_component_path_imports)]

#[allow(unused_imports)]
use tilesprite_internal;
