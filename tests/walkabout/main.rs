//! End-to-end walkabout tests for `tilesprite`

mod assets;
mod composition;
mod loading;
