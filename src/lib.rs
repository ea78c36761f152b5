//! Homerow - Range-aware media server
//!
//! Streams a single pre-rendered video file to browser `<video>` elements,
//! with HTTP byte-range support for seeking. This library crate exposes the
//! server for integration testing.

pub mod config;
pub mod server;
pub mod streaming;
