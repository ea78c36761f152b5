//! Homerow-Common: Shared types and utilities.
//!
//! This crate provides the pieces of the media server that do not depend on
//! the async runtime or the HTTP stack:
//!
//! - **Byte Ranges**: The inclusive `[start, end]` window served for a request
//! - **Path Utilities**: MIME type lookup for media files by extension
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use homerow_common::{ByteRange, Error, Result};
//! use homerow_common::paths::content_type_for_path;
//! use std::path::Path;
//!
//! let range = ByteRange::new(200, 299);
//! assert_eq!(range.len(), 100);
//! assert_eq!(range.content_range(1000), "bytes 200-299/1000");
//!
//! assert_eq!(content_type_for_path(Path::new("home-row.mp4")), "video/mp4");
//!
//! fn example() -> Result<()> {
//!     Err(Error::not_found("Video not found"))
//! }
//! ```

pub mod error;
pub mod paths;
pub mod types;

pub use error::{Error, Result};
pub use types::*;
