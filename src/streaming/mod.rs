//! Media streaming module.
//!
//! Serves one pre-rendered media file with support for HTTP range requests.
//!
//! - [`range`]: `Range` header parsing into a [`RangeRequest`]
//! - [`resource`]: the [`MediaResource`] and its storage lookups
//! - [`session`]: chunked, backpressured body streaming
//! - [`direct`]: status and header selection for each range outcome

pub mod direct;
pub mod range;
pub mod resource;
pub mod session;

pub use direct::serve_media;
pub use range::RangeRequest;
pub use resource::MediaResource;
pub use session::{SessionState, StreamSession};
