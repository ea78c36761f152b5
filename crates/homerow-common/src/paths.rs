//! Path utilities for media files.
//!
//! Maps file extensions to the MIME types sent in `Content-Type` when the
//! configuration does not name one explicitly.

use std::path::Path;

/// Video extensions and their MIME types.
const VIDEO_TYPES: &[(&str, &str)] = &[
    ("mp4", "video/mp4"),
    ("m4v", "video/mp4"),
    ("webm", "video/webm"),
    ("mkv", "video/x-matroska"),
    ("mov", "video/quicktime"),
    ("avi", "video/x-msvideo"),
    ("ts", "video/mp2t"),
];

/// Fallback type for anything not in the table.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Check if a path has a known video file extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use homerow_common::paths::is_video_file;
///
/// assert!(is_video_file(Path::new("out/home-row.mp4")));
/// assert!(is_video_file(Path::new("CLIP.MOV")));
/// assert!(!is_video_file(Path::new("index.html")));
/// ```
pub fn is_video_file(path: &Path) -> bool {
    lookup(path).is_some()
}

/// Guess the MIME type of a media file from its extension.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use homerow_common::paths::content_type_for_path;
///
/// assert_eq!(content_type_for_path(Path::new("home-row.mp4")), "video/mp4");
/// assert_eq!(content_type_for_path(Path::new("render.webm")), "video/webm");
/// assert_eq!(content_type_for_path(Path::new("blob")), "application/octet-stream");
/// ```
pub fn content_type_for_path(path: &Path) -> &'static str {
    lookup(path).unwrap_or(OCTET_STREAM)
}

fn lookup(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    VIDEO_TYPES
        .iter()
        .find(|(known, _)| *known == ext)
        .map(|(_, mime)| *mime)
}
