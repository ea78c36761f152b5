//! The single media resource served by the process.

use homerow_common::{Error, Result};
use std::io::SeekFrom;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::AsyncSeekExt;

use crate::config::MediaConfig;

/// A pre-rendered media file exposed under a fixed route.
///
/// The file's length is not stored; it is read from storage metadata on
/// every request.
#[derive(Debug, Clone)]
pub struct MediaResource {
    route: String,
    path: PathBuf,
    content_type: String,
}

impl MediaResource {
    pub fn new(
        route: impl Into<String>,
        path: impl Into<PathBuf>,
        content_type: impl Into<String>,
    ) -> Self {
        let route = route.into();
        let route = match route.trim_end_matches('/') {
            "" => "/".to_string(),
            trimmed => trimmed.to_string(),
        };
        Self {
            route,
            path: path.into(),
            content_type: content_type.into(),
        }
    }

    pub fn from_config(config: &MediaConfig) -> Self {
        Self::new(
            config.route.clone(),
            config.path.clone(),
            config.resolved_content_type(),
        )
    }

    /// Canonical route, without a trailing slash.
    pub fn route(&self) -> &str {
        &self.route
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn content_type(&self) -> &str {
        &self.content_type
    }

    /// Whether a request path names this resource.
    ///
    /// Matching ignores ASCII case and accepts one trailing slash, so
    /// `/HomeRow`, `/homerow/` and `/HOMEROW` all match `/HomeRow`.
    pub fn matches(&self, request_path: &str) -> bool {
        let candidate = request_path.strip_suffix('/').unwrap_or(request_path);
        !candidate.is_empty() && candidate.eq_ignore_ascii_case(&self.route)
    }

    /// Current length of the file in bytes.
    ///
    /// Fails with [`Error::NotFound`] when the file is missing, unreadable,
    /// or not a regular file.
    pub async fn length(&self) -> Result<u64> {
        let metadata = tokio::fs::metadata(&self.path).await.map_err(|e| {
            tracing::debug!(
                path = %self.path.display(),
                error = %e,
                "Media metadata lookup failed"
            );
            Error::not_found("Video not found")
        })?;

        if !metadata.is_file() {
            tracing::debug!(path = %self.path.display(), "Media path is not a regular file");
            return Err(Error::not_found("Video not found"));
        }

        Ok(metadata.len())
    }

    /// Open a fresh read-only handle positioned at `offset`.
    pub async fn open_at(&self, offset: u64) -> Result<File> {
        let mut file = File::open(&self.path).await.map_err(|e| {
            tracing::debug!(path = %self.path.display(), error = %e, "Media open failed");
            Error::not_found("Video not found")
        })?;

        if offset > 0 {
            file.seek(SeekFrom::Start(offset)).await?;
        }

        Ok(file)
    }
}
