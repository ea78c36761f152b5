use homerow_common::paths::content_type_for_path;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub media: MediaConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// The single media resource served by this process.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MediaConfig {
    /// File written by the rendering pipeline before the server starts.
    /// Relative paths resolve against the working directory.
    #[serde(default = "default_media_path")]
    pub path: PathBuf,

    /// Route the file is served under. Matched case-insensitively, with or
    /// without a trailing slash.
    #[serde(default = "default_route")]
    pub route: String,

    /// Explicit `Content-Type`. Guessed from the file extension when unset.
    #[serde(default)]
    pub content_type: Option<String>,

    /// Read size per streamed chunk, in bytes.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

fn default_media_path() -> PathBuf {
    PathBuf::from("out").join("home-row.mp4")
}

fn default_route() -> String {
    "/HomeRow".to_string()
}

fn default_chunk_size() -> usize {
    64 * 1024
}

impl MediaConfig {
    /// The `Content-Type` to send for the media file.
    pub fn resolved_content_type(&self) -> String {
        self.content_type
            .clone()
            .unwrap_or_else(|| content_type_for_path(&self.path).to_string())
    }
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            path: default_media_path(),
            route: default_route(),
            content_type: None,
            chunk_size: default_chunk_size(),
        }
    }
}
