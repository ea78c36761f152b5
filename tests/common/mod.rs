//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`], which writes a deterministic media file into a
//! temp directory and starts the server on a random port for HTTP-level
//! testing.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use homerow::config::Config;
use homerow::server::{create_router, serve_with_shutdown, AppContext};

/// Test harness owning the media file and the server configuration.
pub struct TestHarness {
    pub config: Config,
    pub media: Vec<u8>,
    pub media_path: PathBuf,
    _dir: tempfile::TempDir,
}

impl TestHarness {
    /// Harness with a 1000-byte media file.
    pub fn new() -> Self {
        Self::with_media_len(1000)
    }

    /// Harness whose media file holds `len` bytes of a repeating pattern.
    pub fn with_media_len(len: usize) -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let media_path = dir.path().join("home-row.mp4");
        let media: Vec<u8> = (0..=255u8).cycle().take(len).collect();
        std::fs::write(&media_path, &media).expect("failed to write media file");

        let mut config = Config::default();
        config.server.host = "127.0.0.1".into();
        config.media.path = media_path.clone();
        config.media.chunk_size = 256;

        Self {
            config,
            media,
            media_path,
            _dir: dir,
        }
    }

    /// Harness whose configured media file does not exist.
    pub fn without_media() -> Self {
        let harness = Self::new();
        std::fs::remove_file(&harness.media_path).expect("failed to remove media file");
        harness
    }

    /// Router over this harness's configuration, for `oneshot` tests.
    pub fn router(&self) -> axum::Router {
        create_router(AppContext::new(self.config.clone()))
    }

    /// Start the server on a random port and return the bound address.
    pub async fn start(&self) -> SocketAddr {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        let config = self.config.clone();
        tokio::spawn(async move {
            serve_with_shutdown(listener, config, std::future::pending())
                .await
                .ok();
        });

        addr
    }

    /// Start a server and return the harness with the bound address.
    pub async fn with_server() -> (Self, SocketAddr) {
        let harness = Self::new();
        let addr = harness.start().await;
        (harness, addr)
    }
}
