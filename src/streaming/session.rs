//! Per-response streaming session.
//!
//! A [`StreamSession`] owns one read cursor into the media file and yields
//! the requested byte window as a stream of bounded chunks. Hyper polls the
//! stream only when the socket can take more data, so a slow client holds at
//! most one chunk in memory. When the client goes away, hyper drops the body
//! and with it the session and its file handle.

use std::io;
use std::pin::Pin;
use std::task::{ready, Context, Poll};

use axum::body::Body;
use bytes::Bytes;
use futures::Stream;
use tokio::io::{AsyncRead, AsyncReadExt, Take};
use tokio_util::io::ReaderStream;

/// Lifecycle of a single response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Created, response not yet handed to the HTTP layer.
    Start,
    /// Headers committed; no body bytes produced yet.
    HeadersSent,
    /// At least one chunk produced.
    Streaming,
    /// The whole window was produced.
    Done,
    /// A read failed or the file ended early.
    Error,
}

/// Streams `expected` bytes from `reader` in chunks of at most `chunk_size`.
pub struct StreamSession<R> {
    chunks: ReaderStream<Take<R>>,
    offset: u64,
    expected: u64,
    sent: u64,
    state: SessionState,
}

impl<R: AsyncRead + Unpin> StreamSession<R> {
    /// `reader` must already be positioned at `offset`; the offset is only
    /// used for logging.
    pub fn new(reader: R, offset: u64, expected: u64, chunk_size: usize) -> Self {
        Self {
            chunks: ReaderStream::with_capacity(reader.take(expected), chunk_size),
            offset,
            expected,
            sent: 0,
            state: SessionState::Start,
        }
    }
}

impl<R> StreamSession<R> {
    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn bytes_sent(&self) -> u64 {
        self.sent
    }

    /// Whether the body was cut off after some but not all of the window
    /// went out. A body dropped before its first chunk never reached the
    /// client and does not count.
    pub fn was_interrupted(&self) -> bool {
        self.state == SessionState::Streaming
    }

    /// Mark the headers as committed.
    pub fn commit(mut self) -> Self {
        self.state = SessionState::HeadersSent;
        self
    }
}

impl<R> StreamSession<R>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    /// Commit the session and wrap it as a response body.
    pub fn into_body(self) -> Body {
        Body::from_stream(self.commit())
    }
}

impl<R: AsyncRead + Unpin> Stream for StreamSession<R> {
    type Item = io::Result<Bytes>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();

        if matches!(this.state, SessionState::Done | SessionState::Error) {
            return Poll::Ready(None);
        }

        match ready!(Pin::new(&mut this.chunks).poll_next(cx)) {
            Some(Ok(chunk)) => {
                this.sent += chunk.len() as u64;
                this.state = if this.sent >= this.expected {
                    tracing::trace!(
                        offset = this.offset,
                        bytes = this.sent,
                        "Stream session complete"
                    );
                    SessionState::Done
                } else {
                    SessionState::Streaming
                };
                Poll::Ready(Some(Ok(chunk)))
            }
            Some(Err(e)) => {
                this.state = SessionState::Error;
                tracing::warn!(
                    offset = this.offset,
                    sent = this.sent,
                    expected = this.expected,
                    error = %e,
                    "Media read failed mid-stream"
                );
                Poll::Ready(Some(Err(e)))
            }
            None if this.sent < this.expected => {
                this.state = SessionState::Error;
                tracing::warn!(
                    offset = this.offset,
                    sent = this.sent,
                    expected = this.expected,
                    "Media file ended before the requested window"
                );
                Poll::Ready(Some(Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "media file shorter than advertised length",
                ))))
            }
            None => {
                this.state = SessionState::Done;
                Poll::Ready(None)
            }
        }
    }
}

impl<R> Drop for StreamSession<R> {
    fn drop(&mut self) {
        if self.was_interrupted() {
            tracing::debug!(
                offset = self.offset,
                sent = self.sent,
                expected = self.expected,
                "Client disconnected mid-stream"
            );
        }
    }
}
