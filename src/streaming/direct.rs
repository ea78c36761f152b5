//! Direct streaming with HTTP range requests.
//!
//! Serves the media file with support for single byte-range requests.

use axum::{
    http::{header, HeaderMap, StatusCode},
    response::Response,
};
use homerow_common::{ByteRange, Error, Result};

use super::range::RangeRequest;
use super::resource::MediaResource;
use super::session::StreamSession;

/// Serve the media resource, honouring a `Range` header if present.
///
/// Storage metadata is re-read on every call. A malformed `Range` header
/// falls back to a full response; an unsatisfiable one surfaces as
/// [`Error::RangeNotSatisfiable`].
pub async fn serve_media(
    media: &MediaResource,
    headers: &HeaderMap,
    chunk_size: usize,
) -> Result<Response> {
    let length = media.length().await?;

    match RangeRequest::from_headers(headers, length) {
        RangeRequest::Range(range) => partial_response(media, range, length, chunk_size).await,
        RangeRequest::Unsatisfiable => Err(Error::range_not_satisfiable(length)),
        RangeRequest::Malformed => {
            tracing::debug!(
                range = ?headers.get(header::RANGE),
                "Ignoring malformed Range header"
            );
            full_response(media, length, chunk_size).await
        }
        RangeRequest::NoRange => full_response(media, length, chunk_size).await,
    }
}

async fn partial_response(
    media: &MediaResource,
    range: ByteRange,
    length: u64,
    chunk_size: usize,
) -> Result<Response> {
    let file = media.open_at(range.start).await?;
    let session = StreamSession::new(file, range.start, range.len(), chunk_size);

    Response::builder()
        .status(StatusCode::PARTIAL_CONTENT)
        .header(header::CONTENT_TYPE, media.content_type())
        .header(header::CONTENT_LENGTH, range.len().to_string())
        .header(header::CONTENT_RANGE, range.content_range(length))
        .header(header::ACCEPT_RANGES, "bytes")
        .body(session.into_body())
        .map_err(|e| Error::internal(format!("Failed to build response: {e}")))
}

async fn full_response(media: &MediaResource, length: u64, chunk_size: usize) -> Result<Response> {
    let file = media.open_at(0).await?;
    let session = StreamSession::new(file, 0, length, chunk_size);

    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, media.content_type())
        .header(header::CONTENT_LENGTH, length.to_string())
        .header(header::ACCEPT_RANGES, "bytes")
        .body(session.into_body())
        .map_err(|e| Error::internal(format!("Failed to build response: {e}")))
}
