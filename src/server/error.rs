//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`homerow_common::Error`] so that handlers
//! can return `Result<T, AppError>` directly.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use homerow_common::{unsatisfied_content_range, Error};

/// Wrapper so we can implement `IntoResponse` for an external type.
pub struct AppError {
    inner: Error,
}

impl AppError {
    pub fn new(inner: Error) -> Self {
        Self { inner }
    }
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in request handler"
            );
        }

        match self.inner {
            Error::RangeNotSatisfiable { length } => (
                status,
                [(header::CONTENT_RANGE, unsatisfied_content_range(length))],
            )
                .into_response(),
            inner => (
                status,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                inner.to_string(),
            )
                .into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_string(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn not_found_produces_plain_text_404() {
        let response = AppError::new(Error::not_found("Video not found")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/plain; charset=utf-8"
        );
        assert_eq!(body_string(response).await, "Video not found");
    }

    #[tokio::test]
    async fn unsatisfiable_produces_empty_416() {
        let response = AppError::new(Error::range_not_satisfiable(1000)).into_response();
        assert_eq!(response.status(), StatusCode::RANGE_NOT_SATISFIABLE);
        assert_eq!(response.headers()[header::CONTENT_RANGE], "bytes */1000");
        assert!(body_string(response).await.is_empty());
    }

    #[test]
    fn internal_produces_500() {
        let response = AppError::new(Error::internal("seek failed")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn io_failure_produces_500() {
        let io_err = std::io::Error::other("disk unplugged");
        let response = AppError::from(Error::from(io_err)).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
