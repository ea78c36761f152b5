//! Request routing.
//!
//! All requests land in [`dispatch`], which picks one of three outcomes from
//! the method and path alone. Axum's path router is not used for the media
//! route because it must match case-insensitively.

use axum::extract::State;
use axum::http::{HeaderMap, Method, Uri};
use axum::response::{IntoResponse, Response};
use homerow_common::Error;

use super::error::AppError;
use super::{page, AppContext};
use crate::streaming::{self, MediaResource};

/// Where a request is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Media,
    Page,
    NotFound,
}

impl Route {
    /// Classify a request. Pure; never touches the filesystem.
    pub fn resolve(method: &Method, path: &str, media: &MediaResource) -> Self {
        if method != Method::GET {
            return Self::NotFound;
        }
        if path == "/" {
            Self::Page
        } else if media.matches(path) {
            Self::Media
        } else {
            Self::NotFound
        }
    }
}

/// Fallback handler serving every request.
pub async fn dispatch(
    State(ctx): State<AppContext>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    match Route::resolve(&method, uri.path(), &ctx.media) {
        Route::Media => {
            let response =
                streaming::serve_media(&ctx.media, &headers, ctx.config.media.chunk_size).await?;
            Ok(response)
        }
        Route::Page => Ok(page::landing_page(State(ctx)).await.into_response()),
        Route::NotFound => Err(Error::not_found("Not found").into()),
    }
}
