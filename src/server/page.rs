//! Landing page embedding the video player.

use axum::extract::State;
use axum::response::{Html, IntoResponse};
use bytes::Bytes;

use super::AppContext;
use crate::streaming::MediaResource;

const TEMPLATE: &str = include_str!("index.html");

/// Render the landing page once for the configured media resource.
pub fn render(media: &MediaResource) -> Bytes {
    let html = TEMPLATE
        .replace("{{MEDIA_ROUTE}}", &escape_attr(media.route()))
        .replace("{{CONTENT_TYPE}}", &escape_attr(media.content_type()));
    Bytes::from(html)
}

/// Serve the pre-rendered landing page.
pub async fn landing_page(State(ctx): State<AppContext>) -> impl IntoResponse {
    Html(ctx.page.clone())
}

fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_points_video_at_media_route() {
        let media = MediaResource::new("/HomeRow", "out/home-row.mp4", "video/mp4");
        let page = String::from_utf8(render(&media).to_vec()).unwrap();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<h1>🎹 The Home Row</h1>"));
        assert!(page.contains(r#"<source src="/HomeRow" type="video/mp4">"#));
        assert!(!page.contains("{{"));
    }

    #[test]
    fn render_escapes_attribute_values() {
        let media = MediaResource::new("/a\"b<c>", "clip.webm", "video/webm");
        let page = String::from_utf8(render(&media).to_vec()).unwrap();
        assert!(page.contains(r#"src="/a&quot;b&lt;c&gt;""#));
    }
}
