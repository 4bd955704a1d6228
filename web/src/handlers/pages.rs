//! Static HTML snippets.
//!
//! Browser clients fetch these and inject them into the page as is, so the
//! markup is returned byte for byte, including the unclosed `<h3>` of the
//! header fragment.

use axum::response::Html;

/// Greeting fragment.
pub const HELLO_HTML: &str = "<h1>Hello, World!</h1>";

/// Header fragment.
pub const HEADER_HTML: &str = "<h3>Header<h3>";

/// `GET /api/hello`
#[allow(clippy::unused_async)]
pub async fn hello() -> Html<&'static str> {
    Html(HELLO_HTML)
}

/// `GET /api/header`
#[allow(clippy::unused_async)]
pub async fn header() -> Html<&'static str> {
    Html(HEADER_HTML)
}
