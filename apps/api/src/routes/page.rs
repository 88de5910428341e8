use axum::response::Html;

/// The single-page client: form, busy indicator, result cards with copy buttons.
const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}
