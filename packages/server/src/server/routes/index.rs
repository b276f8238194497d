use axum::response::Html;

/// Serve the single-page essay submission form, embedded at compile time.
pub async fn index_handler() -> Html<&'static str> {
    Html(include_str!("../../../assets/index.html"))
}
