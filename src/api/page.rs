use axum::{response::Html, routing::get, Router};

/// GET / - the dashboard page.
///
/// The page is a single embedded HTML document; it fetches figures and
/// selector options from the JSON API and renders them client-side.
async fn index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}

/// Create page router
pub fn create_page_router() -> Router {
    Router::new().route("/", get(index))
}
