//! Web server module for calcweb.
//!
//! Provides the HTTP UI: the home page greeting plus the add form, and
//! the `/add` endpoint which sums the two submitted numbers and renders
//! the result page.
//!
use axum::{
    Form, Router,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;

use crate::{config::CONFIG, html};

/// Form data for the add operation
#[derive(Deserialize)]
struct AddRequest {
    /// First summand
    pub num1: i64,
    /// Second summand
    pub num2: i64,
}

/// Build the application router
fn router() -> Router {
    Router::new()
        .route("/", get(home_page))
        .route("/add", post(add_handler))
}

/// Start the web server
pub async fn run() {
    let app = router();

    println!("🌐 Web UI at http://localhost:{}/", CONFIG.web_port);

    let addr = format!("0.0.0.0:{}", CONFIG.web_port)
        .parse::<std::net::SocketAddr>()
        .unwrap();

    axum_server::bind(addr)
        .serve(app.into_make_service())
        .await
        .unwrap();
}

/// Display home page with the greeting and the add form
async fn home_page() -> Html<String> {
    Html(html::home(&CONFIG.display_name))
}

/// Sum the submitted numbers and render the result page
///
/// A missing or non-integer field never reaches this body; the typed
/// `Form` extractor rejects the request first.
async fn add_handler(Form(payload): Form<AddRequest>) -> Response {
    match payload.num1.checked_add(payload.num2) {
        Some(ans) => Html(html::result(ans)).into_response(),
        None => (StatusCode::BAD_REQUEST, "Sum out of range").into_response(),
    }
}
