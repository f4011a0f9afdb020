use std::path::Path;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;

use crate::ui::ActivitiesClient;

pub mod routes;

pub const BUILD_ID: &str = env!("ACTIVITIES_CLIENT_BUILD_ID");

pub fn app(client: Arc<ActivitiesClient>, static_dir: impl AsRef<Path>) -> Router {
    use routes::{health, page};

    Router::new()
        .route("/", get(page::index_handler))
        .route("/signup", post(page::signup_handler))
        .route("/participants/remove", post(page::remove_request_handler))
        .route(
            "/participants/remove/cancel",
            post(page::remove_cancel_handler),
        )
        .route(
            "/participants/remove/confirm",
            post(page::remove_confirm_handler),
        )
        .route("/refresh", post(page::refresh_handler))
        .route("/healthz", get(health::health_handler))
        .nest_service("/static", ServeDir::new(static_dir.as_ref()))
        // Covers the static files too.
        .layer(SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(CatchPanicLayer::new())
        .with_state(client)
}
