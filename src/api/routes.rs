//! Shared application state and router construction.
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::api::handlers;
use crate::groq::client::GroqClient;
use crate::prompt::builder::PromptBuilder;
use crate::shopify::client::ShopifyClient;

pub struct AppState {
    pub prompt_builder: PromptBuilder,
    pub groq_client: GroqClient,
    pub shopify_client: ShopifyClient,
}

/// Build the HTTP surface over a prepared state.
///
/// Kept separate from `main` so integration tests can drive the router
/// directly with mocked upstream clients.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/generate-blog-preview", post(handlers::generate_blog_preview))
        .route("/post-blog", post(handlers::post_blog))
        .route("/generate-blog", post(handlers::generate_blog))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
