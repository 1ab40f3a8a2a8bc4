//! Axum request handlers for the HTTP API.
//!
//! Preview and direct-publish share one generation pipeline; the only
//! difference is where the composed document goes. `/post-blog` skips
//! generation and publishes caller-supplied HTML as-is.
use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::api::routes::AppState;
use crate::error::AppResult;
use crate::images;
use crate::prompt::builder::DEFAULT_WORD_COUNT;
use crate::sanitize;

#[derive(Debug, Deserialize)]
pub struct BlogRequest {
    pub topic: String,
    #[serde(rename = "wordCount", default = "default_word_count")]
    pub word_count: u32,
}

#[derive(Debug, Deserialize)]
pub struct PublishRequest {
    pub title: String,
    pub content: String,
    pub image: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub topic: String,
}

fn default_word_count() -> u32 {
    DEFAULT_WORD_COUNT
}

pub async fn root() -> &'static str {
    "AI Blog Relay"
}

/// Generate blog HTML for a topic and return it without publishing.
pub async fn generate_blog_preview(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BlogRequest>,
) -> AppResult<Json<Value>> {
    let (title, preview, image_url) =
        generate_document(&state, &payload.topic, payload.word_count).await?;
    Ok(Json(json!({
        "success": true,
        "preview": preview,
        "title": title,
        "image": image_url,
    })))
}

/// Publish caller-supplied HTML as a new article.
pub async fn post_blog(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<PublishRequest>,
) -> AppResult<Json<Value>> {
    let article_id = state
        .shopify_client
        .create_article(&payload.title, &payload.content, payload.image.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("Failed to publish article: {:?}", e);
            e
        })?;
    Ok(Json(json!({ "success": true, "articleId": article_id })))
}

/// Generate blog HTML for a topic and publish it in one call.
pub async fn generate_blog(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GenerateRequest>,
) -> AppResult<Json<Value>> {
    let (title, document, image_url) =
        generate_document(&state, &payload.topic, DEFAULT_WORD_COUNT).await?;
    let article_id = state
        .shopify_client
        .create_article(&title, &document, Some(&image_url))
        .await
        .map_err(|e| {
            tracing::error!("Failed to publish generated article: {:?}", e);
            e
        })?;
    Ok(Json(json!({ "success": true, "articleId": article_id })))
}

/// Shared generation step: model output plus the image wrapper on top.
///
/// Returns `(title, composed_html, image_url)`. A generation failure
/// propagates before any publishing call is made.
async fn generate_document(
    state: &AppState,
    topic: &str,
    word_count: u32,
) -> AppResult<(String, String, String)> {
    let title = sanitize::clean_topic(topic);
    let system_prompt = state.prompt_builder.system_prompt(word_count);
    let user_prompt = state.prompt_builder.user_prompt(topic);

    let body_html = state
        .groq_client
        .generate(&system_prompt, &user_prompt)
        .await
        .map_err(|e| {
            tracing::error!("Failed to generate blog content: {:?}", e);
            e
        })?;

    let image_url = images::pollinations_url(topic);
    let document = images::compose_preview(&image_url, topic, &body_html);
    Ok((title, document, image_url))
}
