//! Thin HTTP client for the Shopify admin articles endpoint.
//!
//! One POST to `/admin/api/2024-04/blogs/{blog_id}/articles.json` creating an
//! article from a title, HTML body, and optional featured image. Article
//! creation is not idempotent, so this client never retries; a failed call is
//! surfaced to the handler as-is.
use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};

pub const ADMIN_API_VERSION: &str = "2024-04";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Serialize)]
struct ArticleRequest {
    article: ArticlePayload,
}

#[derive(Debug, Serialize)]
struct ArticlePayload {
    title: String,
    body_html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    image: Option<ArticleImage>,
}

#[derive(Debug, Serialize)]
struct ArticleImage {
    src: String,
}

#[derive(Debug, Deserialize)]
struct ArticleResponse {
    article: CreatedArticle,
}

#[derive(Debug, Deserialize)]
struct CreatedArticle {
    id: Value,
}

#[derive(Clone)]
pub struct ShopifyClient {
    client: Client,
    base_url: String,
    access_token: String,
    blog_id: String,
}

impl ShopifyClient {
    pub fn new(base_url: String, access_token: String, blog_id: String) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("failed to build HTTP client");
        let base = base_url.trim_end_matches('/').to_string();
        ShopifyClient { client, base_url: base, access_token, blog_id }
    }

    /// Create an article on the configured blog.
    ///
    /// Returns the platform's article id, which Shopify reports as a number
    /// but is passed through untyped.
    pub async fn create_article(
        &self,
        title: &str,
        body_html: &str,
        image_url: Option<&str>,
    ) -> AppResult<Value> {
        let url = format!(
            "{}/admin/api/{}/blogs/{}/articles.json",
            self.base_url, ADMIN_API_VERSION, self.blog_id
        );
        tracing::info!("Creating Shopify article at URL: {}", url);

        let request = ArticleRequest {
            article: ArticlePayload {
                title: title.to_string(),
                body_html: body_html.to_string(),
                image: image_url.map(|src| ArticleImage { src: src.to_string() }),
            },
        };

        let response = self.client.post(&url)
            .header("X-Shopify-Access-Token", &self.access_token)
            .json(&request)
            .send()
            .await
            .map_err(AppError::HttpClient)?;

        if response.status().is_success() {
            let body: ArticleResponse = response.json().await.map_err(AppError::HttpClient)?;
            tracing::info!("Created article with id {}", body.article.id);
            Ok(body.article.id)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error body".to_string());
            let error_message = format!("Failed to create article. Status: {}, Body: {}", status, error_body);
            tracing::error!("{}", error_message);
            Err(AppError::Shopify(error_message))
        }
    }
}
