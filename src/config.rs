//! Env-driven configuration for the service and library.
//!
//! Values are read from the process environment; `dotenv` is loaded on demand
//! by the binaries. The upstream credentials are required and have no
//! defaults; only the listen address and the Groq base URL are defaulted.
use std::env;

use crate::error::{AppError, AppResult};
use dotenv;

pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1";

pub struct Config {
    pub groq_api_key: String,
    pub groq_api_url: String,
    pub shop_domain: String,
    pub shopify_access_token: String,
    pub shopify_blog_id: String,
    pub api_host: String,
    pub api_port: String,
}

impl Config {
    pub fn dotenv_load() {
        dotenv::dotenv().ok();
    }

    pub fn new() -> AppResult<Self> {
        Ok(Config {
            groq_api_key: require("GROQ_API_KEY")?,
            groq_api_url: env::var("GROQ_API_URL")
                .unwrap_or_else(|_| DEFAULT_GROQ_API_URL.to_string()),
            shop_domain: require("SHOP_DOMAIN")?,
            shopify_access_token: require("SHOPIFY_ACCESS_TOKEN")?,
            shopify_blog_id: require("SHOPIFY_BLOG_ID")?,
            api_host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            api_port: env::var("API_PORT").unwrap_or_else(|_| "3000".to_string()),
        })
    }

    /// Base URL for the Shopify admin API, derived from the shop domain.
    pub fn shopify_base_url(&self) -> String {
        format!("https://{}", self.shop_domain)
    }

    pub fn print_env_vars() {
        println!("GROQ_API_KEY: {}", presence("GROQ_API_KEY"));
        println!("GROQ_API_URL: {}", env::var("GROQ_API_URL").unwrap_or_else(|_| "<unset>".to_string()));
        println!("SHOP_DOMAIN: {}", env::var("SHOP_DOMAIN").unwrap_or_else(|_| "<unset>".to_string()));
        println!("SHOPIFY_ACCESS_TOKEN: {}", presence("SHOPIFY_ACCESS_TOKEN"));
        println!("SHOPIFY_BLOG_ID: {}", env::var("SHOPIFY_BLOG_ID").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_HOST: {}", env::var("API_HOST").unwrap_or_else(|_| "<unset>".to_string()));
        println!("API_PORT: {}", env::var("API_PORT").unwrap_or_else(|_| "<unset>".to_string()));
    }
}

fn require(name: &str) -> AppResult<String> {
    env::var(name).map_err(|_| AppError::Config(format!("{} is not set", name)))
}

// Secrets are reported as set/unset, never echoed.
fn presence(name: &str) -> &'static str {
    match env::var(name) {
        Ok(v) if !v.is_empty() => "<set>",
        _ => "<unset>",
    }
}
