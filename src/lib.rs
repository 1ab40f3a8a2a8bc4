//! AI Blog Relay library
//!
//! Modules:
//! - `api`: Axum HTTP handlers and router setup used by the binary.
//! - `groq`: Thin client for the Groq chat-completion endpoint.
//! - `shopify`: Thin client for the Shopify admin articles endpoint.
//! - `prompt`: Blog prompt construction (persona, backlinks, word count).
//! - `images`: pollinations.ai URL construction and the preview wrapper.
//! - `sanitize`: Encoding boundary for user-supplied topic text.
//! - `config`: Env-driven configuration loader.
//! - `error`: Common error type and alias.
//!
//! Re-exports are provided for common types: `Config`, `GroqClient`,
//! `ShopifyClient`, and `PromptBuilder`.
pub mod api;
pub mod config;
pub mod error;
pub mod groq;
pub mod images;
pub mod prompt;
pub mod sanitize;
pub mod shopify;

pub use config::Config;
pub use groq::client::GroqClient;
pub use prompt::builder::PromptBuilder;
pub use shopify::client::ShopifyClient;
