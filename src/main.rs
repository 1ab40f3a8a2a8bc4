use std::net::SocketAddr;
use std::sync::Arc;

use blog_relay::{api, config, prompt, GroqClient, ShopifyClient};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    // Load configuration
    config::Config::dotenv_load();
    let config = config::Config::new().expect("Failed to load configuration");
    config::Config::print_env_vars();

    let groq_client = GroqClient::new(config.groq_api_key.clone(), config.groq_api_url.clone());
    let shopify_client = ShopifyClient::new(
        config.shopify_base_url(),
        config.shopify_access_token.clone(),
        config.shopify_blog_id.clone(),
    );

    let state = Arc::new(api::routes::AppState {
        prompt_builder: prompt::builder::PromptBuilder::new(),
        groq_client,
        shopify_client,
    });

    let app = api::routes::build_router(state);

    // Run our application with safe parsing
    let host_str = config.api_host.clone();
    let port_str = config.api_port.clone();
    let ip: std::net::IpAddr = host_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_HOST '{}', falling back to 0.0.0.0", host_str);
        std::net::IpAddr::from([0, 0, 0, 0])
    });
    let port: u16 = port_str.parse().unwrap_or_else(|_| {
        tracing::warn!("Invalid API_PORT '{}', falling back to 3000", port_str);
        3000
    });
    let socket_address = SocketAddr::new(ip, port);
    tracing::info!("listening on {}", socket_address);
    axum::Server::bind(&socket_address)
        .serve(app.into_make_service())
        .await
        .unwrap();
}
