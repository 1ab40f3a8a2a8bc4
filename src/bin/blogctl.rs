use blog_relay::prompt::builder::{PromptBuilder, DEFAULT_WORD_COUNT};
use blog_relay::{images, sanitize, Config, GroqClient, ShopifyClient};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "blogctl", about = "CLI for the AI Blog Relay", version)]
struct Cli {
    /// Override GROQ_API_URL
    #[arg(global = true, long)]
    groq_api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate blog HTML for a topic without publishing
    Preview {
        /// Blog topic
        topic: String,
        /// Approximate word count requested from the model
        #[arg(long, default_value_t = DEFAULT_WORD_COUNT)]
        word_count: u32,
        /// Write the composed HTML to a file instead of stdout
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Publish pre-generated HTML as a new article
    Publish {
        /// Article title
        #[arg(long)]
        title: String,
        /// Path to an HTML file with the article body
        #[arg(long, value_name = "PATH")]
        content: PathBuf,
        /// Featured image URL
        #[arg(long)]
        image: Option<String>,
    },
    /// Generate and publish in one step
    Generate {
        /// Blog topic
        topic: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = Config::new().map_err(|e| {
        eprintln!("Error: {}", e);
        e
    })?;
    if let Some(url) = cli.groq_api_url {
        conf.groq_api_url = url;
    }

    let prompt_builder = PromptBuilder::new();

    match cli.command {
        Commands::Preview { topic, word_count, out } => {
            let client = GroqClient::new(conf.groq_api_key.clone(), conf.groq_api_url.clone());
            let body = client
                .generate(
                    &prompt_builder.system_prompt(word_count),
                    &prompt_builder.user_prompt(&topic),
                )
                .await
                .map_err(|e| {
                    eprintln!("Error: {}", e);
                    e
                })?;
            let image_url = images::pollinations_url(&topic);
            let document = images::compose_preview(&image_url, &topic, &body);
            match out {
                Some(path) => {
                    tokio::fs::write(&path, &document).await?;
                    println!("Wrote preview to {}", path.display());
                }
                None => println!("{}", document),
            }
            Ok(())
        }
        Commands::Publish { title, content, image } => {
            let body_html = tokio::fs::read_to_string(&content).await?;
            let client = ShopifyClient::new(
                conf.shopify_base_url(),
                conf.shopify_access_token.clone(),
                conf.shopify_blog_id.clone(),
            );
            let id = client
                .create_article(&title, &body_html, image.as_deref())
                .await
                .map_err(|e| {
                    eprintln!("Error: {}", e);
                    e
                })?;
            println!("Created article {}", id);
            Ok(())
        }
        Commands::Generate { topic } => {
            let groq = GroqClient::new(conf.groq_api_key.clone(), conf.groq_api_url.clone());
            let body = groq
                .generate(
                    &prompt_builder.system_prompt(DEFAULT_WORD_COUNT),
                    &prompt_builder.user_prompt(&topic),
                )
                .await
                .map_err(|e| {
                    eprintln!("Error: {}", e);
                    e
                })?;
            let image_url = images::pollinations_url(&topic);
            let document = images::compose_preview(&image_url, &topic, &body);
            let shopify = ShopifyClient::new(
                conf.shopify_base_url(),
                conf.shopify_access_token.clone(),
                conf.shopify_blog_id.clone(),
            );
            let title = sanitize::clean_topic(&topic);
            let id = shopify
                .create_article(&title, &document, Some(&image_url))
                .await
                .map_err(|e| {
                    eprintln!("Error: {}", e);
                    e
                })?;
            println!("Created article {}", id);
            Ok(())
        }
    }
}
