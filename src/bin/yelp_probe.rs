use anyhow::Result;
use clap::{Parser, Subcommand};
use std::sync::Arc;
use std::time::Duration;
use yelp_proxy::core::{ConfigProvider, SearchQuery};
use yelp_proxy::core::upstream::DEFAULT_BASE_URL;
use yelp_proxy::utils::logger;
use yelp_proxy::{ProxyHandler, YelpClient};

/// 直接呼叫上游並印出代理會回傳的內容，用來檢查 API key 是否可用
#[derive(Parser)]
#[command(name = "yelp-probe")]
#[command(about = "Call the Yelp Fusion API through the proxy handler and print the envelope")]
struct ProbeArgs {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    upstream_base_url: String,

    #[arg(
        long,
        env = "API_KEY_YELP",
        default_value = "",
        hide_env_values = true,
        hide_default_value = true
    )]
    api_key: String,

    #[arg(long, help = "Upstream request timeout in seconds")]
    request_timeout: Option<u64>,

    #[arg(long, help = "Enable verbose output")]
    verbose: bool,

    #[command(subcommand)]
    command: ProbeCommand,
}

#[derive(Subcommand)]
enum ProbeCommand {
    /// List category aliases
    Categories,
    /// Search businesses around a coordinate
    Search {
        #[arg(long)]
        latitude: String,
        #[arg(long)]
        longitude: String,
        #[arg(long)]
        radius: Option<String>,
        #[arg(long)]
        categories: Option<String>,
    },
    /// Fetch one business by id or alias
    Detail { id: String },
}

impl ConfigProvider for ProbeArgs {
    fn bind_host(&self) -> &str {
        "127.0.0.1"
    }

    fn port(&self) -> u16 {
        0
    }

    fn upstream_base_url(&self) -> &str {
        &self.upstream_base_url
    }

    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout.map(Duration::from_secs)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = ProbeArgs::parse();
    logger::init_logger(args.verbose, false);

    let handler = ProxyHandler::new(Arc::new(YelpClient::new(&args)?));

    let output = match &args.command {
        ProbeCommand::Categories => {
            let envelope = handler.list_categories().await?;
            eprintln!("📋 {} categories", envelope.data.len());
            serde_json::to_string_pretty(&envelope)?
        }
        ProbeCommand::Search {
            latitude,
            longitude,
            radius,
            categories,
        } => {
            let query = SearchQuery {
                latitude: Some(latitude.clone()),
                longitude: Some(longitude.clone()),
                radius: radius.clone(),
                categories: categories.clone(),
            };
            let envelope = handler.search_businesses(&query).await?;
            eprintln!("📍 {} businesses", envelope.data.len());
            serde_json::to_string_pretty(&envelope)?
        }
        ProbeCommand::Detail { id } => {
            let envelope = handler.business_details(id).await?;
            serde_json::to_string_pretty(&envelope)?
        }
    };

    println!("{}", output);
    Ok(())
}
