use clap::Parser;
use std::sync::Arc;
use tokio::net::TcpListener;
use yelp_proxy::core::ConfigProvider;
use yelp_proxy::utils::{logger, validation::Validate};
use yelp_proxy::{router, serve, AppState, CliConfig, ProxyHandler, TomlConfig, YelpClient};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 指定 --config 時以檔案內容為準
    let file_config = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load {}: {}", path.display(), e);
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(1);
            }
        },
        None => None,
    };

    let (verbose, json) = match &file_config {
        Some(config) => (
            cli.verbose || config.logging.verbose,
            cli.log_json || config.logging.json,
        ),
        None => (cli.verbose, cli.log_json),
    };

    // 初始化日誌
    logger::init_logger(verbose, json);

    tracing::info!("Starting yelp-proxy {}", env!("CARGO_PKG_VERSION"));
    if verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let result = match &file_config {
        Some(config) => run(config).await,
        None => run(&cli).await,
    };

    if let Err(e) = result {
        tracing::error!("❌ Proxy failed: {}", e);
        tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e);

        let exit_code = if e.is_config_error() { 1 } else { 2 };
        std::process::exit(exit_code);
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C) -> yelp_proxy::Result<()> {
    config.validate()?;

    let client = YelpClient::new(config)?;
    let state = AppState::new(ProxyHandler::new(Arc::new(client)));

    tracing::info!("Forwarding to {}", config.upstream_base_url());
    let listener = TcpListener::bind(config.bind_address()).await?;

    serve(listener, router(state), shutdown_signal()).await
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => tracing::info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
