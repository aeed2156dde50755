//! Review authenticity server.
//!
//! ```text
//! reviewlens --embeddings models/word2vec.txt --classifier models/classifier.json --port 5000
//! ```

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use reviewlens_core::config::CliOverrides;
use reviewlens_core::errors::{ErrorCode, ReviewLensResult};
use reviewlens_core::tracing::init_tracing_with;
use reviewlens_core::traits::IReviewScraper;
use reviewlens_core::ReviewLensConfig;
use reviewlens_scraper::HtmlReviewScraper;
use reviewlens_server::{build_service, router, AppState};
use tracing::{error, info};

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify product reviews as original or computer-generated")]
struct Args {
    /// TOML config file (defaults to ./reviewlens.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Embedding table in word2vec text format
    #[arg(long)]
    embeddings: Option<String>,

    /// Linear classifier JSON file
    #[arg(long)]
    classifier: Option<String>,

    #[arg(long)]
    host: Option<String>,

    #[arg(long)]
    port: Option<u16>,

    /// Log level or EnvFilter directive
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(code = e.error_code(), error = %e, "reviewlens exiting");
            eprintln!("Error: {}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> ReviewLensResult<()> {
    let overrides = CliOverrides {
        embeddings_path: args.embeddings,
        classifier_path: args.classifier,
        host: args.host,
        port: args.port,
        log_level: args.log_level,
    };
    let config = ReviewLensConfig::load(args.config.as_deref(), Some(&overrides))?;
    init_tracing_with(&config.observability);

    // The blocking HTTP client must be built and finally dropped outside the
    // async runtime, so this Arc outlives it.
    let scraper: Arc<dyn IReviewScraper> = Arc::new(HtmlReviewScraper::new(&config.scraper)?);
    let service = build_service(&config, Arc::clone(&scraper))?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let address = config.server.bind_address();
    runtime.block_on(serve(&address, AppState::new(service)))?;
    drop(runtime);
    drop(scraper);
    Ok(())
}

async fn serve(address: &str, state: AppState) -> ReviewLensResult<()> {
    let listener = tokio::net::TcpListener::bind(address).await?;
    info!(address, "reviewlens listening");
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("reviewlens stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "failed to listen for ctrl-c");
    }
}
