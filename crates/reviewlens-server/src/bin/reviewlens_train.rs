//! Train both model artifacts from a labelled CSV corpus.
//!
//! ```text
//! reviewlens-train --data fake_reviews.csv --config reviewlens.toml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use reviewlens_core::config::CliOverrides;
use reviewlens_core::tracing::init_tracing_with;
use reviewlens_core::ReviewLensConfig;
use reviewlens_pipeline::train_from_csv;

#[derive(Parser, Debug)]
#[command(author, version, about = "Train the embedding table and the review classifier")]
struct Args {
    /// CSV with `text_`, `label` (CG/OR) and optional `rating` columns
    #[arg(long)]
    data: PathBuf,

    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path for the embedding table
    #[arg(long)]
    embeddings: Option<String>,

    /// Output path for the classifier
    #[arg(long)]
    classifier: Option<String>,

    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let overrides = CliOverrides {
        embeddings_path: args.embeddings,
        classifier_path: args.classifier,
        log_level: args.log_level,
        ..CliOverrides::default()
    };
    let config = ReviewLensConfig::load(args.config.as_deref(), Some(&overrides))
        .context("loading configuration")?;
    init_tracing_with(&config.observability);

    let outcome = train_from_csv(&args.data, &config)
        .with_context(|| format!("training from {}", args.data.display()))?;

    let m = &outcome.metrics;
    println!("samples:   {}", outcome.samples);
    println!("vocab:     {}", outcome.bundle.vocab_size());
    println!("{}", m.confusion_matrix);
    println!(
        "accuracy {:.4}  precision {:.4}  recall {:.4}  f1 {:.4}",
        m.accuracy, m.precision, m.recall, m.f1
    );
    Ok(())
}
