mod sync;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::sync::Selection;

#[derive(Debug, Parser)]
#[command(name = "gunworks-cli")]
#[command(about = "Vendor catalog sync for the gunworks storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch the vendor feed and rewrite per-category product files
    Sync {
        /// Category to rewrite (ammunition, magazines, reloading, gun-parts,
        /// optics, survival, gear) or `all`
        #[arg(default_value = "all")]
        category: Selection,
    },
}

/// `RUST_LOG` wins when set; otherwise the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config =
        gunworks_core::load_app_config_from_env().context("failed to load configuration")?;
    init_tracing(&config.log_level);
    tracing::debug!(?config, "configuration loaded");

    let mapping = gunworks_core::load_category_mapping(&config.mapping_path)
        .context("failed to load category mapping")?;
    tracing::info!(entries = mapping.len(), "category mapping loaded");

    match cli.command {
        Commands::Sync { category } => {
            let summary = sync::run_sync(&config, &mapping, category).await?;
            summary.print();
            let failed = summary.failed_writes();
            if failed > 0 {
                anyhow::bail!("{failed} category file(s) failed to write");
            }
        }
    }

    Ok(())
}
