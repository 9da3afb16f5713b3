use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use surfheaven_scraper::config::{DEFAULT_BASE_URL, DEFAULT_PLAYER_ID};
use surfheaven_scraper::{CsvSink, FixedDelay, SiteConfig, SurfClient, SMOKE_TEST_LIMIT};

#[derive(Parser, Debug)]
#[command(name = "surfheaven-export")]
#[command(about = "Export a player's SurfHeaven map stats to CSV")]
struct Args {
    /// Player whose profile page lists the maps
    #[arg(long, default_value = DEFAULT_PLAYER_ID)]
    player: String,

    /// Site root, e.g. a local fixture server
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Output CSV path (overwritten)
    #[arg(short, long, default_value = "maps.csv")]
    output: PathBuf,

    /// Only export the first N maps after sorting
    #[arg(long, conflicts_with = "smoke")]
    limit: Option<usize>,

    /// Only export the first 10 maps
    #[arg(long, default_value_t = false)]
    smoke: bool,

    /// Delay before each map request (ms)
    #[arg(long, default_value_t = 100)]
    delay_ms: u64,

    /// Export repeated map links once per occurrence
    #[arg(long, default_value_t = false)]
    keep_duplicates: bool,

    /// Export hrefs as-is instead of stripping the /map/ prefix
    #[arg(long, default_value_t = false)]
    raw_identifiers: bool,
}

impl Args {
    fn site_config(&self) -> SiteConfig {
        SiteConfig {
            limit: if self.smoke {
                Some(SMOKE_TEST_LIMIT)
            } else {
                self.limit
            },
            dedup: !self.keep_duplicates,
            strip_map_prefix: !self.raw_identifiers,
            ..SiteConfig::new(&self.base_url, &self.player)
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("surfheaven_scraper=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let client = SurfClient::new(args.site_config());

    let identifiers = client
        .get_map_identifiers()
        .await
        .context("failed to resolve map list")?;
    info!(count = identifiers.len(), player = %args.player, "resolved maps");

    let mut sink = CsvSink::create(&args.output)?;
    let mut throttle = FixedDelay::new(Duration::from_millis(args.delay_ms));
    let written = surfheaven_scraper::export_maps(&client, &identifiers, &mut throttle, &mut sink)
        .await
        .with_context(|| format!("export to {} aborted", args.output.display()))?;

    info!(written, output = %args.output.display(), "done");
    Ok(())
}
