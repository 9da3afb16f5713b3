use std::io::Write;

use tracing::instrument;

use crate::config::SiteConfig;
use crate::error::Result;
use crate::export::{self, CsvSink};
use crate::model::MapRecord;
use crate::scraper;
use crate::throttle::Throttle;

/// The main entry point for scraping SurfHeaven.
///
/// `SurfClient` wraps a [`reqwest::Client`] together with the
/// [`SiteConfig`] that says which player to read and how to shape the
/// map list.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> surfheaven_scraper::Result<()> {
/// use surfheaven_scraper::{CsvSink, FixedDelay, SiteConfig, SurfClient};
///
/// let client = SurfClient::new(SiteConfig::default());
/// let mut sink = CsvSink::create("maps.csv")?;
/// let written = client.export(&mut FixedDelay::default(), &mut sink).await?;
/// println!("Exported {written} maps");
/// # Ok(())
/// # }
/// ```
pub struct SurfClient {
    http: reqwest::Client,
    config: SiteConfig,
}

impl SurfClient {
    /// Create a new client with default HTTP settings.
    pub fn new(config: SiteConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a new client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure timeouts, proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, config: SiteConfig) -> Self {
        Self {
            http: client,
            config,
        }
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    /// Fetch the player's profile page and list the map detail links on it,
    /// sorted ascending.
    #[instrument(skip(self))]
    pub async fn get_map_identifiers(&self) -> Result<Vec<String>> {
        scraper::index::get_map_identifiers(&self.http, &self.config).await
    }

    /// Fetch one map's detail page and extract its stats.
    #[instrument(skip(self))]
    pub async fn get_map(&self, identifier: &str) -> Result<MapRecord> {
        scraper::detail::get_map(&self.http, &self.config, identifier).await
    }

    /// Resolve the map list, then fetch and write every map in order.
    /// Returns the number of rows written.
    #[instrument(skip_all)]
    pub async fn export<W, T>(&self, throttle: &mut T, sink: &mut CsvSink<W>) -> Result<usize>
    where
        W: Write,
        T: Throttle,
    {
        let identifiers = self.get_map_identifiers().await?;
        export::export_maps(self, &identifiers, throttle, sink).await
    }
}

impl Default for SurfClient {
    fn default() -> Self {
        Self::new(SiteConfig::default())
    }
}
