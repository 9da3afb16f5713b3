use ::scraper::Selector;
use itertools::Itertools;
use tracing::{debug, instrument};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::model::MapRecord;
use crate::scraper::label::{self, parse_labeled_count};
use crate::scraper::{self, element_text};

const STATS_CELL_SELECTOR: &str = ".table.table-responsive.nodatatable tbody tr td";

#[instrument(skip(client, config))]
pub(crate) async fn get_map(
    client: &reqwest::Client,
    config: &SiteConfig,
    identifier: &str,
) -> Result<MapRecord> {
    let url = config.detail_url(identifier);
    let document = scraper::get_document(client, &url).await?;
    let record = parse_map(&document, identifier, config)?;
    debug!(?record, "parsed map detail");
    Ok(record)
}

/// Extract the stats table of a map detail page.
///
/// Fields are positional: completions, times played, tier, kind, bonuses,
/// checkpoints. Missing cells read as empty text.
pub(crate) fn parse_map(
    document: &scraper::Html,
    identifier: &str,
    config: &SiteConfig,
) -> Result<MapRecord> {
    let selector = Selector::parse(STATS_CELL_SELECTOR)?;
    let cells = document
        .select(&selector)
        .take(6)
        .map(|cell| element_text(&cell))
        .collect_vec();
    let cell = |i: usize| cells.get(i).map(String::as_str).unwrap_or_default();

    Ok(MapRecord {
        identifier: config.display_name(identifier).to_string(),
        completions: parse_labeled_count(cell(0), label::COMPLETIONS),
        times_played: parse_labeled_count(cell(1), label::TIMES_PLAYED),
        tier: parse_labeled_count(cell(2), label::TIER),
        kind: cell(3).to_string(),
        bonuses: parse_labeled_count(cell(4), label::BONUS),
        checkpoints: parse_labeled_count(cell(5), label::CHECKPOINTS),
    })
}
