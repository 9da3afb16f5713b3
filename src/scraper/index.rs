use ::scraper::Selector;
use itertools::Itertools;
use tracing::{debug, instrument, warn};

use crate::config::SiteConfig;
use crate::error::Result;
use crate::scraper;

const MAP_LINK_SELECTOR: &str = ".table-maps .table tbody tr td a";

#[instrument(skip(client, config), fields(player = %config.player_id))]
pub(crate) async fn get_map_identifiers(
    client: &reqwest::Client,
    config: &SiteConfig,
) -> Result<Vec<String>> {
    let url = config.profile_url();
    let document = scraper::get_document(client, &url).await?;
    let identifiers = parse_identifiers(&document, config)?;
    debug!(count = identifiers.len(), "resolved map identifiers");
    Ok(identifiers)
}

/// Collect map detail hrefs from the player's map table, sorted ascending.
pub(crate) fn parse_identifiers(
    document: &scraper::Html,
    config: &SiteConfig,
) -> Result<Vec<String>> {
    let selector = Selector::parse(MAP_LINK_SELECTOR)?;
    let sorted = document
        .select(&selector)
        .filter_map(|link| match link.value().attr("href").map(str::trim) {
            Some(href) if !href.is_empty() => Some(href),
            _ => {
                warn!(text = %scraper::element_text(&link), "skipping map link without href");
                None
            }
        })
        .map(str::to_string)
        .sorted();

    let identifiers = if config.dedup {
        sorted.dedup().collect_vec()
    } else {
        sorted.collect_vec()
    };

    Ok(match config.limit {
        Some(limit) => identifiers.into_iter().take(limit).collect(),
        None => identifiers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SMOKE_TEST_LIMIT;

    fn index_page(hrefs: &[&str]) -> scraper::Html {
        let rows = hrefs
            .iter()
            .map(|href| format!(r#"<tr><td><a href="{href}">{href}</a></td><td>1</td></tr>"#))
            .join("\n");
        scraper::Html::parse_document(&format!(
            r#"<html><body>
            <div class="table-maps">
              <table class="table">
                <thead><tr><th>Map</th><th>Rank</th></tr></thead>
                <tbody>{rows}</tbody>
              </table>
            </div>
            <a href="/player/43223876">profile</a>
            </body></html>"#
        ))
    }

    #[test]
    fn test_identifiers_sorted_and_stable() {
        let document = index_page(&["/map/surf_utopia", "/map/surf_beginner", "/map/surf_mesa"]);
        let config = SiteConfig::default();
        let first = parse_identifiers(&document, &config).unwrap();
        let second = parse_identifiers(&document, &config).unwrap();
        assert_eq!(
            first,
            vec!["/map/surf_beginner", "/map/surf_mesa", "/map/surf_utopia"]
        );
        assert_eq!(first, second);
    }

    #[test]
    fn test_links_outside_map_table_ignored() {
        let document = index_page(&["/map/surf_mesa"]);
        let identifiers = parse_identifiers(&document, &SiteConfig::default()).unwrap();
        assert_eq!(identifiers, vec!["/map/surf_mesa"]);
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let document = scraper::Html::parse_document(
            r#"<div class="table-maps"><table class="table"><tbody>
              <tr><td><a>no link</a></td></tr>
              <tr><td><a href="/map/surf_kitsune">surf_kitsune</a></td></tr>
            </tbody></table></div>"#,
        );
        let identifiers = parse_identifiers(&document, &SiteConfig::default()).unwrap();
        assert_eq!(identifiers, vec!["/map/surf_kitsune"]);
    }

    #[test]
    fn test_duplicates_removed_by_default() {
        let document = index_page(&["/map/b", "/map/a", "/map/b"]);
        let identifiers = parse_identifiers(&document, &SiteConfig::default()).unwrap();
        assert_eq!(identifiers, vec!["/map/a", "/map/b"]);
    }

    #[test]
    fn test_duplicates_kept_when_dedup_disabled() {
        let document = index_page(&["/map/b", "/map/a", "/map/b"]);
        let config = SiteConfig {
            dedup: false,
            ..SiteConfig::default()
        };
        let identifiers = parse_identifiers(&document, &config).unwrap();
        assert_eq!(identifiers, vec!["/map/a", "/map/b", "/map/b"]);
    }

    #[test]
    fn test_smoke_limit_keeps_smallest_prefix() {
        let hrefs = (0..25).rev().map(|i| format!("/map/surf_{i:02}")).collect_vec();
        let document = index_page(&hrefs.iter().map(String::as_str).collect_vec());
        let config = SiteConfig {
            limit: Some(SMOKE_TEST_LIMIT),
            ..SiteConfig::default()
        };
        let identifiers = parse_identifiers(&document, &config).unwrap();
        let expected = (0..10).map(|i| format!("/map/surf_{i:02}")).collect_vec();
        assert_eq!(identifiers, expected);
    }

    #[test]
    fn test_smoke_limit_with_fewer_maps() {
        let document = index_page(&["/map/c", "/map/a"]);
        let config = SiteConfig {
            limit: Some(SMOKE_TEST_LIMIT),
            ..SiteConfig::default()
        };
        let identifiers = parse_identifiers(&document, &config).unwrap();
        assert_eq!(identifiers, vec!["/map/a", "/map/c"]);
    }
}
