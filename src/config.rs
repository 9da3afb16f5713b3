//! Site and run configuration shared by the resolver, extractor and exporter.

pub const DEFAULT_BASE_URL: &str = "https://surfheaven.eu";
pub const DEFAULT_PLAYER_ID: &str = "43223876";
pub const DEFAULT_MAP_PREFIX: &str = "/map/";

/// Identifier count kept by the smoke-test run.
pub const SMOKE_TEST_LIMIT: usize = 10;

/// Where to scrape from and how to shape the identifier list.
///
/// Built once at startup and never mutated afterwards. Tests point
/// `base_url` at a local fixture server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Site root without a trailing slash, e.g. `https://surfheaven.eu`.
    pub base_url: String,
    pub player_id: String,
    /// Path prefix of map detail links, stripped from exported identifiers.
    pub map_prefix: String,
    /// Keep only the first `n` identifiers after sorting.
    pub limit: Option<usize>,
    /// Drop repeated identifiers after sorting.
    pub dedup: bool,
    /// Export `surf_beginner` instead of `/map/surf_beginner`.
    pub strip_map_prefix: bool,
}

impl SiteConfig {
    pub fn new(base_url: impl Into<String>, player_id: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            player_id: player_id.into(),
            ..Self::default()
        }
    }

    /// The player's map list page.
    pub fn profile_url(&self) -> String {
        format!("{}/player/{}", self.base_url, self.player_id)
    }

    /// Absolute detail page URL for an identifier taken from an index href.
    pub fn detail_url(&self, identifier: &str) -> String {
        if identifier.starts_with("http://") || identifier.starts_with("https://") {
            identifier.to_string()
        } else {
            format!("{}{identifier}", self.base_url)
        }
    }

    /// The identifier as it appears in the export.
    pub fn display_name<'a>(&self, identifier: &'a str) -> &'a str {
        if self.strip_map_prefix {
            identifier
                .strip_prefix(self.map_prefix.as_str())
                .filter(|name| !name.is_empty())
                .unwrap_or(identifier)
        } else {
            identifier
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            player_id: DEFAULT_PLAYER_ID.to_string(),
            map_prefix: DEFAULT_MAP_PREFIX.to_string(),
            limit: None,
            dedup: true,
            strip_map_prefix: true,
        }
    }
}
