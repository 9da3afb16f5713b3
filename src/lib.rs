//! Export a player's SurfHeaven map completion stats to CSV.
//!
//! The player's profile page lists every map they have played. Each map
//! links to a detail page whose stats table is scraped into a
//! [`MapRecord`] and written as one CSV row.

pub use client::SurfClient;
pub use config::{SiteConfig, SMOKE_TEST_LIMIT};
pub use error::{Result, SurfError};
pub use export::{export_maps, CsvSink};
pub use model::*;
pub use throttle::{FixedDelay, NoDelay, Throttle, DEFAULT_DELAY};

mod client;
pub mod config;
mod error;
mod export;
pub mod model;
mod scraper;
pub mod throttle;
