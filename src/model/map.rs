use serde::Serialize;
use strum_macros::{Display, EnumIter};

/// Stats for one map as shown on its detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRecord {
    pub identifier: String,
    pub completions: u32,
    pub times_played: u32,
    pub tier: u32,
    pub kind: String,
    pub bonuses: u32,
    pub checkpoints: u32,
}

/// Columns of the CSV export, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
#[strum(serialize_all = "camelCase")]
pub enum Column {
    Identifier,
    Completions,
    TimesPlayed,
    Tier,
    Kind,
    Bonuses,
    Checkpoints,
}
