//! Wire shapes of the WakaTime public share JSON files.
//!
//! Only the coding activity file needs its own wire types: its totals use
//! snake_case keys that are renamed on the way into the view model. The
//! breakdown files already match `StatsBreakdown`.
use super::types::ActivityRange;
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Deserialize, Debug, Clone)]
pub struct CodingActivityResponse {
    #[serde(default)]
    pub data: Vec<CodingActivityEntry>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct CodingActivityEntry {
    #[serde(default)]
    pub range: ActivityRange,
    pub grand_total: GrandTotal,
}

/// Total coding time for one day of the share window.
///
/// Only `total_seconds` is required. Every other key, known or not, is
/// carried over to the view model unchanged.
#[derive(Deserialize, Debug, Clone)]
pub struct GrandTotal {
    /// Hours as a decimal string, e.g. `"1.50"`.
    #[serde(default)]
    pub decimal: String,
    /// Clock style, e.g. `"1:30"`.
    #[serde(default)]
    pub digital: String,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    /// Human readable, e.g. `"1 hr 30 mins"`.
    #[serde(default)]
    pub text: String,
    pub total_seconds: f64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
