use super::api;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Coding time in the several renderings the statistics provider offers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct TimeDuration {
    #[serde(default)]
    pub decimal: String,
    #[serde(default)]
    pub digital: String,
    #[serde(default)]
    pub hours: u32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub text: String,
    pub total_seconds: f64,
    /// Provider keys without a dedicated field.
    #[serde(flatten)]
    #[cfg_attr(feature = "utoipa", schema(value_type = Object))]
    pub extra: Map<String, Value>,
}

impl TimeDuration {
    /// The value reported when the provider has no activity at all.
    #[must_use]
    pub fn zero() -> Self {
        Self {
            decimal: "0.0".to_string(),
            digital: "0:00".to_string(),
            hours: 0,
            minutes: 0,
            text: "0 mins".to_string(),
            total_seconds: 0.0,
            extra: Map::new(),
        }
    }
}

impl Default for TimeDuration {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<api::GrandTotal> for TimeDuration {
    fn from(total: api::GrandTotal) -> Self {
        let api::GrandTotal {
            decimal,
            digital,
            hours,
            minutes,
            text,
            total_seconds,
            extra,
        } = total;

        Self {
            decimal,
            digital,
            hours,
            minutes,
            text,
            total_seconds,
            extra,
        }
    }
}

/// The calendar window an activity entry covers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct ActivityRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct CodingActivityEntry {
    pub range: ActivityRange,
    pub grand_total: TimeDuration,
}

impl From<api::CodingActivityEntry> for CodingActivityEntry {
    fn from(entry: api::CodingActivityEntry) -> Self {
        Self {
            range: entry.range,
            grand_total: entry.grand_total.into(),
        }
    }
}

/// Daily coding totals, most recent first.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct CodingActivityResponse {
    pub data: Vec<CodingActivityEntry>,
}

impl From<api::CodingActivityResponse> for CodingActivityResponse {
    fn from(response: api::CodingActivityResponse) -> Self {
        Self {
            data: response.data.into_iter().map(Into::into).collect(),
        }
    }
}

/// One row of a language, editor or operating system breakdown.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct StatEntry {
    pub name: String,
    pub percent: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub struct StatsBreakdown {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<StatEntry>>,
}

pub type CodingLanguagesResponse = StatsBreakdown;
pub type CodeEditorsResponse = StatsBreakdown;
pub type OperatingSystemsResponse = StatsBreakdown;

/// Requested reporting window.
///
/// The public share files cover a fixed window chosen when the share was
/// created, so every selector currently reads the same resource.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
pub enum RangeSelector {
    #[default]
    #[serde(rename = "last_7_days")]
    Last7Days,
    #[serde(rename = "last_30_days")]
    Last30Days,
    #[serde(rename = "last_6_months")]
    Last6Months,
    #[serde(rename = "last_year")]
    LastYear,
}

impl RangeSelector {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Last7Days => "last_7_days",
            Self::Last30Days => "last_30_days",
            Self::Last6Months => "last_6_months",
            Self::LastYear => "last_year",
        }
    }
}

/// All activity statistics read at one point in time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[cfg_attr(feature = "utoipa", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct ActivitySnapshot {
    pub total_coding_time: TimeDuration,
    pub top_languages: Vec<StatEntry>,
    pub top_editors: Vec<StatEntry>,
    pub top_operating_systems: Vec<StatEntry>,
    pub weekly_data: Vec<CodingActivityEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn grand_total_is_renamed_and_siblings_are_kept() {
        let raw: api::CodingActivityEntry = serde_json::from_value(json!({
            "range": {
                "date": "2024-05-01",
                "start": "2024-05-01T00:00:00Z",
                "end": "2024-05-01T23:59:59Z",
                "text": "Wed May 1st 2024",
                "timezone": "Asia/Jakarta"
            },
            "grand_total": {
                "decimal": "1.00",
                "digital": "1:00",
                "hours": 1,
                "minutes": 0,
                "text": "1 hr",
                "total_seconds": 3600
            }
        }))
        .expect("raw entry parses");

        let entry = CodingActivityEntry::from(raw);
        let value = serde_json::to_value(&entry).expect("entry serializes");

        assert_eq!(
            value["grandTotal"],
            json!({
                "decimal": "1.00",
                "digital": "1:00",
                "hours": 1,
                "minutes": 0,
                "text": "1 hr",
                "totalSeconds": 3600.0
            })
        );
        assert_eq!(value["range"]["timezone"], json!("Asia/Jakarta"));
        assert!(value.get("grand_total").is_none());
    }

    #[test]
    fn grand_total_keeps_unknown_siblings() {
        let raw: api::CodingActivityEntry = serde_json::from_value(json!({
            "range": { "date": "2024-05-01" },
            "grand_total": {
                "decimal": "1.00",
                "digital": "1:00",
                "hours": 1,
                "minutes": 0,
                "seconds": 0,
                "text": "1 hr",
                "total_seconds": 3600
            }
        }))
        .expect("raw entry parses");

        let value = serde_json::to_value(CodingActivityEntry::from(raw))
            .expect("entry serializes");

        assert_eq!(
            value["grandTotal"],
            json!({
                "decimal": "1.00",
                "digital": "1:00",
                "hours": 1,
                "minutes": 0,
                "seconds": 0,
                "text": "1 hr",
                "totalSeconds": 3600.0
            })
        );
    }

    #[test]
    fn grand_total_tolerates_missing_siblings() {
        let raw: api::CodingActivityEntry = serde_json::from_value(json!({
            "grand_total": {
                "digital": "1:00",
                "text": "1 hr",
                "total_seconds": 3600
            }
        }))
        .expect("entry without decimal or hours parses");

        let entry = CodingActivityEntry::from(raw);
        assert_eq!(entry.grand_total.decimal, "");
        assert_eq!(entry.grand_total.hours, 0);
        assert_eq!(entry.grand_total.digital, "1:00");
        assert_eq!(entry.grand_total.total_seconds, 3600.0);
        assert!(entry.grand_total.extra.is_empty());
    }

    #[test]
    fn range_selector_uses_provider_names() {
        for selector in [
            RangeSelector::Last7Days,
            RangeSelector::Last30Days,
            RangeSelector::Last6Months,
            RangeSelector::LastYear,
        ] {
            assert_eq!(
                serde_json::to_value(selector).expect("selector serializes"),
                json!(selector.as_str())
            );
        }
        assert_eq!(RangeSelector::default(), RangeSelector::Last7Days);
    }

    #[test]
    fn breakdown_without_data_parses_as_none() {
        let breakdown: StatsBreakdown =
            serde_json::from_value(json!({})).expect("empty object parses");
        assert_eq!(breakdown.data, None);
    }
}
