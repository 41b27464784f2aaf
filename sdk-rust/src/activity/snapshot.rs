use super::{
    client::ActivityClient,
    types::{
        ActivitySnapshot, CodeEditorsResponse, CodingActivityResponse, CodingLanguagesResponse,
        OperatingSystemsResponse, RangeSelector, TimeDuration,
    },
};
use crate::DataResult;

/// Combines the four activity resources into one snapshot.
pub struct AggregateActivityView {
    client: ActivityClient,
}

impl AggregateActivityView {
    #[must_use]
    pub fn new(client: ActivityClient) -> Self {
        Self { client }
    }

    #[must_use]
    pub fn client(&self) -> &ActivityClient {
        &self.client
    }

    /// Fetch all four resources concurrently.
    ///
    /// Fails with the first error if any fetch fails; a partial snapshot is
    /// never returned.
    pub async fn snapshot(&self, range: RangeSelector) -> DataResult<ActivitySnapshot> {
        let (activity, languages, editors, operating_systems) = futures::try_join!(
            self.client.get_coding_activity(range),
            self.client.get_coding_languages(),
            self.client.get_code_editors(),
            self.client.get_operating_systems(),
        )
        .inspect_err(|error| {
            tracing::error!(error = %error, range = range.as_str(), "activity snapshot failed");
        })?;

        Ok(build_snapshot(
            activity,
            languages,
            editors,
            operating_systems,
        ))
    }
}

fn build_snapshot(
    activity: CodingActivityResponse,
    languages: CodingLanguagesResponse,
    editors: CodeEditorsResponse,
    operating_systems: OperatingSystemsResponse,
) -> ActivitySnapshot {
    let total_coding_time = activity
        .data
        .first()
        .map_or_else(TimeDuration::zero, |latest| latest.grand_total.clone());

    ActivitySnapshot {
        total_coding_time,
        top_languages: languages.data.unwrap_or_default(),
        top_editors: editors.data.unwrap_or_default(),
        top_operating_systems: operating_systems.data.unwrap_or_default(),
        weekly_data: activity.data,
    }
}
