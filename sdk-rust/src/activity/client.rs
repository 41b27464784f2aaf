use super::{
    api,
    types::{
        CodeEditorsResponse, CodingActivityResponse, CodingLanguagesResponse,
        OperatingSystemsResponse, RangeSelector,
    },
};
use crate::{client_utils, DataError, DataResult};
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Client,
};
use serde::de::DeserializeOwned;
use std::{collections::HashMap, time::Duration};

const SOURCE: &str = "wakatime";
const DEFAULT_SHARE_BASE: &str = "https://wakatime.com/share/@alfaruqasri";

/// How long an intermediary may serve a cached copy of a share file.
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(3600);

/// URLs of the four public share files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEndpoints {
    pub coding_activity: String,
    pub coding_languages: String,
    pub code_editors: String,
    pub operating_systems: String,
}

impl ActivityEndpoints {
    /// Build the endpoint set from a share base such as
    /// `https://wakatime.com/share/@user` and the id of each share file.
    #[must_use]
    pub fn from_share_base(
        share_base: &str,
        coding_activity: &str,
        coding_languages: &str,
        code_editors: &str,
        operating_systems: &str,
    ) -> Self {
        let base = share_base.trim_end_matches('/');
        let url = |id: &str| format!("{base}/{id}.json");

        Self {
            coding_activity: url(coding_activity),
            coding_languages: url(coding_languages),
            code_editors: url(code_editors),
            operating_systems: url(operating_systems),
        }
    }
}

impl Default for ActivityEndpoints {
    fn default() -> Self {
        Self::from_share_base(
            DEFAULT_SHARE_BASE,
            "b52ef430-50bf-4e47-afc3-dab755aa675d",
            "a4b0e00c-bd0e-4adb-9cc8-46856ddd2d0b",
            "d317f0d3-4a12-478b-864f-046e8eacd085",
            "f18be6dd-ae25-429e-a5df-b5a674986fda",
        )
    }
}

#[derive(Clone, Default)]
pub struct ActivityClientOptions {
    pub endpoints: Option<ActivityEndpoints>,
    /// Revalidation window sent with every request. Defaults to one hour.
    pub revalidate: Option<Duration>,
    pub headers: Option<HashMap<String, String>>,
    pub client: Option<Client>,
}

/// Reads coding activity statistics from the public share files.
#[derive(Clone)]
pub struct ActivityClient {
    endpoints: ActivityEndpoints,
    revalidate: Duration,
    client: Client,
    headers: HashMap<String, String>,
}

impl ActivityClient {
    #[must_use]
    pub fn new(options: ActivityClientOptions) -> Self {
        let ActivityClientOptions {
            endpoints,
            revalidate,
            headers,
            client,
        } = options;

        Self {
            endpoints: endpoints.unwrap_or_default(),
            revalidate: revalidate.unwrap_or(DEFAULT_REVALIDATE),
            client: client.unwrap_or_else(Client::new),
            headers: headers.unwrap_or_default(),
        }
    }

    #[must_use]
    pub fn endpoints(&self) -> &ActivityEndpoints {
        &self.endpoints
    }

    #[must_use]
    pub fn revalidate(&self) -> Duration {
        self.revalidate
    }

    fn request_headers(&self) -> DataResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        let cache_control =
            HeaderValue::from_str(&format!("max-age={}", self.revalidate.as_secs())).map_err(
                |error| DataError::InvalidInput(format!("Invalid revalidation window: {error}")),
            )?;
        headers.insert(header::CACHE_CONTROL, cache_control);
        headers.extend(client_utils::build_headers(SOURCE, &self.headers)?);

        Ok(headers)
    }

    async fn fetch<T: DeserializeOwned>(&self, resource: &str, url: &str) -> DataResult<T> {
        crate::opentelemetry::trace_fetch(SOURCE, resource, url, || async move {
            let headers = self.request_headers()?;
            client_utils::get_json(&self.client, url, headers).await
        })
        .await
    }

    /// Fetch any share file and parse it as `T`.
    ///
    /// No schema validation beyond deserialization is performed.
    pub async fn fetch_resource<T: DeserializeOwned>(&self, url: &str) -> DataResult<T> {
        self.fetch("resource", url).await
    }

    /// Daily coding totals with `grand_total.total_seconds` renamed to
    /// `grandTotal.totalSeconds`.
    ///
    /// `range` is accepted for forward compatibility only: the share file
    /// has a fixed window, so every selector returns the same data.
    pub async fn get_coding_activity(
        &self,
        range: RangeSelector,
    ) -> DataResult<CodingActivityResponse> {
        tracing::debug!(
            range = range.as_str(),
            "share file window is fixed; range selector not forwarded"
        );
        let raw: api::CodingActivityResponse = self
            .fetch("coding_activity", &self.endpoints.coding_activity)
            .await?;
        Ok(raw.into())
    }

    pub async fn get_coding_languages(&self) -> DataResult<CodingLanguagesResponse> {
        self.fetch("coding_languages", &self.endpoints.coding_languages)
            .await
    }

    pub async fn get_code_editors(&self) -> DataResult<CodeEditorsResponse> {
        self.fetch("code_editors", &self.endpoints.code_editors)
            .await
    }

    pub async fn get_operating_systems(&self) -> DataResult<OperatingSystemsResponse> {
        self.fetch("operating_systems", &self.endpoints.operating_systems)
            .await
    }

    pub async fn get_weekly_activity(&self) -> DataResult<CodingActivityResponse> {
        self.get_coding_activity(RangeSelector::Last7Days).await
    }

    pub async fn get_monthly_activity(&self) -> DataResult<CodingActivityResponse> {
        self.get_coding_activity(RangeSelector::Last30Days).await
    }

    pub async fn get_six_month_activity(&self) -> DataResult<CodingActivityResponse> {
        self.get_coding_activity(RangeSelector::Last6Months).await
    }

    pub async fn get_yearly_activity(&self) -> DataResult<CodingActivityResponse> {
        self.get_coding_activity(RangeSelector::LastYear).await
    }
}
