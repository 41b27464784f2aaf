use portfolio_sdk::{
    activity::ActivityEndpoints, ActivityClient, ActivityClientOptions, HttpContentClient,
    HttpContentClientOptions,
};
use std::collections::HashMap;

pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "portfolio_sdk=debug".into()),
        )
        .init();
}

/// Uses `WAKATIME_SHARE_BASE` plus the four `WAKATIME_*_ID` share file ids
/// when set, otherwise the published defaults.
pub fn activity_client() -> ActivityClient {
    let endpoints = std::env::var("WAKATIME_SHARE_BASE").ok().map(|base| {
        let id = |name: &str| {
            std::env::var(name)
                .unwrap_or_else(|_| panic!("{name} environment variable must be set"))
        };
        ActivityEndpoints::from_share_base(
            &base,
            &id("WAKATIME_ACTIVITY_ID"),
            &id("WAKATIME_LANGUAGES_ID"),
            &id("WAKATIME_EDITORS_ID"),
            &id("WAKATIME_OS_ID"),
        )
    });

    ActivityClient::new(ActivityClientOptions {
        endpoints,
        ..Default::default()
    })
}

pub fn content_client() -> HttpContentClient {
    let service_domain = std::env::var("MICROCMS_SERVICE_DOMAIN")
        .expect("MICROCMS_SERVICE_DOMAIN environment variable must be set");
    let api_key = std::env::var("MICROCMS_API_KEY")
        .expect("MICROCMS_API_KEY environment variable must be set");

    HttpContentClient::for_service(
        &service_domain,
        HttpContentClientOptions {
            headers: Some(HashMap::from([(
                "X-MICROCMS-API-KEY".to_string(),
                api_key,
            )])),
            ..Default::default()
        },
    )
}
