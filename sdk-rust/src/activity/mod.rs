mod api;
mod client;
mod snapshot;
mod types;

pub use client::{ActivityClient, ActivityClientOptions, ActivityEndpoints, DEFAULT_REVALIDATE};
pub use snapshot::AggregateActivityView;
pub use types::*;
