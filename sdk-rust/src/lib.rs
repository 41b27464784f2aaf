pub mod activity;
mod client_utils;
pub mod content;
mod diagnostics;
mod errors;
mod opentelemetry;
pub mod portfolio_sdk_test;

pub use activity::{ActivityClient, ActivityClientOptions, AggregateActivityView};
pub use content::{ContentClient, HttpContentClient, HttpContentClientOptions, ProjectRepository};
pub use diagnostics::*;
pub use errors::*;
