//! Test doubles for code built on this crate.
mod content_client;
mod diagnostics;

pub use content_client::{MockContentClient, MockContentResult};
pub use diagnostics::{DiagnosticReport, RecordingDiagnostics};
