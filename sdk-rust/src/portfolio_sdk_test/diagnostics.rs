use std::sync::Mutex;

use crate::{DataError, Diagnostics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticReport {
    pub operation: &'static str,
    pub message: String,
}

/// Diagnostics sink that keeps every report for later assertions.
#[derive(Default)]
pub struct RecordingDiagnostics {
    reports: Mutex<Vec<DiagnosticReport>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<DiagnosticReport> {
        self.reports.lock().expect("diagnostics poisoned").clone()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, operation: &'static str, error: &DataError) {
        self.reports
            .lock()
            .expect("diagnostics poisoned")
            .push(DiagnosticReport {
                operation,
                message: error.to_string(),
            });
    }
}
