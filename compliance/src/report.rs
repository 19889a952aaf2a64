use log::{info, warn};
use serde::Serialize;
use std::{fs, path::Path};

use crate::{checks::CheckOutcome, error::ComplianceError};

/// Everything a compliance run found out.
#[derive(Debug, Clone, Serialize)]
pub struct ComplianceReport {
    pub base_url: String,
    /// Id from the descriptor, when it could be fetched.
    pub beacon_id: Option<String>,
    pub outcomes: Vec<CheckOutcome>,
}

impl ComplianceReport {
    pub fn passed(&self) -> bool {
        self.outcomes.iter().all(|outcome| outcome.passed)
    }

    pub fn failures(&self) -> Vec<&CheckOutcome> {
        self.outcomes.iter().filter(|outcome| !outcome.passed).collect()
    }

    /// Looks up the outcome of a check by its label, e.g. `PUT query`.
    pub fn outcome(&self, check: &str) -> Option<&CheckOutcome> {
        self.outcomes.iter().find(|outcome| outcome.check == check)
    }

    pub fn log_summary(&self) {
        let failures = self.failures();
        info!("Compliance summary for {}", self.base_url);
        if let Some(id) = &self.beacon_id {
            info!("  - Beacon id: {id}");
        }
        info!(
            "  - {} of {} checks passed",
            self.outcomes.len() - failures.len(),
            self.outcomes.len()
        );
        for failure in failures {
            warn!("  - failed: {}: {}", failure.check, failure.detail);
        }
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<(), ComplianceError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
