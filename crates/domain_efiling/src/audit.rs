//! Step audit trail

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::steps::{FilingStep, StepStatus};
use core_kernel::{CaseId, FilingAccountId, FilingLogId};

/// Fabricated per-step execution time bounds, in milliseconds
const EXECUTION_TIME_MIN_MS: u32 = 500;
const EXECUTION_TIME_MAX_MS: u32 = 2500;

/// One row of the e-filing audit trail
///
/// Rows are append-only, one per step transition. `execution_time_ms` is
/// fabricated; the simulation never measures real work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingLogEntry {
    /// Unique identifier, time-ordered
    pub id: FilingLogId,
    /// Case the run belongs to
    pub case_id: CaseId,
    /// Account the run files under
    pub account_id: FilingAccountId,
    /// Step being recorded
    pub step: FilingStep,
    /// Transition status
    pub status: StepStatus,
    /// Progress message shown to the paralegal
    pub message: String,
    /// Fabricated duration, uniform in [500, 2500)
    pub execution_time_ms: u32,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl FilingLogEntry {
    /// Creates an entry with a fabricated execution time
    pub fn record(
        case_id: CaseId,
        account_id: FilingAccountId,
        step: FilingStep,
        status: StepStatus,
        message: impl Into<String>,
    ) -> Self {
        Self {
            id: FilingLogId::new_v7(),
            case_id,
            account_id,
            step,
            status,
            message: message.into(),
            execution_time_ms: fabricate_execution_time_ms(),
            created_at: Utc::now(),
        }
    }
}

fn fabricate_execution_time_ms() -> u32 {
    rand::thread_rng().gen_range(EXECUTION_TIME_MIN_MS..EXECUTION_TIME_MAX_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_populates_entry() {
        let case_id = CaseId::new();
        let account_id = FilingAccountId::new();

        let entry = FilingLogEntry::record(
            case_id,
            account_id,
            FilingStep::Login,
            StepStatus::InProgress,
            "Signing in to the USCIS account",
        );

        assert_eq!(entry.case_id, case_id);
        assert_eq!(entry.account_id, account_id);
        assert_eq!(entry.step, FilingStep::Login);
        assert_eq!(entry.status, StepStatus::InProgress);
        assert_eq!(entry.message, "Signing in to the USCIS account");
    }

    #[test]
    fn test_execution_time_stays_in_bounds() {
        for _ in 0..1000 {
            let entry = FilingLogEntry::record(
                CaseId::new(),
                FilingAccountId::new(),
                FilingStep::Review,
                StepStatus::Completed,
                "Reviewing submission - completed",
            );
            assert!(entry.execution_time_ms >= 500);
            assert!(entry.execution_time_ms < 2500);
        }
    }
}
