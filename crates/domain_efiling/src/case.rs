//! Case aggregate

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::receipt::ReceiptNumber;
use core_kernel::{CaseId, ClientId};

/// Case status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    /// Initial intake, paperwork being gathered
    Intake,
    /// Waiting on client documents
    DocumentsPending,
    /// Package assembled, ready to file
    ReadyToFile,
    /// Filed with USCIS, awaiting adjudication
    InProgress,
    /// Approved by USCIS
    Approved,
    /// Denied by USCIS
    Denied,
    /// Closed
    Closed,
}

impl CaseStatus {
    /// Returns the status name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseStatus::Intake => "intake",
            CaseStatus::DocumentsPending => "documents_pending",
            CaseStatus::ReadyToFile => "ready_to_file",
            CaseStatus::InProgress => "in_progress",
            CaseStatus::Approved => "approved",
            CaseStatus::Denied => "denied",
            CaseStatus::Closed => "closed",
        }
    }

    /// Parses a stored status name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "intake" => Some(CaseStatus::Intake),
            "documents_pending" => Some(CaseStatus::DocumentsPending),
            "ready_to_file" => Some(CaseStatus::ReadyToFile),
            "in_progress" => Some(CaseStatus::InProgress),
            "approved" => Some(CaseStatus::Approved),
            "denied" => Some(CaseStatus::Denied),
            "closed" => Some(CaseStatus::Closed),
            _ => None,
        }
    }
}

/// An immigration case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Case {
    /// Unique identifier
    pub id: CaseId,
    /// Client the case belongs to
    pub client_id: ClientId,
    /// Status
    pub status: CaseStatus,
    /// Free-text annotations; overwritten by the filing runner
    pub notes: Option<String>,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
    /// Updated timestamp
    pub updated_at: DateTime<Utc>,
}

impl Case {
    /// Creates a new case ready to be filed
    pub fn new(client_id: ClientId) -> Self {
        let now = Utc::now();
        Self {
            id: CaseId::new_v7(),
            client_id,
            status: CaseStatus::ReadyToFile,
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Records a successful e-filing run
    ///
    /// The update is unconditional: the runner overwrites status and notes
    /// without checking the previous status.
    pub fn record_filing_outcome(&mut self, receipt: &ReceiptNumber) {
        self.status = CaseStatus::InProgress;
        self.notes = Some(format!("E-filing completed. Receipt: {}", receipt));
        self.updated_at = Utc::now();
    }
}
