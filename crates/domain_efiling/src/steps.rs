//! E-filing step sequence
//!
//! The simulated flow walks a fixed, ordered list of steps. Each transition
//! is recorded in the audit trail; there is no branching, retry, or partial
//! recovery.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A step of the e-filing run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilingStep {
    /// Marks the beginning of a run
    Start,
    Login,
    FormSelection,
    FormFilling,
    DocumentUpload,
    EvidenceUpload,
    Review,
    Submit,
    Receipt,
    /// Terminal marker of a successful run
    Complete,
}

impl FilingStep {
    /// The eight automated steps, in execution order
    ///
    /// `Start` and `Complete` bracket the run and are logged separately.
    pub const AUTOMATION: [FilingStep; 8] = [
        FilingStep::Login,
        FilingStep::FormSelection,
        FilingStep::FormFilling,
        FilingStep::DocumentUpload,
        FilingStep::EvidenceUpload,
        FilingStep::Review,
        FilingStep::Submit,
        FilingStep::Receipt,
    ];

    /// Returns the step name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            FilingStep::Start => "start",
            FilingStep::Login => "login",
            FilingStep::FormSelection => "form_selection",
            FilingStep::FormFilling => "form_filling",
            FilingStep::DocumentUpload => "document_upload",
            FilingStep::EvidenceUpload => "evidence_upload",
            FilingStep::Review => "review",
            FilingStep::Submit => "submit",
            FilingStep::Receipt => "receipt",
            FilingStep::Complete => "complete",
        }
    }

    /// Parses a stored step name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "start" => Some(FilingStep::Start),
            "login" => Some(FilingStep::Login),
            "form_selection" => Some(FilingStep::FormSelection),
            "form_filling" => Some(FilingStep::FormFilling),
            "document_upload" => Some(FilingStep::DocumentUpload),
            "evidence_upload" => Some(FilingStep::EvidenceUpload),
            "review" => Some(FilingStep::Review),
            "submit" => Some(FilingStep::Submit),
            "receipt" => Some(FilingStep::Receipt),
            "complete" => Some(FilingStep::Complete),
            _ => None,
        }
    }

    /// Progress message logged when the step begins
    pub fn message(&self) -> &'static str {
        match self {
            FilingStep::Start => "Starting e-filing process",
            FilingStep::Login => "Signing in to the USCIS account",
            FilingStep::FormSelection => "Selecting form type",
            FilingStep::FormFilling => "Filling in form data",
            FilingStep::DocumentUpload => "Uploading documents",
            FilingStep::EvidenceUpload => "Uploading evidence",
            FilingStep::Review => "Reviewing submission",
            FilingStep::Submit => "Submitting form",
            FilingStep::Receipt => "Capturing receipt number",
            FilingStep::Complete => "Process complete",
        }
    }
}

impl fmt::Display for FilingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status recorded for a step transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    InProgress,
    Completed,
    Failed,
}

impl StepStatus {
    /// Returns the status name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::InProgress => "in_progress",
            StepStatus::Completed => "completed",
            StepStatus::Failed => "failed",
        }
    }

    /// Parses a stored status name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "in_progress" => Some(StepStatus::InProgress),
            "completed" => Some(StepStatus::Completed),
            "failed" => Some(StepStatus::Failed),
            _ => None,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_automation_has_eight_steps_in_order() {
        assert_eq!(FilingStep::AUTOMATION.len(), 8);
        assert_eq!(FilingStep::AUTOMATION[0], FilingStep::Login);
        assert_eq!(FilingStep::AUTOMATION[6], FilingStep::Submit);
        assert_eq!(FilingStep::AUTOMATION[7], FilingStep::Receipt);
    }

    #[test]
    fn test_automation_excludes_markers() {
        assert!(!FilingStep::AUTOMATION.contains(&FilingStep::Start));
        assert!(!FilingStep::AUTOMATION.contains(&FilingStep::Complete));
    }

    #[test]
    fn test_step_names_round_trip() {
        let all = [
            FilingStep::Start,
            FilingStep::Login,
            FilingStep::FormSelection,
            FilingStep::FormFilling,
            FilingStep::DocumentUpload,
            FilingStep::EvidenceUpload,
            FilingStep::Review,
            FilingStep::Submit,
            FilingStep::Receipt,
            FilingStep::Complete,
        ];
        for step in all {
            assert_eq!(FilingStep::from_str(step.as_str()), Some(step));
        }
        assert_eq!(FilingStep::from_str("captcha"), None);
    }

    #[test]
    fn test_serde_matches_storage_name() {
        let json = serde_json::to_string(&FilingStep::FormSelection).unwrap();
        assert_eq!(json, "\"form_selection\"");

        let json = serde_json::to_string(&StepStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
    }

    #[test]
    fn test_status_names_round_trip() {
        for status in [StepStatus::InProgress, StepStatus::Completed, StepStatus::Failed] {
            assert_eq!(StepStatus::from_str(status.as_str()), Some(status));
        }
        assert_eq!(StepStatus::from_str("pending"), None);
    }
}
