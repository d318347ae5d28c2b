//! Case timeline events

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::receipt::ReceiptNumber;
use core_kernel::{CaseEventId, CaseId};

/// Actor recorded on rows written by the automation
pub const SYSTEM_ACTOR: &str = "system";

/// Event type recorded on the case timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseEventType {
    /// A form was submitted and a receipt issued
    FormSubmitted,
    /// A follow-up biometrics collection appointment
    BiometricsAppointment,
}

impl CaseEventType {
    /// Returns the event type name as stored in the database
    pub fn as_str(&self) -> &'static str {
        match self {
            CaseEventType::FormSubmitted => "form_submitted",
            CaseEventType::BiometricsAppointment => "biometrics_appointment",
        }
    }

    /// Parses a stored event type name. Returns `None` for unknown values.
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "form_submitted" => Some(CaseEventType::FormSubmitted),
            "biometrics_appointment" => Some(CaseEventType::BiometricsAppointment),
            _ => None,
        }
    }
}

/// A loosely-typed case timeline record
///
/// Column shape mirrors the store: only the fields relevant to an event
/// type are populated, and nothing enforces that beyond the constructors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseEvent {
    /// Unique identifier
    pub id: CaseEventId,
    /// Case the event belongs to
    pub case_id: CaseId,
    /// Event type
    pub event_type: CaseEventType,
    /// Human-readable summary
    pub description: String,
    /// Receipt number, for submission events
    pub receipt_number: Option<String>,
    /// Storage path of an associated document
    pub document_url: Option<String>,
    /// When the event is scheduled to happen, for appointments
    pub scheduled_for: Option<DateTime<Utc>>,
    /// Venue, for appointments
    pub location: Option<String>,
    /// Actor that recorded the event
    pub created_by: String,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl CaseEvent {
    /// Records a successful form submission with its receipt
    pub fn form_submitted(case_id: CaseId, receipt: &ReceiptNumber) -> Self {
        Self {
            id: CaseEventId::new(),
            case_id,
            event_type: CaseEventType::FormSubmitted,
            description: format!(
                "Form submitted successfully. Receipt Number: {}",
                receipt
            ),
            receipt_number: Some(receipt.to_string()),
            document_url: Some(receipt.confirmation_url(case_id)),
            scheduled_for: None,
            location: None,
            created_by: SYSTEM_ACTOR.to_string(),
            created_at: Utc::now(),
        }
    }

    /// Schedules the follow-up biometrics appointment
    pub fn biometrics_appointment(
        case_id: CaseId,
        scheduled_for: DateTime<Utc>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: CaseEventId::new(),
            case_id,
            event_type: CaseEventType::BiometricsAppointment,
            description: "Biometrics data collection appointment".to_string(),
            receipt_number: None,
            document_url: None,
            scheduled_for: Some(scheduled_for),
            location: Some(location.into()),
            created_by: SYSTEM_ACTOR.to_string(),
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_submitted_carries_receipt_and_url() {
        let case_id = CaseId::new();
        let receipt = ReceiptNumber::from_epoch_millis(1_712_345_678_901);

        let event = CaseEvent::form_submitted(case_id, &receipt);

        assert_eq!(event.event_type, CaseEventType::FormSubmitted);
        assert_eq!(event.receipt_number.as_deref(), Some("MSC2345678901"));
        assert_eq!(
            event.description,
            "Form submitted successfully. Receipt Number: MSC2345678901"
        );
        assert!(event
            .document_url
            .as_deref()
            .unwrap()
            .ends_with("confirmation_MSC2345678901.pdf"));
        assert!(event.scheduled_for.is_none());
        assert_eq!(event.created_by, "system");
    }

    #[test]
    fn test_biometrics_appointment_carries_schedule_and_location() {
        let case_id = CaseId::new();
        let when = Utc::now() + chrono::Duration::days(14);

        let event = CaseEvent::biometrics_appointment(
            case_id,
            when,
            "USCIS Application Support Center - São Paulo",
        );

        assert_eq!(event.event_type, CaseEventType::BiometricsAppointment);
        assert_eq!(event.scheduled_for, Some(when));
        assert_eq!(
            event.location.as_deref(),
            Some("USCIS Application Support Center - São Paulo")
        );
        assert_eq!(event.description, "Biometrics data collection appointment");
        assert!(event.receipt_number.is_none());
    }

    #[test]
    fn test_event_type_names_round_trip() {
        for event_type in [
            CaseEventType::FormSubmitted,
            CaseEventType::BiometricsAppointment,
        ] {
            assert_eq!(CaseEventType::from_str(event_type.as_str()), Some(event_type));
        }
        assert_eq!(CaseEventType::from_str("interview"), None);
    }

    #[test]
    fn test_scheduled_for_serializes_as_rfc3339() {
        let case_id = CaseId::new();
        let when = Utc::now() + chrono::Duration::days(14);
        let event = CaseEvent::biometrics_appointment(case_id, when, "ASC");

        let json = serde_json::to_value(&event).unwrap();
        let serialized = json["scheduled_for"].as_str().unwrap().to_string();
        let parsed: DateTime<Utc> = serialized.parse().unwrap();
        assert_eq!(parsed, when);
    }
}
