//! Step-sequence runner
//!
//! Drives the fixed e-filing sequence against the store: one audit row per
//! step transition, a simulated delay per step, a random rejection on the
//! `submit` step, and the follow-up records on success. The run is strictly
//! sequential, not idempotent, and not resumable; invoking it again for the
//! same case restarts from the first step and duplicates audit rows.

use std::sync::Arc;
use std::time::Duration;

use rand::Rng;
use tracing::{info, instrument, warn};

use core_kernel::{CaseId, FilingAccountId};

use crate::audit::FilingLogEntry;
use crate::error::EfilingError;
use crate::events::CaseEvent;
use crate::ports::FilingStore;
use crate::receipt::ReceiptNumber;
use crate::scheduler;
use crate::steps::{FilingStep, StepStatus};

/// Default venue recorded on biometrics appointments
pub const DEFAULT_APPOINTMENT_LOCATION: &str = "USCIS Application Support Center - São Paulo";

/// Tunables of the simulated flow
///
/// Defaults reproduce the production simulation. Tests shrink the delays
/// and pin the failure rate to either end.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Pause after each step's in-progress entry
    pub step_delay: Duration,
    /// Probability that the submit step is rejected
    pub submit_failure_rate: f64,
    /// Delay before the deferred biometrics event is written
    pub event_delay: Duration,
    /// Days between filing and the biometrics appointment
    pub appointment_lead_days: i64,
    /// Venue recorded on the appointment event
    pub appointment_location: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            step_delay: Duration::from_millis(1000),
            submit_failure_rate: 0.1,
            event_delay: Duration::from_secs(5),
            appointment_lead_days: 14,
            appointment_location: DEFAULT_APPOINTMENT_LOCATION.to_string(),
        }
    }
}

impl EngineConfig {
    /// Sets the per-step pause
    pub fn with_step_delay(mut self, delay: Duration) -> Self {
        self.step_delay = delay;
        self
    }

    /// Sets the submit rejection probability
    pub fn with_submit_failure_rate(mut self, rate: f64) -> Self {
        self.submit_failure_rate = rate;
        self
    }

    /// Sets the delay before the biometrics event is written
    pub fn with_event_delay(mut self, delay: Duration) -> Self {
        self.event_delay = delay;
        self
    }

    /// Sets the appointment lead time in days
    pub fn with_appointment_lead_days(mut self, days: i64) -> Self {
        self.appointment_lead_days = days;
        self
    }

    /// Sets the appointment venue
    pub fn with_appointment_location(mut self, location: impl Into<String>) -> Self {
        self.appointment_location = location.into();
        self
    }
}

/// Summary of a successful run
#[derive(Debug, Clone)]
pub struct FilingOutcome {
    /// Synthetic receipt number issued for the submission
    pub receipt_number: ReceiptNumber,
    /// Storage path of the fabricated confirmation PDF
    pub confirmation_url: String,
}

/// The e-filing runner
pub struct EfilingEngine {
    store: Arc<dyn FilingStore>,
    config: EngineConfig,
}

impl EfilingEngine {
    /// Creates an engine with production defaults
    pub fn new(store: Arc<dyn FilingStore>) -> Self {
        Self {
            store,
            config: EngineConfig::default(),
        }
    }

    /// Creates an engine with explicit tunables
    pub fn with_config(store: Arc<dyn FilingStore>, config: EngineConfig) -> Self {
        Self { store, config }
    }

    /// Runs the full e-filing sequence for a case
    ///
    /// Linear, no retry, no partial recovery. A rejection on `submit`
    /// aborts the run; everything logged up to that point stays logged.
    #[instrument(skip(self), fields(case_id = %case_id, account_id = %account_id))]
    pub async fn submit(
        &self,
        case_id: CaseId,
        account_id: FilingAccountId,
    ) -> Result<FilingOutcome, EfilingError> {
        let mut case = match self.store.get_case(case_id).await {
            Ok(case) => case,
            Err(e) if e.is_not_found() => return Err(EfilingError::CaseNotFound(case_id)),
            Err(e) => return Err(e.into()),
        };

        let account = match self.store.get_account(account_id).await {
            Ok(account) => account,
            Err(e) if e.is_not_found() => {
                return Err(EfilingError::AccountNotFound(account_id))
            }
            Err(e) => return Err(e.into()),
        };

        info!(username = %account.username, "starting e-filing run");

        self.log(
            case_id,
            account_id,
            FilingStep::Start,
            StepStatus::InProgress,
            FilingStep::Start.message().to_string(),
        )
        .await;

        for step in FilingStep::AUTOMATION {
            self.log(
                case_id,
                account_id,
                step,
                StepStatus::InProgress,
                step.message().to_string(),
            )
            .await;

            tokio::time::sleep(self.config.step_delay).await;

            if step == FilingStep::Submit && self.submission_rejected() {
                self.log(
                    case_id,
                    account_id,
                    step,
                    StepStatus::Failed,
                    "Submission error - form rejected".to_string(),
                )
                .await;
                return Err(EfilingError::SubmissionRejected);
            }

            self.log(
                case_id,
                account_id,
                step,
                StepStatus::Completed,
                format!("{} - completed", step.message()),
            )
            .await;
        }

        let receipt = ReceiptNumber::generate();
        let confirmation_url = receipt.confirmation_url(case_id);

        self.store
            .insert_event(&CaseEvent::form_submitted(case_id, &receipt))
            .await?;

        case.record_filing_outcome(&receipt);
        self.store.update_case(&case).await?;

        // Fire and forget; the appointment is lost if the process exits first
        let _ = scheduler::schedule_biometrics_appointment(
            Arc::clone(&self.store),
            case_id,
            self.config.event_delay,
            self.config.appointment_lead_days,
            self.config.appointment_location.clone(),
        );

        self.log(
            case_id,
            account_id,
            FilingStep::Complete,
            StepStatus::Completed,
            format!("Process complete. Receipt: {}", receipt),
        )
        .await;

        info!(receipt = %receipt, "e-filing run complete");

        Ok(FilingOutcome {
            receipt_number: receipt,
            confirmation_url,
        })
    }

    /// Appends an audit row; failures never abort the run
    async fn log(
        &self,
        case_id: CaseId,
        account_id: FilingAccountId,
        step: FilingStep,
        status: StepStatus,
        message: String,
    ) {
        let entry = FilingLogEntry::record(case_id, account_id, step, status, message);
        if let Err(error) = self.store.append_log(&entry).await {
            warn!(step = step.as_str(), %error, "audit log write failed, continuing");
        }
    }

    fn submission_rejected(&self) -> bool {
        rand::thread_rng().gen::<f64>() < self.config.submit_failure_rate
    }
}
