//! Deferred biometrics appointment scheduling
//!
//! One detached task per successful filing: sleep a fixed delay, then insert
//! the appointment event dated a fixed number of days out. There is no
//! durable queue and no persisted trigger time; if the process exits before
//! the delay elapses, the record is never written. Insert errors are logged
//! and dropped.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{debug, error};

use core_kernel::CaseId;

use crate::events::CaseEvent;
use crate::ports::FilingStore;

/// Spawns the deferred appointment writer
///
/// The returned handle is only useful to tests; production callers drop it,
/// detaching the task from the request lifecycle.
pub fn schedule_biometrics_appointment(
    store: Arc<dyn FilingStore>,
    case_id: CaseId,
    delay: Duration,
    lead_days: i64,
    location: String,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;

        let scheduled_for = Utc::now() + chrono::Duration::days(lead_days);
        let event = CaseEvent::biometrics_appointment(case_id, scheduled_for, location);

        match store.insert_event(&event).await {
            Ok(()) => {
                debug!(
                    case_id = %case_id,
                    scheduled_for = %scheduled_for.to_rfc3339(),
                    "biometrics appointment recorded"
                );
            }
            Err(error) => {
                error!(case_id = %case_id, %error, "failed to record biometrics appointment");
            }
        }
    })
}
