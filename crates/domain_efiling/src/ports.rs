//! E-filing Domain Ports
//!
//! This module defines the store interface for the e-filing domain, enabling
//! swappable implementations (internal database, in-memory mock).
//!
//! # Architecture
//!
//! The `FilingStore` trait defines every row-level operation the filing
//! runner needs from its data source. Two adapters implement it:
//!
//! - **Internal Adapter**: PostgreSQL (infra_db)
//! - **Mock Adapter**: in-memory, for testing without a database
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_efiling::ports::FilingStore;
//! use std::sync::Arc;
//!
//! // The engine receives the port trait
//! pub struct EfilingEngine {
//!     store: Arc<dyn FilingStore>,
//! }
//! ```

use async_trait::async_trait;

use core_kernel::{
    CaseId, DomainPort, FilingAccountId, HealthCheckResult, HealthCheckable, PortError,
};

use crate::account::FilingAccount;
use crate::audit::FilingLogEntry;
use crate::case::Case;
use crate::events::CaseEvent;

/// Store interface for the e-filing domain
///
/// All methods are async and return `Result<T, PortError>` for consistent
/// error handling across adapter implementations. The runner treats the
/// store as a plain row store: reads are by id, writes are single-row
/// inserts and updates, and nothing here is transactional across calls.
#[async_trait]
pub trait FilingStore: DomainPort + HealthCheckable {
    /// Retrieves a case by id
    ///
    /// # Returns
    ///
    /// The case if found, or `PortError::NotFound`
    async fn get_case(&self, id: CaseId) -> Result<Case, PortError>;

    /// Retrieves an e-filing account by id
    ///
    /// # Returns
    ///
    /// The account if found, or `PortError::NotFound`
    async fn get_account(&self, id: FilingAccountId) -> Result<FilingAccount, PortError>;

    /// Appends one row to the audit trail
    ///
    /// Append-only: no batching, no dedup, no upsert.
    async fn append_log(&self, entry: &FilingLogEntry) -> Result<(), PortError>;

    /// Inserts one case timeline event
    async fn insert_event(&self, event: &CaseEvent) -> Result<(), PortError>;

    /// Persists the mutable fields of a case (status, notes, updated_at)
    async fn update_case(&self, case: &Case) -> Result<(), PortError>;
}

/// Mock implementation of FilingStore for testing
///
/// Stores everything in memory. Log and event writes can be forced to fail
/// to exercise the runner's swallow-and-continue paths.
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// In-memory mock implementation of FilingStore
    #[derive(Debug, Default)]
    pub struct MockFilingStore {
        cases: Arc<RwLock<HashMap<CaseId, Case>>>,
        accounts: Arc<RwLock<HashMap<FilingAccountId, FilingAccount>>>,
        logs: Arc<RwLock<Vec<FilingLogEntry>>>,
        events: Arc<RwLock<Vec<CaseEvent>>>,
        fail_log_writes: bool,
        fail_event_writes: bool,
    }

    impl MockFilingStore {
        /// Creates an empty mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Seeds a case
        pub async fn with_case(self, case: Case) -> Self {
            self.cases.write().await.insert(case.id, case);
            self
        }

        /// Seeds an account
        pub async fn with_account(self, account: FilingAccount) -> Self {
            self.accounts.write().await.insert(account.id, account);
            self
        }

        /// Makes every `append_log` call fail
        pub fn with_log_failures(mut self) -> Self {
            self.fail_log_writes = true;
            self
        }

        /// Makes every `insert_event` call fail
        pub fn with_event_failures(mut self) -> Self {
            self.fail_event_writes = true;
            self
        }

        /// Snapshot of the audit trail, in append order
        pub async fn logs(&self) -> Vec<FilingLogEntry> {
            self.logs.read().await.clone()
        }

        /// Snapshot of the recorded events, in insert order
        pub async fn events(&self) -> Vec<CaseEvent> {
            self.events.read().await.clone()
        }
    }

    impl DomainPort for MockFilingStore {}

    #[async_trait]
    impl HealthCheckable for MockFilingStore {
        async fn health_check(&self) -> HealthCheckResult {
            HealthCheckResult {
                adapter_id: "mock-filing-store".to_string(),
                status: core_kernel::AdapterHealth::Healthy,
                latency_ms: 0,
                message: Some("Mock adapter always healthy".to_string()),
                checked_at: Utc::now(),
            }
        }
    }

    #[async_trait]
    impl FilingStore for MockFilingStore {
        async fn get_case(&self, id: CaseId) -> Result<Case, PortError> {
            self.cases
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("Case", id))
        }

        async fn get_account(&self, id: FilingAccountId) -> Result<FilingAccount, PortError> {
            self.accounts
                .read()
                .await
                .get(&id)
                .cloned()
                .ok_or_else(|| PortError::not_found("FilingAccount", id))
        }

        async fn append_log(&self, entry: &FilingLogEntry) -> Result<(), PortError> {
            if self.fail_log_writes {
                return Err(PortError::connection("simulated log write failure"));
            }
            self.logs.write().await.push(entry.clone());
            Ok(())
        }

        async fn insert_event(&self, event: &CaseEvent) -> Result<(), PortError> {
            if self.fail_event_writes {
                return Err(PortError::connection("simulated event write failure"));
            }
            self.events.write().await.push(event.clone());
            Ok(())
        }

        async fn update_case(&self, case: &Case) -> Result<(), PortError> {
            let mut cases = self.cases.write().await;
            match cases.get_mut(&case.id) {
                Some(stored) => {
                    *stored = case.clone();
                    Ok(())
                }
                None => Err(PortError::not_found("Case", case.id)),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::MockFilingStore;
    use super::*;
    use crate::case::CaseStatus;
    use crate::receipt::ReceiptNumber;
    use crate::steps::{FilingStep, StepStatus};
    use core_kernel::ClientId;

    #[tokio::test]
    async fn test_mock_store_get_case() {
        let case = Case::new(ClientId::new());
        let case_id = case.id;
        let store = MockFilingStore::new().with_case(case).await;

        let retrieved = store.get_case(case_id).await.unwrap();
        assert_eq!(retrieved.id, case_id);
        assert_eq!(retrieved.status, CaseStatus::ReadyToFile);
    }

    #[tokio::test]
    async fn test_mock_store_not_found() {
        let store = MockFilingStore::new();

        let case_result = store.get_case(CaseId::new()).await;
        assert!(case_result.unwrap_err().is_not_found());

        let account_result = store.get_account(FilingAccountId::new()).await;
        assert!(account_result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_mock_store_append_log_preserves_order() {
        let store = MockFilingStore::new();
        let case_id = CaseId::new();
        let account_id = FilingAccountId::new();

        for step in [FilingStep::Start, FilingStep::Login] {
            let entry = FilingLogEntry::record(
                case_id,
                account_id,
                step,
                StepStatus::InProgress,
                step.message(),
            );
            store.append_log(&entry).await.unwrap();
        }

        let logs = store.logs().await;
        assert_eq!(logs.len(), 2);
        assert_eq!(logs[0].step, FilingStep::Start);
        assert_eq!(logs[1].step, FilingStep::Login);
    }

    #[tokio::test]
    async fn test_mock_store_update_case() {
        let mut case = Case::new(ClientId::new());
        let case_id = case.id;
        let store = MockFilingStore::new().with_case(case.clone()).await;

        case.record_filing_outcome(&ReceiptNumber::from_epoch_millis(42));
        store.update_case(&case).await.unwrap();

        let stored = store.get_case(case_id).await.unwrap();
        assert_eq!(stored.status, CaseStatus::InProgress);
        assert!(stored.notes.unwrap().contains("MSC0000000042"));
    }

    #[tokio::test]
    async fn test_mock_store_update_missing_case() {
        let store = MockFilingStore::new();
        let case = Case::new(ClientId::new());

        let result = store.update_case(&case).await;
        assert!(result.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_mock_store_forced_write_failures() {
        let store = MockFilingStore::new()
            .with_log_failures()
            .with_event_failures();

        let entry = FilingLogEntry::record(
            CaseId::new(),
            FilingAccountId::new(),
            FilingStep::Start,
            StepStatus::InProgress,
            "Starting e-filing process",
        );
        assert!(store.append_log(&entry).await.is_err());
        assert!(store.logs().await.is_empty());

        let event =
            CaseEvent::form_submitted(CaseId::new(), &ReceiptNumber::from_epoch_millis(42));
        assert!(store.insert_event(&event).await.is_err());
        assert!(store.events().await.is_empty());
    }

    #[tokio::test]
    async fn test_mock_store_health_check() {
        let store = MockFilingStore::new();
        let result = store.health_check().await;
        assert_eq!(result.status, core_kernel::AdapterHealth::Healthy);
    }
}
