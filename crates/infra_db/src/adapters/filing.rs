//! PostgreSQL Filing Store
//!
//! This module provides the internal (database) adapter for the e-filing
//! domain, implementing the `FilingStore` trait using PostgreSQL.
//!
//! # Overview
//!
//! The `PgFilingStore` serves as the bridge between the domain layer's
//! port interface and the database. It:
//!
//! - Translates domain reads and writes into SQL statements
//! - Converts database row types back to domain models
//! - Handles error translation between database and port errors
//!
//! Queries use the SQLx runtime API with `FromRow` structs, so the crate
//! builds without a live database.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::adapters::PgFilingStore;
//! use domain_efiling::FilingStore;
//! use std::sync::Arc;
//!
//! // Create the adapter with a database pool
//! let store = PgFilingStore::new(pool);
//!
//! // Use it through the port trait
//! let store: Arc<dyn FilingStore> = Arc::new(store);
//! let case = store.get_case(case_id).await?;
//! ```

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tracing::{debug, instrument};
use uuid::Uuid;

use core_kernel::{
    AdapterHealth, CaseId, ClientId, DomainPort, FilingAccountId, HealthCheckResult,
    HealthCheckable, PortError,
};
use domain_efiling::{Case, CaseEvent, CaseStatus, FilingAccount, FilingLogEntry, FilingStore};

use crate::error::DatabaseError;

/// PostgreSQL-backed implementation of the FilingStore trait
///
/// # Health Checking
///
/// The adapter implements `HealthCheckable` to verify database connectivity.
/// Health checks perform a simple query to ensure the connection pool is
/// operational.
///
/// # Error Handling
///
/// Database errors are translated to `PortError` variants:
/// - `DatabaseError::NotFound` -> `PortError::NotFound`
/// - Constraint violations -> `PortError::Conflict`
/// - Connection failures -> `PortError::Connection`
/// - Other errors -> `PortError::Internal`
#[derive(Debug, Clone)]
pub struct PgFilingStore {
    pool: PgPool,
}

impl PgFilingStore {
    /// Creates a new PostgreSQL filing store
    ///
    /// # Arguments
    ///
    /// * `pool` - The PostgreSQL connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Mark as a domain port
impl DomainPort for PgFilingStore {}

#[async_trait]
impl HealthCheckable for PgFilingStore {
    /// Checks database connectivity
    ///
    /// Performs a simple SELECT 1 query to verify the connection pool
    /// is operational and the database is responsive.
    async fn health_check(&self) -> HealthCheckResult {
        let start = std::time::Instant::now();

        let result = sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await;

        let latency_ms = start.elapsed().as_millis() as u64;

        match result {
            Ok(_) => HealthCheckResult {
                adapter_id: "postgres-filing-store".to_string(),
                status: AdapterHealth::Healthy,
                latency_ms,
                message: None,
                checked_at: Utc::now(),
            },
            Err(e) => HealthCheckResult {
                adapter_id: "postgres-filing-store".to_string(),
                status: AdapterHealth::Unhealthy,
                latency_ms,
                message: Some(format!("Database error: {}", e)),
                checked_at: Utc::now(),
            },
        }
    }
}

#[async_trait]
impl FilingStore for PgFilingStore {
    #[instrument(skip(self), fields(case_id = %id))]
    async fn get_case(&self, id: CaseId) -> Result<Case, PortError> {
        debug!("Fetching case by ID");

        let row = sqlx::query_as::<_, CaseRow>(
            "SELECT id, client_id, status, notes, created_at, updated_at \
             FROM cases WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_to_port_error)?;

        match row {
            Some(row) => row.into_domain(),
            None => Err(PortError::not_found("Case", id)),
        }
    }

    #[instrument(skip(self), fields(account_id = %id))]
    async fn get_account(&self, id: FilingAccountId) -> Result<FilingAccount, PortError> {
        debug!("Fetching e-filing account by ID");

        let row = sqlx::query_as::<_, FilingAccountRow>(
            "SELECT id, username, alias, is_active, created_at \
             FROM efiling_accounts WHERE id = $1",
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(sqlx_to_port_error)?;

        match row {
            Some(row) => Ok(row.into()),
            None => Err(PortError::not_found("FilingAccount", id)),
        }
    }

    #[instrument(skip(self, entry), fields(case_id = %entry.case_id, step = entry.step.as_str()))]
    async fn append_log(&self, entry: &FilingLogEntry) -> Result<(), PortError> {
        debug!("Appending filing log entry");

        sqlx::query(
            "INSERT INTO efiling_logs \
             (id, case_id, account_id, step, status, message, execution_time_ms, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(entry.id.as_uuid())
        .bind(entry.case_id.as_uuid())
        .bind(entry.account_id.as_uuid())
        .bind(entry.step.as_str())
        .bind(entry.status.as_str())
        .bind(&entry.message)
        .bind(entry.execution_time_ms as i32)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await
        .map_err(sqlx_to_port_error)?;

        Ok(())
    }

    #[instrument(skip(self, event), fields(case_id = %event.case_id, event_type = event.event_type.as_str()))]
    async fn insert_event(&self, event: &CaseEvent) -> Result<(), PortError> {
        debug!("Inserting case event");

        sqlx::query(
            "INSERT INTO case_events \
             (id, case_id, event_type, description, receipt_number, document_url, \
              scheduled_for, location, created_by, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(event.id.as_uuid())
        .bind(event.case_id.as_uuid())
        .bind(event.event_type.as_str())
        .bind(&event.description)
        .bind(event.receipt_number.as_deref())
        .bind(event.document_url.as_deref())
        .bind(event.scheduled_for)
        .bind(event.location.as_deref())
        .bind(&event.created_by)
        .bind(event.created_at)
        .execute(&self.pool)
        .await
        .map_err(sqlx_to_port_error)?;

        Ok(())
    }

    #[instrument(skip(self, case), fields(case_id = %case.id, status = case.status.as_str()))]
    async fn update_case(&self, case: &Case) -> Result<(), PortError> {
        debug!("Updating case");

        let result =
            sqlx::query("UPDATE cases SET status = $2, notes = $3, updated_at = $4 WHERE id = $1")
                .bind(case.id.as_uuid())
                .bind(case.status.as_str())
                .bind(case.notes.as_deref())
                .bind(case.updated_at)
                .execute(&self.pool)
                .await
                .map_err(sqlx_to_port_error)?;

        if result.rows_affected() == 0 {
            return Err(PortError::not_found("Case", case.id));
        }

        Ok(())
    }
}

/// Database row for the cases table
#[derive(Debug, sqlx::FromRow)]
struct CaseRow {
    id: Uuid,
    client_id: Uuid,
    status: String,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl CaseRow {
    /// Converts the row to a domain Case
    ///
    /// Fails with `PortError::Internal` if the stored status string is not
    /// a known `CaseStatus` name.
    fn into_domain(self) -> Result<Case, PortError> {
        let status = CaseStatus::from_str(&self.status).ok_or_else(|| {
            PortError::internal(format!("unknown case status in database: {}", self.status))
        })?;

        Ok(Case {
            id: CaseId::from_uuid(self.id),
            client_id: ClientId::from_uuid(self.client_id),
            status,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Database row for the efiling_accounts table
#[derive(Debug, sqlx::FromRow)]
struct FilingAccountRow {
    id: Uuid,
    username: String,
    alias: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl From<FilingAccountRow> for FilingAccount {
    fn from(row: FilingAccountRow) -> Self {
        FilingAccount {
            id: FilingAccountId::from_uuid(row.id),
            username: row.username,
            alias: row.alias,
            is_active: row.is_active,
            created_at: row.created_at,
        }
    }
}

/// Converts a raw SQLx error to a port error via the database error taxonomy
fn sqlx_to_port_error(error: sqlx::Error) -> PortError {
    db_to_port_error(DatabaseError::from(&error))
}

/// Converts database errors to port errors
fn db_to_port_error(e: DatabaseError) -> PortError {
    match e {
        DatabaseError::NotFound { entity_type, id } => PortError::not_found(entity_type, id),
        DatabaseError::DuplicateEntry(message)
        | DatabaseError::ForeignKeyViolation(message)
        | DatabaseError::ConstraintViolation(message) => PortError::conflict(message),
        DatabaseError::ConnectionFailed(message) => PortError::connection(message),
        DatabaseError::PoolExhausted => PortError::connection("connection pool exhausted"),
        other => PortError::internal(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_case_row(status: &str) -> CaseRow {
        CaseRow {
            id: Uuid::new_v4(),
            client_id: Uuid::new_v4(),
            status: status.to_string(),
            notes: Some("Package assembled".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_case_row_conversion() {
        let row = sample_case_row("ready_to_file");
        let id = row.id;

        let case = row.into_domain().unwrap();
        assert_eq!(case.id, CaseId::from_uuid(id));
        assert_eq!(case.status, CaseStatus::ReadyToFile);
        assert_eq!(case.notes.as_deref(), Some("Package assembled"));
    }

    #[test]
    fn test_case_row_unknown_status_is_internal_error() {
        let row = sample_case_row("adjudicated");

        let error = row.into_domain().unwrap_err();
        assert!(matches!(error, PortError::Internal { .. }));
        assert!(error.to_string().contains("adjudicated"));
    }

    #[test]
    fn test_account_row_conversion() {
        let row = FilingAccountRow {
            id: Uuid::new_v4(),
            username: "filings@lawfirm.example".to_string(),
            alias: None,
            is_active: true,
            created_at: Utc::now(),
        };
        let id = row.id;

        let account = FilingAccount::from(row);
        assert_eq!(account.id, FilingAccountId::from_uuid(id));
        assert_eq!(account.username, "filings@lawfirm.example");
        assert!(account.is_active);
    }

    #[test]
    fn test_db_error_mapping_not_found() {
        let error = db_to_port_error(DatabaseError::not_found("Case", "abc"));
        assert!(error.is_not_found());
    }

    #[test]
    fn test_db_error_mapping_conflict() {
        let error = db_to_port_error(DatabaseError::DuplicateEntry("pk violation".into()));
        assert!(matches!(error, PortError::Conflict { .. }));
    }

    #[test]
    fn test_db_error_mapping_connection_is_transient() {
        let error = db_to_port_error(DatabaseError::PoolExhausted);
        assert!(error.is_transient());

        let error = db_to_port_error(DatabaseError::ConnectionFailed("refused".into()));
        assert!(error.is_transient());
    }

    #[test]
    fn test_db_error_mapping_query_failure_is_internal() {
        let error = db_to_port_error(DatabaseError::QueryFailed("syntax error".into()));
        assert!(matches!(error, PortError::Internal { .. }));
    }
}
