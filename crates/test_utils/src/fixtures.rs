//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for common entities across the Osprey
//! system. These fixtures are designed to be consistent and predictable
//! for unit tests.

use chrono::{DateTime, TimeZone, Utc};
use core_kernel::{CaseId, ClientId, FilingAccountId};
use uuid::Uuid;

/// Fixture for identifier test data
pub struct IdFixtures;

impl IdFixtures {
    /// Creates a deterministic case ID for testing
    pub fn case_id() -> CaseId {
        CaseId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440001").unwrap())
    }

    /// Creates a deterministic client ID for testing
    pub fn client_id() -> ClientId {
        ClientId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440002").unwrap())
    }

    /// Creates a deterministic e-filing account ID for testing
    pub fn filing_account_id() -> FilingAccountId {
        FilingAccountId::from_uuid(Uuid::parse_str("550e8400-e29b-41d4-a716-446655440003").unwrap())
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// Standard case opening timestamp (Jan 2, 2024)
    pub fn case_opened() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 9, 30, 0).unwrap()
    }

    /// Standard account creation timestamp (Nov 15, 2023)
    pub fn account_created() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2023, 11, 15, 8, 0, 0).unwrap()
    }
}

/// Fixture for string test data
pub struct StringFixtures;

impl StringFixtures {
    /// Standard USCIS account username
    pub fn uscis_username() -> &'static str {
        "filings@osprey-legal.example"
    }

    /// Standard account alias
    pub fn account_alias() -> &'static str {
        "Primary filing account"
    }
}
