//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Utc};
use core_kernel::{CaseId, ClientId, FilingAccountId};
use domain_efiling::{Case, CaseStatus, FilingAccount};

use crate::fixtures::{IdFixtures, StringFixtures, TemporalFixtures};

/// Builder for constructing test cases
pub struct TestCaseBuilder {
    id: CaseId,
    client_id: ClientId,
    status: CaseStatus,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Default for TestCaseBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCaseBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        let opened = TemporalFixtures::case_opened();
        Self {
            id: IdFixtures::case_id(),
            client_id: IdFixtures::client_id(),
            status: CaseStatus::ReadyToFile,
            notes: None,
            created_at: opened,
            updated_at: opened,
        }
    }

    /// Sets the case ID
    pub fn with_id(mut self, id: CaseId) -> Self {
        self.id = id;
        self
    }

    /// Sets the client ID
    pub fn with_client_id(mut self, id: ClientId) -> Self {
        self.client_id = id;
        self
    }

    /// Sets the status
    pub fn with_status(mut self, status: CaseStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Builds the test case
    pub fn build(self) -> Case {
        Case {
            id: self.id,
            client_id: self.client_id,
            status: self.status,
            notes: self.notes,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Builder for constructing test e-filing accounts
pub struct TestFilingAccountBuilder {
    id: FilingAccountId,
    username: String,
    alias: Option<String>,
    is_active: bool,
    created_at: DateTime<Utc>,
}

impl Default for TestFilingAccountBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestFilingAccountBuilder {
    /// Creates a new builder with default values
    pub fn new() -> Self {
        Self {
            id: IdFixtures::filing_account_id(),
            username: StringFixtures::uscis_username().to_string(),
            alias: Some(StringFixtures::account_alias().to_string()),
            is_active: true,
            created_at: TemporalFixtures::account_created(),
        }
    }

    /// Sets the account ID
    pub fn with_id(mut self, id: FilingAccountId) -> Self {
        self.id = id;
        self
    }

    /// Sets the username
    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    /// Sets the alias
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Marks the account inactive
    pub fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Builds the test account
    pub fn build(self) -> FilingAccount {
        FilingAccount {
            id: self.id,
            username: self.username,
            alias: self.alias,
            is_active: self.is_active,
            created_at: self.created_at,
        }
    }
}
