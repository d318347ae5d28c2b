//! E-filing provider accounts

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::FilingAccountId;

/// A stored USCIS online account
///
/// The filing runner reads the record verbatim. Credentials are never
/// validated against the provider; the simulation only needs the row to
/// exist.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilingAccount {
    /// Unique identifier
    pub id: FilingAccountId,
    /// Provider-side login name
    pub username: String,
    /// Display alias chosen by the paralegal
    pub alias: Option<String>,
    /// Whether the account is usable for new filings
    pub is_active: bool,
    /// Created timestamp
    pub created_at: DateTime<Utc>,
}

impl FilingAccount {
    /// Creates an active account
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            id: FilingAccountId::new(),
            username: username.into(),
            alias: None,
            is_active: true,
            created_at: Utc::now(),
        }
    }
}
