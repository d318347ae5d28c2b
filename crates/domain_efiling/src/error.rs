//! E-filing domain errors

use thiserror::Error;

use core_kernel::{CaseId, FilingAccountId, PortError};

/// Errors that can occur while driving an e-filing run
#[derive(Debug, Error)]
pub enum EfilingError {
    #[error("Case not found: {0}")]
    CaseNotFound(CaseId),

    #[error("E-filing account not found: {0}")]
    AccountNotFound(FilingAccountId),

    /// The simulated USCIS portal rejected the submission
    #[error("Submission rejected by USCIS")]
    SubmissionRejected,

    #[error(transparent)]
    Store(#[from] PortError),
}
