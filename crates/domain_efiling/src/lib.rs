//! E-filing Domain
//!
//! This crate implements the simulated USCIS e-filing workflow: a fixed step
//! sequence with an audit trail, synthetic receipt numbers, and a deferred
//! biometrics appointment. There is no real browser automation or USCIS
//! integration behind it.
//!
//! # Filing Sequence
//!
//! ```text
//! start -> login -> form_selection -> form_filling -> document_upload
//!       -> evidence_upload -> review -> submit -> receipt -> complete
//! ```

pub mod case;
pub mod account;
pub mod steps;
pub mod audit;
pub mod events;
pub mod receipt;
pub mod ports;
pub mod engine;
pub mod scheduler;
pub mod error;

pub use case::{Case, CaseStatus};
pub use account::FilingAccount;
pub use steps::{FilingStep, StepStatus};
pub use audit::FilingLogEntry;
pub use events::{CaseEvent, CaseEventType};
pub use receipt::ReceiptNumber;
pub use ports::FilingStore;
pub use engine::{EfilingEngine, EngineConfig, FilingOutcome};
pub use error::EfilingError;
