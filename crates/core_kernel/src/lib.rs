//! Core Kernel - Foundational types and utilities for the Osprey platform
//!
//! This crate provides the fundamental building blocks used across all domain modules:
//! - Typed identifiers for cases, filing accounts, and audit records
//! - Port infrastructure shared by domain traits and their adapters

pub mod identifiers;
pub mod ports;

pub use identifiers::{
    CaseEventId, CaseId, ClientId, FilingAccountId, FilingLogId,
};
pub use ports::{
    AdapterHealth, DomainPort, HealthCheckResult, HealthCheckable, PortError,
};
