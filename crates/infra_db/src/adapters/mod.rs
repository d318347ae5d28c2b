//! Domain Adapters
//!
//! This module provides adapter implementations for domain ports,
//! connecting domain interfaces to the PostgreSQL database layer.
//!
//! # Architecture
//!
//! Each adapter:
//! - Implements the domain's port trait
//! - Translates between domain models and database row types
//! - Maps SQLx errors to `PortError` via `DatabaseError`
//!
//! # Usage
//!
//! ```rust,ignore
//! use infra_db::adapters::PgFilingStore;
//! use domain_efiling::FilingStore;
//!
//! let store = PgFilingStore::new(pool);
//! let case = store.get_case(case_id).await?;
//! ```

pub mod filing;

pub use filing::PgFilingStore;
