//! Infrastructure Database Layer
//!
//! This crate provides PostgreSQL access for the Osprey platform: connection
//! pool management, database error mapping, and the internal adapter
//! implementing the e-filing store port.
//!
//! Queries use the SQLx runtime API with `FromRow` structs, so the crate
//! builds without a live database. Schema lifecycle is managed outside this
//! repository; the adapter reads and writes the existing tables verbatim.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{DatabaseConfig, PgFilingStore, create_pool};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/osprey")).await?;
//! let store = PgFilingStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod adapters;

pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use adapters::PgFilingStore;
