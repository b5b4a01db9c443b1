//! Personal finance manager core - domain entities, services, and traits.
//!
//! This crate contains the business rules for categories, transactions,
//! savings goals, and derived reports. It is database-agnostic and defines
//! repository traits that are implemented by the storage layer; the HTTP
//! layer consumes the services through their service traits.

pub mod categories;
pub mod constants;
pub mod errors;
pub mod goals;
pub mod reports;
pub mod transactions;

// Re-export the type shared across module boundaries
pub use categories::TransactionType;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
