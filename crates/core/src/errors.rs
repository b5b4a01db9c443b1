//! Core error types for the personal finance manager.
//!
//! This module defines database-agnostic error types. Storage-specific
//! errors are converted to these types by the storage layer. Every error is
//! terminal and synchronous: the core never retries or swallows a failure,
//! and a failed operation leaves the entity it targeted unchanged.

use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the finance core.
///
/// The controller layer maps each variant to a user-visible status:
/// `NotFound` → 404, `Conflict` → 409, `Forbidden` → 403,
/// `Validation` → 400, `Repository` → 500.
#[derive(Error, Debug)]
pub enum Error {
    /// The entity is absent or not owned by the caller.
    #[error("{0}")]
    NotFound(String),

    /// A uniqueness rule was violated (duplicate category name).
    #[error("{0}")]
    Conflict(String),

    /// The caller attempted an operation it is never allowed to perform.
    #[error("{0}")]
    Forbidden(String),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A fault reported by the persistence layer through the repository seam.
    #[error("Repository error: {0}")]
    Repository(String),
}

/// Validation failures, all mapped to a bad-request status by the caller.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("{0}")]
    InvalidDate(String),

    #[error("Start date must be before target date")]
    InvalidDateRange,

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid month {0}. Month must be between 1 and 12")]
    InvalidMonth(i32),

    #[error("Cannot delete category '{0}' while transactions reference it")]
    CategoryInUse(String),
}
