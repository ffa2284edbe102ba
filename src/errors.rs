//! Unified error type for the delivery ordering core.
//!
//! Every fallible operation returns [`Result`]. Variants stay distinguishable so callers
//! can tell a failed migration from a missing seed reference or a timed-out query.

use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

/// All errors produced by the crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// What went wrong
        message: String,
    },

    /// A query or statement failed
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    /// Probing the store or applying migrations failed during startup
    #[error("Database initialization failed: {source}")]
    Initialization {
        /// Underlying database failure
        #[source]
        source: DbErr,
    },

    /// A seed step failed; the whole seed transaction was rolled back
    #[error("Seeding {step} failed: {source}")]
    Seed {
        /// Seed step (table) that failed
        step: &'static str,
        /// Underlying failure
        #[source]
        source: Box<Error>,
    },

    /// A seed fixture references a row that does not exist
    #[error("Seed fixture for {step} references missing {reference}")]
    SeedReference {
        /// Seed step holding the dangling reference
        step: &'static str,
        /// Human readable description of the missing row
        reference: String,
    },

    /// A document line item carries an unusable weight or quantity
    #[error("Invalid line item '{item}': {reason}")]
    InvalidLineItem {
        /// Item name as submitted
        item: String,
        /// Why it was rejected
        reason: String,
    },

    /// No document carries the given public identifier
    #[error("Document not found: {document_id}")]
    DocumentNotFound {
        /// Public document identifier that was looked up
        document_id: Uuid,
    },

    /// Password hashing or verification failed
    #[error("Password hashing error: {message}")]
    PasswordHash {
        /// Message from the hasher
        message: String,
    },

    /// A store call did not finish before its deadline
    #[error("Operation '{operation}' timed out after {seconds}s")]
    Timeout {
        /// Operation that was cancelled
        operation: &'static str,
        /// Deadline that elapsed
        seconds: u64,
    },

    /// Filesystem access failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
