//! Database error types.
//!
//! This module provides abstracted error types for database operations.
//! It uses miette for fancy diagnostic output and thiserror for derive macros.
//! The error types are storage-backend agnostic.
//!
//! A missing row is not an error: lookups return `Option` and the HTTP layer
//! maps absence to 404. Every variant here means the store itself failed.

use miette::Diagnostic;
use thiserror::Error;

/// Database operation errors.
#[derive(Error, Diagnostic, Debug)]
pub enum DbError {
    #[error("Database error: {message}")]
    #[diagnostic(code(roster::db::database_error))]
    Database { message: String },

    #[error("Connection error: {message}")]
    #[diagnostic(code(roster::db::connection_error))]
    Connection { message: String },

    #[error("Migration error: {message}")]
    #[diagnostic(code(roster::db::migration_error))]
    Migration { message: String },
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;
