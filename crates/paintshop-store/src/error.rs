//! # Store Error Types
//!
//! ## Error Flow
//! ```text
//! Repository failure
//!      │
//!      ▼
//! StoreError (this module)
//!      │
//!      ▼
//! ApiError (storefront app) → frontend message
//! ```

use std::sync::PoisonError;

use thiserror::Error;

/// Repository operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Entity not found.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// An id that must be unique is already taken.
    ///
    /// ## When This Occurs
    /// - Seeding a catalog with two products sharing an id
    #[error("Duplicate {field}: '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// A writer panicked while holding the storage lock.
    #[error("Storage lock poisoned: {0}")]
    LockPoisoned(String),
}

impl StoreError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: impl Into<String>, id: impl Into<String>) -> Self {
        StoreError::NotFound {
            entity: entity.into(),
            id: id.into(),
        }
    }

    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        StoreError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }
}

impl<T> From<PoisonError<T>> for StoreError {
    fn from(err: PoisonError<T>) -> Self {
        StoreError::LockPoisoned(err.to_string())
    }
}

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;
