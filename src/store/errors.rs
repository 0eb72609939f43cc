//! # Store Errors
//!
//! Error types for the food store.

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Food store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Another record already holds this `(name, venue)` pair
    #[error("the food '{name}' from '{venue}' already exists")]
    AlreadyExists { name: String, venue: String },

    /// Update targeted an id that is not stored
    #[error("the food with id {0} does not exist")]
    NotFound(u64),

    /// A writer panicked while holding the lock
    #[error("store lock poisoned during {0}")]
    LockPoisoned(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_already_exists_message() {
        let err = StoreError::AlreadyExists {
            name: "Pizza".to_string(),
            venue: "Domino's Pizza".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "the food 'Pizza' from 'Domino's Pizza' already exists"
        );
    }

    #[test]
    fn test_poisoned_lock_names_operation() {
        assert_eq!(
            StoreError::LockPoisoned("create").to_string(),
            "store lock poisoned during create"
        );
    }
}
