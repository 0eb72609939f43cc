//! Food store subsystem
//!
//! Owns every Food record and the id sequence behind a single
//! readers-writer lock.
//!
//! # Invariants
//!
//! - Ids are assigned from a strictly increasing counter, never reused
//! - No two records share the same `(name, venue)` pair
//! - Uniqueness check, id assignment and mutation happen in one write section
//! - Unknown ids and empty result sets are values, not errors

mod errors;
mod food;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use food::{Food, FoodFilter, NewFood};
pub use memory::{seed_foods, InMemoryFoodStore};

/// Storage operations available for Food records.
///
/// Every method is safe to call from many threads at once.
pub trait FoodRepository: Send + Sync {
    /// Look up a record by id.
    fn get(&self, id: u64) -> StoreResult<Option<Food>>;

    /// Every stored record, ordered by ascending id.
    fn get_all(&self) -> StoreResult<Vec<Food>>;

    /// Records matching every non-empty field of the filter exactly.
    fn find(&self, filter: &FoodFilter) -> StoreResult<Vec<Food>>;

    /// Store a new record and return its freshly assigned id.
    fn create(&self, food: NewFood) -> StoreResult<u64>;

    /// Replace the record with `food.id` wholesale.
    fn update(&self, food: &Food) -> StoreResult<()>;

    /// Remove a record and return it. Unknown ids are ignored and yield
    /// `None`.
    fn delete(&self, id: u64) -> StoreResult<Option<Food>>;

    /// Number of stored records.
    fn len(&self) -> StoreResult<usize>;

    fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }
}
