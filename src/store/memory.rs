//! In-memory food store
//!
//! Records, the `(name, venue)` index and the id sequence live in one
//! `FoodTable` behind a single `RwLock`, so a writer always sees and
//! changes all three together.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use super::errors::{StoreError, StoreResult};
use super::food::{Food, FoodFilter, NewFood};
use super::FoodRepository;

/// State guarded by the store lock
#[derive(Debug, Default)]
struct FoodTable {
    /// Records keyed by id; BTreeMap keeps listings in id order
    foods: BTreeMap<u64, Food>,
    /// `(name, venue)` -> owning id
    keys: HashMap<(String, String), u64>,
    /// Last id handed out
    seq: u64,
}

impl FoodTable {
    /// Fails if `key` belongs to a record other than `id`
    fn check_unique(&self, key: &(String, String), id: Option<u64>) -> StoreResult<()> {
        match self.keys.get(key) {
            Some(owner) if Some(*owner) != id => Err(StoreError::AlreadyExists {
                name: key.0.clone(),
                venue: key.1.clone(),
            }),
            _ => Ok(()),
        }
    }

    fn next_id(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }
}

/// Thread-safe in-memory food store
#[derive(Debug, Default)]
pub struct InMemoryFoodStore {
    table: RwLock<FoodTable>,
}

impl InMemoryFoodStore {
    /// Create an empty store. The first id assigned is 1.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding the demo records (ids 1, 2, 3)
    pub fn seeded() -> StoreResult<Self> {
        let store = Self::new();
        for food in seed_foods() {
            store.create(food)?;
        }
        Ok(store)
    }
}

/// Demo records loaded when seeding is enabled
pub fn seed_foods() -> Vec<NewFood> {
    vec![
        NewFood::new("Pizza", "Yummm!", "Domino's Pizza"),
        NewFood::new("Burger", "Wow!", "Relish"),
        NewFood::new("Pita", "Dang!", "Pita Pit"),
    ]
}

impl FoodRepository for InMemoryFoodStore {
    fn get(&self, id: u64) -> StoreResult<Option<Food>> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("get"))?;
        Ok(table.foods.get(&id).cloned())
    }

    fn get_all(&self) -> StoreResult<Vec<Food>> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("get_all"))?;
        Ok(table.foods.values().cloned().collect())
    }

    fn find(&self, filter: &FoodFilter) -> StoreResult<Vec<Food>> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("find"))?;
        Ok(table
            .foods
            .values()
            .filter(|food| filter.matches(food))
            .cloned()
            .collect())
    }

    fn create(&self, food: NewFood) -> StoreResult<u64> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("create"))?;

        let key = (food.name.clone(), food.venue.clone());
        table.check_unique(&key, None)?;

        let id = table.next_id();
        table.keys.insert(key, id);
        table.foods.insert(id, Food::with_id(id, food));
        Ok(id)
    }

    fn update(&self, food: &Food) -> StoreResult<()> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("update"))?;

        let previous_key = table
            .foods
            .get(&food.id)
            .map(Food::unique_key)
            .ok_or(StoreError::NotFound(food.id))?;

        let key = food.unique_key();
        table.check_unique(&key, Some(food.id))?;

        if previous_key != key {
            table.keys.remove(&previous_key);
            table.keys.insert(key, food.id);
        }
        table.foods.insert(food.id, food.clone());
        Ok(())
    }

    fn delete(&self, id: u64) -> StoreResult<Option<Food>> {
        let mut table = self
            .table
            .write()
            .map_err(|_| StoreError::LockPoisoned("delete"))?;

        let removed = table.foods.remove(&id);
        if let Some(food) = &removed {
            table.keys.remove(&food.unique_key());
        }
        Ok(removed)
    }

    fn len(&self) -> StoreResult<usize> {
        let table = self
            .table
            .read()
            .map_err(|_| StoreError::LockPoisoned("len"))?;
        Ok(table.foods.len())
    }
}
