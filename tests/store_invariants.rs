//! Store Invariant Tests
//!
//! - Ids are fresh, increasing and never reused
//! - `(name, venue)` is unique, excluding the record's own id on update
//! - Delete is idempotent and hands the removed record to one caller
//! - Search is exact-match; an empty filter equals the full listing
//! - Concurrent creates never lose or share ids

use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

use foods::store::{Food, FoodFilter, FoodRepository, InMemoryFoodStore, NewFood, StoreError};

// =============================================================================
// Helper Functions
// =============================================================================

fn pizza_and_burger() -> InMemoryFoodStore {
    let store = InMemoryFoodStore::new();
    store.create(NewFood::new("Pizza", "Yummm", "Domino's")).unwrap();
    store.create(NewFood::new("Burger", "Wow", "Relish")).unwrap();
    store
}

fn ids(foods: &[Food]) -> HashSet<u64> {
    foods.iter().map(|f| f.id).collect()
}

// =============================================================================
// Id Assignment Tests
// =============================================================================

/// Every create returns an id above all previous ones, and get returns the
/// stored input under that id.
#[test]
fn test_create_assigns_increasing_ids() {
    let store = InMemoryFoodStore::new();
    let mut last = 0;

    for i in 0..50 {
        let input = NewFood::new(format!("Dish {}", i), "desc", "Venue");
        let id = store.create(input.clone()).unwrap();
        assert!(id > last);
        assert_eq!(store.get(id).unwrap(), Some(Food::with_id(id, input)));
        last = id;
    }
}

/// Ids freed by delete are never handed out again.
#[test]
fn test_ids_not_reused_after_delete() {
    let store = InMemoryFoodStore::new();
    let mut seen = HashSet::new();

    for round in 0..10 {
        let id = store
            .create(NewFood::new("Soup", format!("round {}", round), "Kitchen"))
            .unwrap();
        assert!(seen.insert(id), "id {} was reused", id);
        store.delete(id).unwrap();
    }
}

// =============================================================================
// Uniqueness Tests
// =============================================================================

/// Same `(name, venue)` twice: success then AlreadyExists, size stays 1.
#[test]
fn test_duplicate_pair_rejected() {
    let store = InMemoryFoodStore::new();

    assert!(store.create(NewFood::new("Pizza", "a", "Domino's")).is_ok());
    let result = store.create(NewFood::new("Pizza", "b", "Domino's"));

    assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
    assert_eq!(store.len().unwrap(), 1);
}

/// Changing only the description never collides with the record itself.
#[test]
fn test_update_description_only() {
    let store = pizza_and_burger();
    let mut pizza = store.find(&FoodFilter::by_name("Pizza")).unwrap().remove(0);

    for i in 0..5 {
        pizza.description = format!("version {}", i);
        store.update(&pizza).unwrap();
    }

    assert_eq!(store.get(pizza.id).unwrap().unwrap().description, "version 4");
    assert_eq!(store.len().unwrap(), 2);
}

/// A rejected update leaves the stored record untouched.
#[test]
fn test_conflicting_update_is_atomic() {
    let store = pizza_and_burger();
    let burger = store.find(&FoodFilter::by_name("Burger")).unwrap().remove(0);

    let clash = Food {
        name: "Pizza".to_string(),
        venue: "Domino's".to_string(),
        ..burger.clone()
    };
    assert!(matches!(
        store.update(&clash),
        Err(StoreError::AlreadyExists { .. })
    ));
    assert_eq!(store.get(burger.id).unwrap(), Some(burger));
}

/// Update never creates records.
#[test]
fn test_update_unknown_id() {
    let store = pizza_and_burger();
    let ghost = Food::with_id(99, NewFood::new("Ghost", "", "Nowhere"));

    assert_eq!(store.update(&ghost), Err(StoreError::NotFound(99)));
    assert_eq!(store.get(99).unwrap(), None);
    assert_eq!(store.len().unwrap(), 2);
}

// =============================================================================
// Delete Tests
// =============================================================================

#[test]
fn test_delete_twice_is_noop() {
    let store = pizza_and_burger();

    store.delete(1).unwrap();
    assert_eq!(store.get(1).unwrap(), None);
    store.delete(1).unwrap();
    assert_eq!(store.get(1).unwrap(), None);

    assert_eq!(store.len().unwrap(), 1);
}

#[test]
fn test_delete_unknown_id() {
    let store = pizza_and_burger();
    store.delete(1234).unwrap();
    assert_eq!(store.len().unwrap(), 2);
}

// =============================================================================
// Search Tests
// =============================================================================

#[test]
fn test_find_by_name() {
    let store = pizza_and_burger();
    let found = store.find(&FoodFilter::by_name("Pizza")).unwrap();

    assert_eq!(found.len(), 1);
    assert_eq!(found[0].name, "Pizza");
    assert_eq!(found[0].description, "Yummm");
    assert_eq!(found[0].venue, "Domino's");
}

#[test]
fn test_empty_filter_equals_get_all() {
    let store = pizza_and_burger();
    let all = store.get_all().unwrap();
    let found = store.find(&FoodFilter::default()).unwrap();

    assert_eq!(ids(&all), ids(&found));
    assert_eq!(all.len(), 2);
}

#[test]
fn test_find_without_matches() {
    let store = pizza_and_burger();
    let filter = FoodFilter {
        name: Some("Pizza".to_string()),
        description: Some("Wow".to_string()),
        venue: None,
    };
    assert!(store.find(&filter).unwrap().is_empty());
}

// =============================================================================
// Concurrency Tests
// =============================================================================

/// N threads create pairwise-distinct foods at once: N records, N ids.
#[test]
fn test_concurrent_creates_get_distinct_ids() {
    const THREADS: usize = 16;
    const PER_THREAD: usize = 50;

    let store = Arc::new(InMemoryFoodStore::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..PER_THREAD)
                    .map(|i| {
                        store
                            .create(NewFood::new(format!("dish-{}-{}", t, i), "", "Venue"))
                            .unwrap()
                    })
                    .collect::<Vec<u64>>()
            })
        })
        .collect();

    let mut all_ids = HashSet::new();
    for handle in handles {
        for id in handle.join().unwrap() {
            assert!(all_ids.insert(id), "id {} assigned twice", id);
        }
    }

    assert_eq!(all_ids.len(), THREADS * PER_THREAD);
    assert_eq!(store.len().unwrap(), THREADS * PER_THREAD);
    assert_eq!(all_ids.iter().max().copied(), Some((THREADS * PER_THREAD) as u64));
}

/// Racing creates of the same pair: exactly one wins.
#[test]
fn test_concurrent_duplicates_single_winner() {
    const THREADS: usize = 12;

    let store = Arc::new(InMemoryFoodStore::new());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.create(NewFood::new("Pizza", format!("attempt {}", t), "Domino's"))
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    let winners = results.iter().filter(|r| r.is_ok()).count();

    assert_eq!(winners, 1);
    assert!(results
        .iter()
        .filter_map(|r| r.as_ref().err())
        .all(|e| matches!(e, StoreError::AlreadyExists { .. })));
    assert_eq!(store.len().unwrap(), 1);
}

/// Racing deletes of one record: exactly one caller gets it back.
#[test]
fn test_concurrent_deletes_single_winner() {
    const THREADS: usize = 8;

    let store = Arc::new(pizza_and_burger());
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let store = Arc::clone(&store);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                store.delete(1).unwrap()
            })
        })
        .collect();

    let removed: Vec<Food> = handles
        .into_iter()
        .filter_map(|h| h.join().unwrap())
        .collect();

    assert_eq!(removed.len(), 1);
    assert_eq!(removed[0].name, "Pizza");
    assert_eq!(store.len().unwrap(), 1);
}

/// Readers running next to writers only ever see whole records.
#[test]
fn test_readers_during_writes() {
    let store = Arc::new(InMemoryFoodStore::new());

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for i in 0..200 {
                let id = store
                    .create(NewFood::new(format!("n{}", i), format!("d{}", i), format!("v{}", i)))
                    .unwrap();
                if i % 3 == 0 {
                    store.delete(id).unwrap();
                }
            }
        })
    };

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let store = Arc::clone(&store);
            thread::spawn(move || {
                for _ in 0..200 {
                    for food in store.get_all().unwrap() {
                        let suffix = &food.name[1..];
                        assert_eq!(food.description, format!("d{}", suffix));
                        assert_eq!(food.venue, format!("v{}", suffix));
                    }
                }
            })
        })
        .collect();

    writer.join().unwrap();
    for reader in readers {
        reader.join().unwrap();
    }

    // 200 created, every third (i = 0, 3, ..., 198) deleted
    assert_eq!(store.len().unwrap(), 200 - 67);
}
