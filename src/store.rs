//! In-memory record store
//!
//! A `RecordStore<T>` owns a keyed collection of records plus the counter
//! that hands out their ids. Both live behind one `Mutex`, so every
//! operation observes the map and the counter in a consistent state.
//!
//! # Invariants
//! - `next_id` starts at [`FIRST_RECORD_ID`] and only ever increases
//! - `next_id` is strictly greater than every stored id
//! - ids are never reused
//!
//! Critical sections are plain in-memory work. Callers must not hold the
//! lock across I/O; the API never hands out the guard, so they can't.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::core_types::{FIRST_RECORD_ID, RecordId};

/// A record that a [`RecordStore`] can hold.
pub trait Record: Clone + Send + 'static {
    /// Payload supplied on create, i.e. the record without its id.
    type Draft;

    /// Build the stored record from its draft and the assigned id.
    fn from_draft(id: RecordId, draft: Self::Draft) -> Self;

    /// Key the record is stored under. Must return the id it was built with.
    fn id(&self) -> RecordId;
}

struct StoreInner<T> {
    records: BTreeMap<RecordId, T>,
    next_id: RecordId,
}

/// Mutex-guarded, monotonically keyed in-memory collection.
pub struct RecordStore<T> {
    inner: Mutex<StoreInner<T>>,
}

impl<T: Record> RecordStore<T> {
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                records: BTreeMap::new(),
                next_id: FIRST_RECORD_ID,
            }),
        }
    }

    /// Acquire the store lock.
    ///
    /// Every mutation is a single insert followed by a counter bump, with no
    /// panicking code in between, so a poisoned lock still guards consistent
    /// state and is safe to recover.
    fn lock(&self) -> MutexGuard<'_, StoreInner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all records. Currently in id order, but callers must not
    /// depend on that.
    pub fn list(&self) -> Vec<T> {
        self.lock().records.values().cloned().collect()
    }

    /// Store a new record under the next id and return it.
    pub fn create(&self, draft: T::Draft) -> T {
        let mut inner = self.lock();
        let id = inner.next_id;
        let record = T::from_draft(id, draft);
        debug_assert_eq!(record.id(), id);
        inner.records.insert(record.id(), record.clone());
        inner.next_id += 1;
        record
    }

    /// Look up a record by id.
    pub fn get(&self, id: RecordId) -> Option<T> {
        self.lock().records.get(&id).cloned()
    }

    /// All records matching `predicate`. Same ordering caveat as [`list`](Self::list).
    pub fn filter<P>(&self, predicate: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        self.lock()
            .records
            .values()
            .filter(|record| predicate(record))
            .cloned()
            .collect()
    }

    pub fn contains(&self, id: RecordId) -> bool {
        self.lock().records.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.lock().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().records.is_empty()
    }

    /// Id the next create will receive.
    #[cfg(test)]
    pub(crate) fn next_id(&self) -> RecordId {
        self.lock().next_id
    }
}

impl<T: Record> Default for RecordStore<T> {
    fn default() -> Self {
        Self::new()
    }
}
