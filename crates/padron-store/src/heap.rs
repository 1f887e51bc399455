//! Unbounded heap-backed storage (Policy B).
//!
//! [`HeapStore`] allocates fresh storage per record and addresses it by
//! a monotonic [`RecordId`]. Capacity is bounded only by memory; the one
//! creation failure is [`StoreError::AllocationFailed`], surfaced from a
//! failed capacity reservation. Ids are never reused, so a released id
//! reliably reports [`StoreError::UnknownHandle`].

use indexmap::IndexMap;
use padron_core::Student;

use crate::error::StoreError;
use crate::handle::RecordId;
use crate::store::StudentStore;

/// Unbounded record store keyed by monotonic ids.
///
/// Insertion order is preserved, so iteration and removal behaviour stay
/// deterministic across runs.
pub struct HeapStore {
    records: IndexMap<RecordId, Student>,
    next_id: u64,
}

impl HeapStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            next_id: 0,
        }
    }

    /// Iterate live records in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordId, &Student)> {
        self.records.iter().map(|(&id, s)| (id, s))
    }
}

impl Default for HeapStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStore for HeapStore {
    type Handle = RecordId;

    fn create(
        &mut self,
        first_name: &str,
        last_name: &str,
        document: u32,
    ) -> Result<RecordId, StoreError> {
        // Reserve before constructing so a failed creation leaves no
        // partial record observable.
        self.records
            .try_reserve(1)
            .map_err(|_| StoreError::AllocationFailed)?;
        let id = RecordId(self.next_id);
        self.next_id += 1;
        self.records
            .insert(id, Student::new(first_name, last_name, document));
        Ok(id)
    }

    fn get(&self, handle: RecordId) -> Result<&Student, StoreError> {
        self.records.get(&handle).ok_or(StoreError::UnknownHandle)
    }

    fn release(&mut self, handle: RecordId) -> Result<(), StoreError> {
        // shift_remove keeps creation order for the survivors.
        self.records
            .shift_remove(&handle)
            .map(|_| ())
            .ok_or(StoreError::UnknownHandle)
    }

    fn len(&self) -> usize {
        self.records.len()
    }
}
