//! Bounded slot-pool storage (Policy A).
//!
//! [`PoolStore`] owns a fixed array of slots allocated in full at
//! construction. Creation scans lowest-index-first for a free slot;
//! when every slot is occupied it fails with
//! [`StoreError::PoolExhausted`] — no growth, no eviction. Releasing a
//! slot bumps its generation so outstanding handles to the old occupant
//! go stale instead of aliasing the next record placed there.

use padron_core::Student;

use crate::error::StoreError;
use crate::handle::SlotHandle;
use crate::store::StudentStore;

/// Default number of pool slots.
pub const DEFAULT_SLOTS: usize = 2;

/// One storage unit within the pool.
struct Slot {
    /// Bumped on release; handles carry the value at issue time.
    generation: u32,
    student: Option<Student>,
}

/// Fixed-capacity record store backed by pre-allocated slots.
pub struct PoolStore {
    slots: Vec<Slot>,
}

impl PoolStore {
    /// Create a pool with [`DEFAULT_SLOTS`] slots.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_SLOTS)
    }

    /// Create a pool with `capacity` slots.
    ///
    /// The slot table is allocated here and never resizes.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            slots.push(Slot {
                generation: 0,
                student: None,
            });
        }
        Self { slots }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Number of currently free slots.
    pub fn free_slots(&self) -> usize {
        self.slots.iter().filter(|s| s.student.is_none()).count()
    }

    /// Resolve a handle to its slot, checking index and generation.
    fn slot(&self, handle: SlotHandle) -> Result<&Slot, StoreError> {
        let slot = self
            .slots
            .get(handle.index as usize)
            .ok_or(StoreError::UnknownHandle)?;
        if slot.generation != handle.generation {
            return Err(StoreError::StaleHandle {
                handle_generation: handle.generation,
                slot_generation: slot.generation,
            });
        }
        Ok(slot)
    }
}

impl Default for PoolStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StudentStore for PoolStore {
    type Handle = SlotHandle;

    fn create(
        &mut self,
        first_name: &str,
        last_name: &str,
        document: u32,
    ) -> Result<SlotHandle, StoreError> {
        // Deterministic scan order: lowest free index wins.
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.student.is_none() {
                slot.student = Some(Student::new(first_name, last_name, document));
                return Ok(SlotHandle::new(index as u32, slot.generation));
            }
        }
        Err(StoreError::PoolExhausted {
            capacity: self.slots.len(),
        })
    }

    fn get(&self, handle: SlotHandle) -> Result<&Student, StoreError> {
        // A matching generation implies the slot is still occupied:
        // release empties the slot and bumps the generation together.
        self.slot(handle)?
            .student
            .as_ref()
            .ok_or(StoreError::UnknownHandle)
    }

    fn release(&mut self, handle: SlotHandle) -> Result<(), StoreError> {
        self.slot(handle)?;
        let slot = &mut self.slots[handle.index as usize];
        slot.student = None;
        slot.generation = slot.generation.wrapping_add(1);
        Ok(())
    }

    fn len(&self) -> usize {
        self.slots.len() - self.free_slots()
    }
}
