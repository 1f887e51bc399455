//! Record handles.
//!
//! A handle is the caller-facing name of a stored record. It is never a
//! bare address: pooled handles are a slot index plus the slot generation
//! at issue time (so staleness is an O(1) check), heap handles are an
//! opaque monotonic id.

use std::fmt;

/// Handle into a [`PoolStore`](crate::PoolStore) slot.
///
/// Carries the slot's generation at creation time. Releasing the slot
/// bumps its generation, invalidating every outstanding handle to the
/// old occupant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[must_use]
pub struct SlotHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl SlotHandle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// The slot index within the pool.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// The slot generation this handle was issued against.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for SlotHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SlotHandle(slot={}, gen={})", self.index, self.generation)
    }
}

/// Identifies a record in a [`HeapStore`](crate::HeapStore).
///
/// Ids are allocated from a monotonic counter and never reused, so a
/// released id can be detected instead of silently resolving to a newer
/// record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[must_use]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
