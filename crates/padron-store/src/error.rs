//! Store-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during store operations.
///
/// All failures are returned as values to the immediate caller; nothing
/// here is fatal to the process, and no partial record is left observable
/// after a failed creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreError {
    /// Pooled creation found no free slot. The pool never grows and
    /// never evicts; callers may release a record and retry.
    PoolExhausted {
        /// Total number of slots in the pool.
        capacity: usize,
    },
    /// Heap-backed creation could not obtain storage.
    AllocationFailed,
    /// A handle whose slot has been released and recycled since the
    /// handle was issued.
    StaleHandle {
        /// The generation encoded in the handle.
        handle_generation: u32,
        /// The slot's current generation.
        slot_generation: u32,
    },
    /// A handle that does not refer to any record in this store
    /// (out-of-range slot index, or a released/never-issued record id).
    UnknownHandle,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PoolExhausted { capacity } => {
                write!(f, "pool exhausted: all {capacity} slots occupied")
            }
            Self::AllocationFailed => write!(f, "record allocation failed"),
            Self::StaleHandle {
                handle_generation,
                slot_generation,
            } => {
                write!(
                    f,
                    "stale handle: generation {handle_generation}, slot is at {slot_generation}"
                )
            }
            Self::UnknownHandle => write!(f, "handle does not refer to a record in this store"),
        }
    }
}

impl Error for StoreError {}
