//! The store trait seam.

use std::fmt;

use padron_core::Student;

use crate::error::StoreError;

/// Common interface over the two allocation policies.
///
/// The policy is fixed when the concrete store is constructed
/// ([`PoolStore`](crate::PoolStore) or [`HeapStore`](crate::HeapStore));
/// code written against this trait is policy-agnostic.
///
/// A failed [`create`](Self::create) leaves no partial record observable.
/// [`release`](Self::release) is the explicit free operation: after it
/// returns `Ok`, the handle is dead and every later use of it fails.
pub trait StudentStore {
    /// The handle type naming records in this store.
    type Handle: Copy + fmt::Debug;

    /// Create a record from caller text and a document number.
    ///
    /// Names longer than [`padron_core::NAME_CAPACITY`] bytes are
    /// silently truncated by the record type.
    fn create(
        &mut self,
        first_name: &str,
        last_name: &str,
        document: u32,
    ) -> Result<Self::Handle, StoreError>;

    /// Resolve a handle to the stored record.
    fn get(&self, handle: Self::Handle) -> Result<&Student, StoreError>;

    /// Release the record named by `handle`, making its storage reusable.
    fn release(&mut self, handle: Self::Handle) -> Result<(), StoreError>;

    /// Number of live records.
    fn len(&self) -> usize;

    /// Whether the store holds no live records.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
