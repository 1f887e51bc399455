//! Record storage for the Padron student registry.
//!
//! Two allocation policies behind one trait seam, chosen once at
//! construction (there is no runtime switch inside either store):
//!
//! - [`PoolStore`] — a bounded arena of pre-allocated slots. Creation
//!   scans for the lowest free slot and fails with
//!   [`StoreError::PoolExhausted`] when none is free. Handles are
//!   generation-scoped: releasing a slot bumps its generation, so stale
//!   handles are rejected rather than aliasing a recycled record.
//! - [`HeapStore`] — unbounded keyed storage; each creation allocates
//!   fresh and is addressed by a monotonic [`RecordId`].
//!
//! Both stores mutate through `&mut self`; exclusive ownership is the
//! concurrency guard. Confine a store to one owner, or wrap it in a lock
//! at the application layer.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod handle;
pub mod heap;
pub mod pool;
pub mod store;

pub use error::StoreError;
pub use handle::{RecordId, SlotHandle};
pub use heap::HeapStore;
pub use pool::{PoolStore, DEFAULT_SLOTS};
pub use store::StudentStore;
