//! Padron: a student registry with pooled record storage and bounded
//! JSON serialization.
//!
//! This is the top-level facade crate that re-exports the public API
//! from the Padron sub-crates. For most users, adding `padron` as a
//! single dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use padron::prelude::*;
//!
//! // Policy A: a bounded pool of pre-allocated slots (default: 2).
//! let mut store = PoolStore::new();
//! let handle = store.create("Natalia", "Borbon", 42935757).unwrap();
//!
//! // Serialize into a caller-owned fixed-size buffer.
//! let mut buf = [0u8; 100];
//! let student = store.get(handle).unwrap();
//! let written = serialize_student(student, &mut buf).unwrap();
//!
//! assert_eq!(written, 61);
//! assert_eq!(
//!     &buf[..written],
//!     br#"{"nombre":"Natalia","apellido":"Borbon","documento":42935757}"#
//! );
//!
//! // Explicit release recycles the slot; the old handle goes stale.
//! store.release(handle).unwrap();
//! assert!(store.get(handle).is_err());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`record`] | `padron-core` | `Student`, `BoundedName`, field capacity |
//! | [`store`] | `padron-store` | `StudentStore`, `PoolStore`, `HeapStore`, handles |
//! | [`json`] | `padron-json` | `WriteCursor`, field encoders, `serialize_student` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Record types (`padron-core`).
///
/// The immutable [`record::Student`] entity and its fixed-capacity
/// [`record::BoundedName`] fields.
pub use padron_core as record;

/// Record storage policies (`padron-store`).
///
/// [`store::PoolStore`] (bounded slot arena) and [`store::HeapStore`]
/// (unbounded keyed storage) behind the [`store::StudentStore`] seam.
pub use padron_store as store;

/// Bounded JSON serialization (`padron-json`).
///
/// [`json::serialize_student`] renders a record into a caller-owned
/// buffer, failing cleanly when the output does not fit.
pub use padron_json as json;

/// Common imports for typical Padron usage.
///
/// ```rust
/// use padron::prelude::*;
/// ```
pub mod prelude {
    pub use padron_core::{BoundedName, Student, NAME_CAPACITY};
    pub use padron_json::{serialize_student, serialized_len, EncodeError, WriteCursor};
    pub use padron_store::{
        HeapStore, PoolStore, RecordId, SlotHandle, StoreError, StudentStore, DEFAULT_SLOTS,
    };
}
