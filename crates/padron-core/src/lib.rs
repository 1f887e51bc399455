//! Core record types for the Padron student registry.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Student`] record and its fixed-capacity [`BoundedName`] field
//! type. Storage policies live in `padron-store`; the wire encoding
//! lives in `padron-json`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod student;

pub use student::{BoundedName, Student, NAME_CAPACITY};
