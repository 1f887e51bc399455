//! Bounded JSON serialization for Padron student records.
//!
//! Renders a [`padron_core::Student`] into a caller-owned fixed-size
//! byte buffer as exactly
//! `{"nombre":"<first>","apellido":"<last>","documento":<id>}` —
//! fixed key order, no whitespace, unquoted integer. Every write is
//! bounds-checked against the remaining capacity; the serializer never
//! writes past the buffer end and reports either the exact byte count
//! written or [`EncodeError::BufferTooSmall`].
//!
//! # Known limitation
//!
//! Field values are copied verbatim between quotes — embedded `"`, `\`,
//! or control characters are NOT escaped. The wire format is a fixed
//! contract whose field contents are plain names; feeding other text
//! produces invalid JSON.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cursor;
pub mod encode;
pub mod error;

pub use cursor::WriteCursor;
pub use encode::{serialize_student, serialized_len};
pub use error::EncodeError;
