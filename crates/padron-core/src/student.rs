//! The [`Student`] record and its fixed-capacity name fields.
//!
//! A student is a pair of bounded text fields plus a document number.
//! Field storage is fixed at creation and never resizes: names are held
//! inline in a [`BoundedName`], truncated to [`NAME_CAPACITY`] bytes.

use std::fmt;

use smallvec::SmallVec;

/// Maximum number of bytes stored per name field.
///
/// Longer input is silently truncated at construction (backing off to a
/// `char` boundary so the stored bytes stay valid UTF-8). There is no
/// stored terminator — slices carry their own length.
pub const NAME_CAPACITY: usize = 19;

/// A fixed-capacity text field.
///
/// The inline capacity of the backing `SmallVec` equals the field limit,
/// so a name never spills to the heap and never reallocates after
/// construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedName {
    bytes: SmallVec<[u8; NAME_CAPACITY]>,
}

impl BoundedName {
    /// Create a name from arbitrary caller text, truncating to
    /// [`NAME_CAPACITY`] bytes.
    ///
    /// Truncation never splits a multi-byte `char`: the cut point backs
    /// off to the nearest boundary at or below the capacity.
    pub fn new(text: &str) -> Self {
        let mut end = text.len().min(NAME_CAPACITY);
        while !text.is_char_boundary(end) {
            end -= 1;
        }
        Self {
            bytes: SmallVec::from_slice(text[..end].as_bytes()),
        }
    }

    /// The stored text.
    pub fn as_str(&self) -> &str {
        // Construction truncates on char boundaries, so the stored bytes
        // are always valid UTF-8.
        std::str::from_utf8(&self.bytes).unwrap_or("")
    }

    /// Stored length in bytes (at most [`NAME_CAPACITY`]).
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the field is empty.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl fmt::Display for BoundedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for BoundedName {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

/// One student record: a name pair plus a document number.
///
/// Fields are set exactly once at construction and are read-only
/// thereafter. Stores (`padron-store`) own `Student` values and hand out
/// shared references; callers never mutate a record in place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Student {
    first_name: BoundedName,
    last_name: BoundedName,
    document: u32,
}

impl Student {
    /// Create a record, truncating each name to [`NAME_CAPACITY`] bytes.
    pub fn new(first_name: &str, last_name: &str, document: u32) -> Self {
        Self {
            first_name: BoundedName::new(first_name),
            last_name: BoundedName::new(last_name),
            document,
        }
    }

    /// The student's first name (post-truncation).
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// The student's last name (post-truncation).
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// The student's identification document number.
    pub fn document(&self) -> u32 {
        self.document
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.first_name, self.last_name, self.document
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn short_name_stored_verbatim() {
        let name = BoundedName::new("Natalia");
        assert_eq!(name.as_str(), "Natalia");
        assert_eq!(name.len(), 7);
    }

    #[test]
    fn long_name_truncated_to_capacity() {
        let name = BoundedName::new("abcdefghijklmnopqrstuvwxyz");
        assert_eq!(name.len(), NAME_CAPACITY);
        assert_eq!(name.as_str(), "abcdefghijklmnopqrs");
    }

    #[test]
    fn exactly_capacity_name_kept_whole() {
        let text = "a".repeat(NAME_CAPACITY);
        let name = BoundedName::new(&text);
        assert_eq!(name.as_str(), text);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        // 18 ASCII bytes followed by a 2-byte char: the char straddles
        // the 19-byte cut and must be dropped whole.
        let text = format!("{}é", "a".repeat(18));
        let name = BoundedName::new(&text);
        assert_eq!(name.len(), 18);
        assert_eq!(name.as_str(), "a".repeat(18));
    }

    #[test]
    fn empty_name_is_empty() {
        let name = BoundedName::new("");
        assert!(name.is_empty());
        assert_eq!(name.as_str(), "");
    }

    #[test]
    fn student_accessors_round_trip() {
        let s = Student::new("Natalia", "Borbon", 42_935_757);
        assert_eq!(s.first_name(), "Natalia");
        assert_eq!(s.last_name(), "Borbon");
        assert_eq!(s.document(), 42_935_757);
    }

    #[test]
    fn student_truncates_both_names() {
        let s = Student::new(
            "abcdefghijklmnopqrstuvwxyz",
            "zyxwvutsrqponmlkjihgfedcba",
            1,
        );
        assert_eq!(s.first_name().len(), NAME_CAPACITY);
        assert_eq!(s.last_name().len(), NAME_CAPACITY);
    }

    #[test]
    fn display_formats_name_and_document() {
        let s = Student::new("Juan", "Perez", 12_345_678);
        assert_eq!(s.to_string(), "Juan Perez (12345678)");
    }

    proptest! {
        #[test]
        fn stored_name_never_exceeds_capacity(text in "\\PC{0,64}") {
            let name = BoundedName::new(&text);
            prop_assert!(name.len() <= NAME_CAPACITY);
            // The stored text is always a prefix of the input.
            prop_assert!(text.starts_with(name.as_str()));
        }

        #[test]
        fn names_within_capacity_survive_intact(text in "[A-Za-z]{0,19}") {
            let name = BoundedName::new(&text);
            prop_assert_eq!(name.as_str(), text);
        }
    }
}
