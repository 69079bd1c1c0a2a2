//! Data model
//!
//! Records read from the store and forwarded to clients. The core never
//! creates or mutates them; identities are assigned by the store.

/// A lecturer record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lecturer {
    /// Opaque key assigned by the store
    pub id: u32,

    /// Display name (not guaranteed unique)
    pub name: String,
}

/// A subject record
///
/// The associated lecturers are not embedded; they are fetched through
/// [`Store::find_lecturers_for_subject`](crate::store::Store::find_lecturers_for_subject).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subject {
    /// Opaque key assigned by the store
    pub id: u32,

    /// Short code, e.g. `PGR200`
    pub code: String,

    /// Full name
    pub name: String,

    /// Number of enrolled students
    pub enrolled: u32,
}
