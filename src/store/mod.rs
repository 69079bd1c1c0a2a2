//! Store Module
//!
//! The data access layer consumed by sessions.
//!
//! ## Responsibilities
//! - Exact and partial lookups for lecturers and subjects
//! - Listing all records of a kind, in store order
//! - Resolving the subject-lecturer association in both directions
//!
//! Every call is synchronous and returns `Ok(None)` on a miss. `Err` means
//! the store itself failed; callers decide whether that is "not found" or a
//! user-visible retrieval failure.
//!
//! The store is shared read-mostly between all sessions, so implementations
//! must be `Send + Sync` and do their own locking.

mod fixtures;
mod memory;

pub use fixtures::{Fixtures, LecturerFixture, LecturerRef, SubjectFixture};
pub use memory::MemoryStore;

use crate::error::Result;
use crate::model::{Lecturer, Subject};

/// Read access to lecturers, subjects and their association
pub trait Store: Send + Sync {
    /// Lecturer whose name equals `name`
    fn find_lecturer_by_exact_name(&self, name: &str) -> Result<Option<Lecturer>>;

    /// First lecturer whose name contains `term`
    fn find_lecturer_by_partial_name(&self, term: &str) -> Result<Option<Lecturer>>;

    /// All lecturers in store order
    fn list_all_lecturers(&self) -> Result<Vec<Lecturer>>;

    /// Subjects taught by `lecturer`
    fn find_subjects_for_lecturer(&self, lecturer: &Lecturer) -> Result<Vec<Subject>>;

    /// Subject whose code equals `term`, else whose name equals `term`
    fn find_subject_by_exact_code_or_name(&self, term: &str) -> Result<Option<Subject>>;

    /// First subject whose name contains `term`
    fn find_subject_by_partial_name(&self, term: &str) -> Result<Option<Subject>>;

    /// All subjects in store order
    fn list_all_subjects(&self) -> Result<Vec<Subject>>;

    /// Lecturers teaching `subject`
    fn find_lecturers_for_subject(&self, subject: &Subject) -> Result<Vec<Lecturer>>;
}
