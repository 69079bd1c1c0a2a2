//! Search Resolver
//!
//! Resolves a free-text term to at most one record in two phases:
//!
//! | Kind     | Phase 1 (exact)          | Phase 2 (partial)      |
//! |----------|--------------------------|------------------------|
//! | Lecturer | name                     | name contains term     |
//! | Subject  | code, then name          | name contains term     |
//!
//! Phase 2 only runs when phase 1 misses. Store faults in either phase are
//! logged and count as a miss, so callers see only "found" or "not found".

use crate::error::Result;
use crate::model::{Lecturer, Subject};
use crate::store::Store;

/// Two-phase lookups against a store
pub struct Resolver<'a> {
    store: &'a dyn Store,
}

impl<'a> Resolver<'a> {
    pub fn new(store: &'a dyn Store) -> Self {
        Self { store }
    }

    /// Lecturer named exactly `term`, else the first whose name contains it
    pub fn lecturer(&self, term: &str) -> Option<Lecturer> {
        phase("lecturer", "exact name", self.store.find_lecturer_by_exact_name(term))
            .or_else(|| {
                phase(
                    "lecturer",
                    "partial name",
                    self.store.find_lecturer_by_partial_name(term),
                )
            })
    }

    /// Subject with code or name exactly `term`, else the first whose name contains it
    pub fn subject(&self, term: &str) -> Option<Subject> {
        phase(
            "subject",
            "exact code or name",
            self.store.find_subject_by_exact_code_or_name(term),
        )
        .or_else(|| {
            phase(
                "subject",
                "partial name",
                self.store.find_subject_by_partial_name(term),
            )
        })
    }
}

fn phase<T>(kind: &str, lookup: &str, result: Result<Option<T>>) -> Option<T> {
    match result {
        Ok(found) => found,
        Err(e) => {
            tracing::warn!("{} lookup by {} failed: {}", kind, lookup, e);
            None
        }
    }
}
