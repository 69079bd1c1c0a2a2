//! In-memory store
//!
//! Three tables (lecturers, subjects, subject-lecturer links) behind one
//! RwLock. Rows keep insertion order, which is the order every listing and
//! association lookup returns.

use parking_lot::RwLock;

use crate::error::{Result, SchedulerError};
use crate::model::{Lecturer, Subject};

use super::{Fixtures, Store};

/// A subject-lecturer association row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Link {
    subject_id: u32,
    lecturer_id: u32,
}

#[derive(Debug, Default)]
struct Tables {
    lecturers: Vec<Lecturer>,
    subjects: Vec<Subject>,
    links: Vec<Link>,
    next_lecturer_id: u32,
    next_subject_id: u32,
}

/// Store backed by in-process tables
///
/// ## Concurrency:
/// - Sessions only read, so lookups take the read lock and run in parallel
/// - Inserts (seeding) take the write lock
#[derive(Debug, Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from fixtures
    ///
    /// Lecturers named by a subject are linked by exact name; names with no
    /// matching lecturer are skipped.
    pub fn from_fixtures(fixtures: &Fixtures) -> Result<Self> {
        let store = Self::new();

        for lecturer in &fixtures.lecturers {
            store.add_lecturer(lecturer.name.as_str());
        }

        for entry in &fixtures.subjects {
            let subject = store.add_subject(&entry.short_name, &entry.name, entry.enrolled);

            for name in entry.lecturers.iter().filter_map(|l| l.name.as_deref()) {
                match store.find_lecturer_by_exact_name(name)? {
                    Some(lecturer) => store.link(&subject, &lecturer)?,
                    None => tracing::debug!(
                        "Skipping unknown lecturer '{}' for subject {}",
                        name,
                        subject.code
                    ),
                }
            }
        }

        tracing::debug!(
            "Seeded store with {} lecturers and {} subjects",
            store.lecturer_count(),
            store.subject_count()
        );

        Ok(store)
    }

    /// Insert a lecturer, assigning the next id
    pub fn add_lecturer(&self, name: impl Into<String>) -> Lecturer {
        let mut tables = self.tables.write();
        tables.next_lecturer_id += 1;
        let lecturer = Lecturer {
            id: tables.next_lecturer_id,
            name: name.into(),
        };
        tables.lecturers.push(lecturer.clone());
        lecturer
    }

    /// Insert a subject, assigning the next id
    pub fn add_subject(
        &self,
        code: impl Into<String>,
        name: impl Into<String>,
        enrolled: u32,
    ) -> Subject {
        let mut tables = self.tables.write();
        tables.next_subject_id += 1;
        let subject = Subject {
            id: tables.next_subject_id,
            code: code.into(),
            name: name.into(),
            enrolled,
        };
        tables.subjects.push(subject.clone());
        subject
    }

    /// Associate a lecturer with a subject
    ///
    /// Linking the same pair twice is a no-op. Both records must exist.
    pub fn link(&self, subject: &Subject, lecturer: &Lecturer) -> Result<()> {
        let mut tables = self.tables.write();

        if !tables.subjects.iter().any(|s| s.id == subject.id) {
            return Err(SchedulerError::Storage(format!(
                "Unknown subject id {}",
                subject.id
            )));
        }
        if !tables.lecturers.iter().any(|l| l.id == lecturer.id) {
            return Err(SchedulerError::Storage(format!(
                "Unknown lecturer id {}",
                lecturer.id
            )));
        }

        let link = Link {
            subject_id: subject.id,
            lecturer_id: lecturer.id,
        };
        if !tables.links.contains(&link) {
            tables.links.push(link);
        }
        Ok(())
    }

    /// Number of lecturers
    pub fn lecturer_count(&self) -> usize {
        self.tables.read().lecturers.len()
    }

    /// Number of subjects
    pub fn subject_count(&self) -> usize {
        self.tables.read().subjects.len()
    }
}

impl Store for MemoryStore {
    fn find_lecturer_by_exact_name(&self, name: &str) -> Result<Option<Lecturer>> {
        let tables = self.tables.read();
        Ok(tables.lecturers.iter().find(|l| l.name == name).cloned())
    }

    fn find_lecturer_by_partial_name(&self, term: &str) -> Result<Option<Lecturer>> {
        let tables = self.tables.read();
        Ok(tables.lecturers.iter().find(|l| l.name.contains(term)).cloned())
    }

    fn list_all_lecturers(&self) -> Result<Vec<Lecturer>> {
        Ok(self.tables.read().lecturers.clone())
    }

    fn find_subjects_for_lecturer(&self, lecturer: &Lecturer) -> Result<Vec<Subject>> {
        let tables = self.tables.read();
        let linked = |subject: &&Subject| {
            tables.links.contains(&Link {
                subject_id: subject.id,
                lecturer_id: lecturer.id,
            })
        };
        Ok(tables.subjects.iter().filter(linked).cloned().collect())
    }

    fn find_subject_by_exact_code_or_name(&self, term: &str) -> Result<Option<Subject>> {
        let tables = self.tables.read();
        let by_code = tables.subjects.iter().find(|s| s.code == term);
        let found = by_code.or_else(|| tables.subjects.iter().find(|s| s.name == term));
        Ok(found.cloned())
    }

    fn find_subject_by_partial_name(&self, term: &str) -> Result<Option<Subject>> {
        let tables = self.tables.read();
        Ok(tables.subjects.iter().find(|s| s.name.contains(term)).cloned())
    }

    fn list_all_subjects(&self) -> Result<Vec<Subject>> {
        Ok(self.tables.read().subjects.clone())
    }

    fn find_lecturers_for_subject(&self, subject: &Subject) -> Result<Vec<Lecturer>> {
        let tables = self.tables.read();
        let linked = |lecturer: &&Lecturer| {
            tables.links.contains(&Link {
                subject_id: subject.id,
                lecturer_id: lecturer.id,
            })
        };
        Ok(tables.lecturers.iter().filter(linked).cloned().collect())
    }
}
