//! Shared helpers for network tests

use std::io::{self, Cursor, Write};
use std::sync::Arc;

use scheduler::network::{Session, SessionEnd};
use scheduler::protocol::{read_batch, write_frame, Batch};
use scheduler::{Lecturer, MemoryStore, Result, SchedulerError, Store, Subject};

/// Two lecturers, three subjects; Lilly teaches nothing, PG5100 has no lecturer
pub fn sample_store() -> Arc<MemoryStore> {
    let store = MemoryStore::new();
    let melby = store.add_lecturer("Alexander Melby");
    let birkenes = store.add_lecturer("Vilde Birkenes");
    store.add_lecturer("Lilly Nordahl");

    let algo = store.add_subject("PG4200", "Algoritmer og datastrukturer", 86);
    let design = store.add_subject("PG3300", "Software Design", 94);
    store.add_subject("PG5100", "Enterprise Programmering 1", 0);

    store.link(&algo, &melby).unwrap();
    store.link(&design, &melby).unwrap();
    store.link(&design, &birkenes).unwrap();
    Arc::new(store)
}

/// Encode client lines as consecutive frames
pub fn script(lines: &[&str]) -> Vec<u8> {
    let mut buf = Vec::new();
    for line in lines {
        write_frame(&mut buf, line).unwrap();
    }
    buf
}

/// Split raw server output into batches
pub fn batches(output: Vec<u8>) -> Vec<Batch> {
    let len = output.len() as u64;
    let mut cursor = Cursor::new(output);
    let mut batches = Vec::new();
    while cursor.position() < len {
        batches.push(read_batch(&mut cursor).unwrap());
    }
    batches
}

/// Run a session over scripted input; returns how it ended and every batch sent
pub fn run_session(store: Arc<dyn Store>, lines: &[&str]) -> (SessionEnd, Vec<Batch>) {
    let mut session = Session::new(Cursor::new(script(lines)), Vec::new(), store, "test");
    let end = session.run().unwrap();
    (end, batches(session.into_writer()))
}

/// A store where every call fails
pub struct FailingStore;

fn fault<T>() -> Result<T> {
    Err(SchedulerError::Storage("connection refused".to_string()))
}

impl Store for FailingStore {
    fn find_lecturer_by_exact_name(&self, _name: &str) -> Result<Option<Lecturer>> {
        fault()
    }

    fn find_lecturer_by_partial_name(&self, _term: &str) -> Result<Option<Lecturer>> {
        fault()
    }

    fn list_all_lecturers(&self) -> Result<Vec<Lecturer>> {
        fault()
    }

    fn find_subjects_for_lecturer(&self, _lecturer: &Lecturer) -> Result<Vec<Subject>> {
        fault()
    }

    fn find_subject_by_exact_code_or_name(&self, _term: &str) -> Result<Option<Subject>> {
        fault()
    }

    fn find_subject_by_partial_name(&self, _term: &str) -> Result<Option<Subject>> {
        fault()
    }

    fn list_all_subjects(&self) -> Result<Vec<Subject>> {
        fault()
    }

    fn find_lecturers_for_subject(&self, _subject: &Subject) -> Result<Vec<Lecturer>> {
        fault()
    }
}

/// A MemoryStore whose association lookups fail
pub struct BrokenLinksStore(pub Arc<MemoryStore>);

impl Store for BrokenLinksStore {
    fn find_lecturer_by_exact_name(&self, name: &str) -> Result<Option<Lecturer>> {
        self.0.find_lecturer_by_exact_name(name)
    }

    fn find_lecturer_by_partial_name(&self, term: &str) -> Result<Option<Lecturer>> {
        self.0.find_lecturer_by_partial_name(term)
    }

    fn list_all_lecturers(&self) -> Result<Vec<Lecturer>> {
        self.0.list_all_lecturers()
    }

    fn find_subjects_for_lecturer(&self, _lecturer: &Lecturer) -> Result<Vec<Subject>> {
        fault()
    }

    fn find_subject_by_exact_code_or_name(&self, term: &str) -> Result<Option<Subject>> {
        self.0.find_subject_by_exact_code_or_name(term)
    }

    fn find_subject_by_partial_name(&self, term: &str) -> Result<Option<Subject>> {
        self.0.find_subject_by_partial_name(term)
    }

    fn list_all_subjects(&self) -> Result<Vec<Subject>> {
        self.0.list_all_subjects()
    }

    fn find_lecturers_for_subject(&self, _subject: &Subject) -> Result<Vec<Lecturer>> {
        fault()
    }
}

/// A writer that fails every write with the given error kind
pub struct FailingWriter(pub io::ErrorKind);

impl Write for FailingWriter {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(self.0, "write failed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Err(io::Error::new(self.0, "flush failed"))
    }
}
