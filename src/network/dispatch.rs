//! Command dispatch
//!
//! Executes a parsed command against the store and produces the display
//! lines of its response batch. Store faults never escape: they become a
//! "Failed to retrieve" line and the session carries on.

use crate::format;
use crate::model::{Lecturer, Subject};
use crate::protocol::response;
use crate::protocol::{Command, Target};
use crate::resolver::Resolver;
use crate::store::Store;

/// What the session sends for one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Lines followed by `END_TRANSMISSION`; the session stays open
    Batch(Vec<String>),

    /// Lines followed by `END_CONNECTION`; the session closes
    Close(Vec<String>),
}

/// Execute one command
pub fn execute(store: &dyn Store, command: &Command) -> Reply {
    match command {
        Command::List { target } => Reply::Batch(list(store, *target)),
        Command::Search { target, .. } => {
            let term = command.search_term().unwrap_or_default();
            Reply::Batch(search(store, *target, &term))
        }
        Command::Usage { topic } => Reply::Batch(vec![response::usage(*topic)]),
        Command::Help(None) => Reply::Batch(response::help_menu()),
        Command::Help(Some(help)) => Reply::Batch(match help.kind.as_topic() {
            Some(topic) => response::help_topic(topic),
            None => vec![response::unknown_command(&help.word)],
        }),
        Command::Exit => Reply::Close(vec![response::farewell()]),
    }
}

fn list(store: &dyn Store, target: Target) -> Vec<String> {
    match target {
        Target::Lecturer => match store.list_all_lecturers() {
            Ok(lecturers) => {
                let mut lines = vec![format::lecturer_header()];
                for lecturer in &lecturers {
                    lines.extend(lecturer_lines(store, lecturer));
                }
                lines
            }
            Err(e) => {
                tracing::warn!("Listing lecturers failed: {}", e);
                vec![response::retrieval_failed("lecturers")]
            }
        },
        Target::Subject => match store.list_all_subjects() {
            Ok(subjects) => {
                let mut lines = vec![format::subject_header()];
                for subject in &subjects {
                    lines.extend(subject_lines(store, subject));
                }
                lines
            }
            Err(e) => {
                tracing::warn!("Listing subjects failed: {}", e);
                vec![response::retrieval_failed("subjects")]
            }
        },
    }
}

fn search(store: &dyn Store, target: Target, term: &str) -> Vec<String> {
    let resolver = Resolver::new(store);

    let found = match target {
        Target::Lecturer => resolver
            .lecturer(term)
            .map(|lecturer| (format::lecturer_header(), lecturer_lines(store, &lecturer))),
        Target::Subject => resolver
            .subject(term)
            .map(|subject| (format::subject_header(), subject_lines(store, &subject))),
    };

    match found {
        Some((header, rows)) => {
            let mut lines = vec![header];
            lines.extend(rows);
            lines
        }
        None => vec![response::NOT_FOUND.to_string()],
    }
}

fn lecturer_lines(store: &dyn Store, lecturer: &Lecturer) -> Vec<String> {
    match store.find_subjects_for_lecturer(lecturer) {
        Ok(subjects) => format::lecturer_rows(lecturer, &subjects),
        Err(e) => {
            tracing::warn!("Fetching subjects for lecturer {} failed: {}", lecturer.id, e);
            vec![response::retrieval_failed(&format!("subjects for {}", lecturer.name))]
        }
    }
}

fn subject_lines(store: &dyn Store, subject: &Subject) -> Vec<String> {
    match store.find_lecturers_for_subject(subject) {
        Ok(lecturers) => format::subject_rows(subject, &lecturers),
        Err(e) => {
            tracing::warn!("Fetching lecturers for subject {} failed: {}", subject.id, e);
            vec![response::retrieval_failed(&format!("lecturers for {}", subject.code))]
        }
    }
}
