//! Response Formatter
//!
//! Renders records as fixed-width table rows.
//!
//! ```text
//! Name                          Subject
//! Alexander Melby               PG4200
//!                               PG3300
//! ```
//!
//! A record renders one row per associated item, with only the first row
//! carrying the record's own columns. A record with no associations still
//! renders exactly one row, showing `None` in the association column.

use crate::model::{Lecturer, Subject};
use crate::protocol::markup::style;

/// Placeholder for an empty association column
pub const NONE: &str = "None";

const NAME_WIDTH: usize = 30;
const SUBJECT_NAME_WIDTH: usize = 34;
const CODE_WIDTH: usize = 10;
const ENROLLED_WIDTH: usize = 10;

/// Header line of the lecturer table
pub fn lecturer_header() -> String {
    style(
        "bold,cyan",
        &format!("{}{}", column("Name", NAME_WIDTH), "Subject"),
    )
}

/// Rows for one lecturer and the subjects they teach
pub fn lecturer_rows(lecturer: &Lecturer, subjects: &[Subject]) -> Vec<String> {
    let Some((first, rest)) = subjects.split_first() else {
        return vec![lecturer_row(&lecturer.name, NONE)];
    };

    let mut rows = Vec::with_capacity(subjects.len());
    rows.push(lecturer_row(&lecturer.name, &first.code));
    rows.extend(rest.iter().map(|subject| lecturer_row("", &subject.code)));
    rows
}

fn lecturer_row(name: &str, code: &str) -> String {
    format!("{}{}", column(name, NAME_WIDTH), code)
}

/// Header line of the subject table
pub fn subject_header() -> String {
    style(
        "bold,cyan",
        &format!(
            "{}{}{}{}",
            column("Subject", SUBJECT_NAME_WIDTH),
            column("Code", CODE_WIDTH),
            column("Enrolled", ENROLLED_WIDTH),
            "Lecturer"
        ),
    )
}

/// Rows for one subject and the lecturers teaching it
pub fn subject_rows(subject: &Subject, lecturers: &[Lecturer]) -> Vec<String> {
    let enrolled = subject.enrolled.to_string();

    let Some((first, rest)) = lecturers.split_first() else {
        return vec![subject_row(&subject.name, &subject.code, &enrolled, NONE)];
    };

    let mut rows = Vec::with_capacity(lecturers.len());
    rows.push(subject_row(&subject.name, &subject.code, &enrolled, &first.name));
    rows.extend(
        rest.iter()
            .map(|lecturer| subject_row("", "", "", &lecturer.name)),
    );
    rows
}

fn subject_row(name: &str, code: &str, enrolled: &str, lecturer: &str) -> String {
    format!(
        "{}{}{}{}",
        column(name, SUBJECT_NAME_WIDTH),
        column(code, CODE_WIDTH),
        column(enrolled, ENROLLED_WIDTH),
        lecturer
    )
}

/// Left-align `text` in `width` chars, always leaving at least one space
fn column(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len < width {
        format!("{:<width$}", text, width = width)
    } else {
        format!("{} ", text)
    }
}
