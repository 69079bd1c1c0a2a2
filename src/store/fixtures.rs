//! Seed data
//!
//! JSON fixtures used to populate a store at startup.
//!
//! ## Files
//! ```text
//! lecturers.json  [{ "name": "..." }]
//! subjects.json   [{ "shortName": "...", "name": "...", "enrolled": 0,
//!                    "lecturers": [{ "name": "..." }] }]
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Result, SchedulerError};

const BUILTIN_LECTURERS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/lecturers.json"));
const BUILTIN_SUBJECTS: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/subjects.json"));

/// An entry of `lecturers.json`
#[derive(Debug, Clone, Deserialize)]
pub struct LecturerFixture {
    pub name: String,
}

/// A lecturer reference inside a subject entry; the name may be null
#[derive(Debug, Clone, Deserialize)]
pub struct LecturerRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// An entry of `subjects.json`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectFixture {
    pub short_name: String,
    pub name: String,
    #[serde(default)]
    pub enrolled: u32,
    #[serde(default)]
    pub lecturers: Vec<LecturerRef>,
}

/// Parsed contents of both fixture files
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub lecturers: Vec<LecturerFixture>,
    pub subjects: Vec<SubjectFixture>,
}

impl Fixtures {
    pub const LECTURERS_FILE: &'static str = "lecturers.json";
    pub const SUBJECTS_FILE: &'static str = "subjects.json";

    /// Parse fixtures from JSON text
    pub fn from_json(lecturers: &str, subjects: &str) -> Result<Self> {
        Ok(Self {
            lecturers: serde_json::from_str(lecturers)?,
            subjects: serde_json::from_str(subjects)?,
        })
    }

    /// The dataset compiled into the binary
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_LECTURERS, BUILTIN_SUBJECTS)
    }

    /// Read both files from `dir`
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let lecturers = read_file(&dir.join(Self::LECTURERS_FILE))?;
        let subjects = read_file(&dir.join(Self::SUBJECTS_FILE))?;
        Self::from_json(&lecturers, &subjects)
    }

    /// Fixtures from `dir` if given, otherwise the built-in dataset
    pub fn load(dir: Option<&Path>) -> Result<Self> {
        match dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::builtin(),
        }
    }
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path)
        .map_err(|e| SchedulerError::Fixture(format!("{}: {}", path.display(), e)))
}
