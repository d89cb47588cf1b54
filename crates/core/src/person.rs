//! Student records and identity.
//!
//! Identity is strict — (grade, normalized name) must agree verbatim
//! across the two sources — unlike teacher identity, which is loose.
//! Normalization runs once at construction, never at comparison time.

use std::cmp::Ordering;

use serde::Serialize;

use crate::grade::Grade;
use crate::guardian::Guardian;
use crate::name;
use crate::staff::Teacher;

/// Identity key for a student. An explicit value type so identity-keyed
/// maps hash and compare consistently with `Student` equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct StudentKey {
    pub grade: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Student {
    name: String,
    display_name: String,
    index_name: String,
    #[serde(skip)]
    key_name: String,
    grade: Grade,
    teacher: Teacher,
    guardians: Vec<Guardian>,
}

impl Student {
    /// A provisional record from the class list: identity only, no
    /// guardian data.
    pub fn new(name: &str, grade: Grade, teacher: Teacher) -> Self {
        Self::with_guardians(name, grade, teacher, Vec::new())
    }

    /// A full record from the contact directory.
    pub fn with_guardians(
        name: &str,
        grade: Grade,
        teacher: Teacher,
        guardians: Vec<Guardian>,
    ) -> Self {
        let name = name.trim().to_string();
        Self {
            display_name: name::display_name(&name),
            index_name: name::index_name(&name),
            key_name: name::normalize_key(&name),
            name,
            grade,
            teacher,
            guardians,
        }
    }

    /// The name as the source recorded it ("Last, First").
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Title-cased "First Last" for class sheets.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Title-cased "Last, First" for the alphabetical index.
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn teacher(&self) -> &Teacher {
        &self.teacher
    }

    pub fn guardians(&self) -> &[Guardian] {
        &self.guardians
    }

    /// The first guardian postal address on record, if any.
    pub fn address(&self) -> Option<&str> {
        self.guardians.iter().find_map(|g| g.address())
    }

    pub fn key(&self) -> StudentKey {
        StudentKey {
            grade: self.grade.ordinal(),
            name: self.key_name.clone(),
        }
    }
}

impl PartialEq for Student {
    fn eq(&self, other: &Self) -> bool {
        self.grade == other.grade && self.key_name == other.key_name
    }
}

impl Eq for Student {}

impl PartialOrd for Student {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Student {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.grade, &self.key_name).cmp(&(other.grade, &other.key_name))
    }
}
