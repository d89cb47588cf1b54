//! Teacher records and identity.
//!
//! The class-list workbook records teachers by surname; the contact
//! directory records full names. The identity key — (grade, final name
//! token, case-folded) — is deliberately looser than full-name equality so
//! both spellings resolve to the same teacher.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::grade::Grade;
use crate::name;

/// Historical name changes applied before identity derivation, keyed by
/// the name exactly as the source records it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct NameCorrections(BTreeMap<String, String>);

impl NameCorrections {
    pub fn new(table: BTreeMap<String, String>) -> Self {
        Self(table)
    }

    pub fn apply<'a>(&'a self, recorded: &'a str) -> &'a str {
        self.0.get(recorded).map(String::as_str).unwrap_or(recorded)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Identity key for a teacher: grade plus case-folded final name token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct TeacherKey {
    pub grade: i64,
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Teacher {
    name: String,
    display_name: String,
    last_name: String,
    grade: Grade,
}

impl Teacher {
    pub fn new(recorded: &str, grade: Grade, corrections: &NameCorrections) -> Self {
        let name = corrections.apply(recorded.trim()).to_string();
        let display_name = name::title_case(&name);
        let last_name = name::last_token(&name);
        Self { name, display_name, last_name, grade }
    }

    /// The name as recorded (post-correction).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Title-cased full name for headings.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Case-folded final name token.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Title-cased surname for index entries.
    pub fn last_name_display(&self) -> String {
        name::title_case(&self.last_name)
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub fn key(&self) -> TeacherKey {
        TeacherKey {
            grade: self.grade.ordinal(),
            last_name: self.last_name.clone(),
        }
    }
}

impl PartialEq for Teacher {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Teacher {}
