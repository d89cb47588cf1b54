use serde::Serialize;

use rollbook_core::{Classroom, Student};

/// Everything `reconcile` produces: merged classrooms, the leftover
/// report, and summary counts.
#[derive(Debug, Serialize)]
pub struct ReconOutcome {
    pub meta: ReconMeta,
    pub summary: ReconSummary,
    pub classrooms: Vec<Classroom>,
    pub unmatched: Vec<Unmatched>,
}

/// A directory record assigned to a matched teacher that no roster slot
/// consumed. Non-fatal: surfaced as a warning, the run continues.
#[derive(Debug, Clone, Serialize)]
pub struct Unmatched {
    /// Display name of the teacher whose pool held the record.
    pub teacher: String,
    pub student: Student,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconSummary {
    pub classrooms: usize,
    pub students: usize,
    /// Roster slots that received a directory record.
    pub substituted: usize,
    /// Roster slots left with class-list data only.
    pub roster_only: usize,
    pub unmatched: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReconMeta {
    pub engine_version: String,
    pub run_at: String,
}

impl ReconMeta {
    pub fn now() -> Self {
        Self {
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            run_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}
