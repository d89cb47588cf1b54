//! `rollbook-recon` — roster/directory reconciliation engine.
//!
//! Pure engine crate: receives pre-loaded classrooms and directory
//! records, returns merged classrooms plus a leftover report. No CLI or
//! IO dependencies.

pub mod engine;
pub mod matcher;
pub mod report;

pub use engine::reconcile;
pub use report::{ReconMeta, ReconOutcome, ReconSummary, Unmatched};
