//! Shared pipeline: import both sources, reconcile, report warnings.

use std::path::{Path, PathBuf};

use rollbook_io::{import_class_lists, import_directory, ClassListReport, DirectoryReport};
use rollbook_recon::{reconcile, ReconOutcome};

use crate::config::RunConfig;
use crate::CliError;

pub struct PipelineOutput {
    pub outcome: ReconOutcome,
    pub class_list: ClassListReport,
    pub directory: DirectoryReport,
}

pub fn run(
    class_list: &Path,
    directory: &[PathBuf],
    config: &RunConfig,
) -> Result<PipelineOutput, CliError> {
    let (classrooms, class_report) = import_class_lists(class_list, &config.corrections)?;
    let (people, directory_report) = import_directory(
        directory,
        &config.corrections,
        config.school.locality.as_deref(),
    )?;
    let outcome = reconcile(classrooms, &people);
    Ok(PipelineOutput {
        outcome,
        class_list: class_report,
        directory: directory_report,
    })
}

/// Import warnings and reconciliation leftovers go to stderr; they never
/// fail the run.
pub fn print_warnings(output: &PipelineOutput) {
    for warning in output
        .class_list
        .warnings
        .iter()
        .chain(&output.directory.warnings)
    {
        eprintln!("warning: {warning}");
    }
    for unmatched in &output.outcome.unmatched {
        let student = &unmatched.student;
        eprintln!(
            "warning: {} (grade {}) has a directory entry under {} but is not on the roster",
            student.index_name(),
            student.grade(),
            unmatched.teacher,
        );
    }
}
