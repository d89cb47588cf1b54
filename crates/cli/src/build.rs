//! `rollbook build` — the full reconcile-and-render pipeline.

use std::fs::File;
use std::path::PathBuf;

use serde::Serialize;

use rollbook_core::Student;
use rollbook_io::{export_csv, export_workbook, ClassListReport, DirectoryReport, ExportReport};
use rollbook_layout::{lay_out, letter_groups};
use rollbook_recon::{ReconMeta, ReconSummary, Unmatched};

use crate::config::RunConfig;
use crate::exit_codes::{EXIT_CONFIG, EXIT_IO, EXIT_USAGE};
use crate::pipeline;
use crate::CliError;

/// Machine-readable run report for `--json`.
#[derive(Serialize)]
struct RunReport<'a> {
    meta: &'a ReconMeta,
    summary: &'a ReconSummary,
    unmatched: &'a [Unmatched],
    class_list: &'a ClassListReport,
    directory: &'a DirectoryReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    export: Option<&'a ExportReport>,
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_build(
    class_list: PathBuf,
    directory: Vec<PathBuf>,
    config_path: Option<PathBuf>,
    output: Option<PathBuf>,
    csv: Option<PathBuf>,
    json: bool,
    quiet: bool,
) -> Result<(), CliError> {
    if output.is_none() && csv.is_none() && !json {
        return Err(CliError {
            code: EXIT_USAGE,
            message: "nothing to produce".to_string(),
            hint: Some("pass --output, --csv, or --json".to_string()),
        });
    }

    let config = RunConfig::load(config_path.as_deref())?;
    let run = pipeline::run(&class_list, &directory, &config)?;
    if !quiet {
        pipeline::print_warnings(&run);
    }

    let everyone: Vec<Student> = run
        .outcome
        .classrooms
        .iter()
        .flat_map(|c| c.students.iter().cloned())
        .collect();
    let placed = lay_out(letter_groups(everyone), &config.layout).map_err(|e| CliError {
        code: EXIT_CONFIG,
        message: e.to_string(),
        hint: None,
    })?;

    let mut export_report = None;
    if let Some(path) = &output {
        let report = export_workbook(&run.outcome.classrooms, &placed, &config.layout, path)?;
        if !quiet {
            eprintln!(
                "wrote {} ({} class sheets, {} index pages)",
                path.display(),
                report.class_sheets,
                report.index_pages,
            );
        }
        export_report = Some(report);
    }

    if let Some(path) = &csv {
        let file = File::create(path).map_err(|e| CliError {
            code: EXIT_IO,
            message: format!("cannot create {}: {e}", path.display()),
            hint: None,
        })?;
        let rows = export_csv(&run.outcome.classrooms, file)?;
        if !quiet {
            eprintln!("wrote {} ({rows} rows)", path.display());
        }
    }

    if json {
        let report = RunReport {
            meta: &run.outcome.meta,
            summary: &run.outcome.summary,
            unmatched: &run.outcome.unmatched,
            class_list: &run.class_list,
            directory: &run.directory,
            export: export_report.as_ref(),
        };
        let rendered = serde_json::to_string_pretty(&report).map_err(|e| CliError {
            code: EXIT_IO,
            message: format!("JSON serialization error: {e}"),
            hint: None,
        })?;
        println!("{rendered}");
    }

    if !quiet {
        let s = &run.outcome.summary;
        eprintln!(
            "reconciled {} classrooms: {} students, {} from the directory, {} roster-only, {} unmatched contacts",
            s.classrooms, s.students, s.substituted, s.roster_only, s.unmatched,
        );
    }

    Ok(())
}
