//! `rollbook staff` — staff contact sheet cleanup.

use std::path::{Path, PathBuf};

use rollbook_io::transform_staff;

use crate::config::RunConfig;
use crate::CliError;

pub fn cmd_staff(
    input: PathBuf,
    output: Option<PathBuf>,
    config_path: Option<PathBuf>,
) -> Result<(), CliError> {
    let config = RunConfig::load(config_path.as_deref())?;
    let output = output.unwrap_or_else(|| default_output(&input));

    let report = transform_staff(&input, &output, &config.staff)?;
    eprintln!("wrote {} ({} staff rows)", output.display(), report.rows);
    if report.truncated {
        eprintln!("warning: staff sheet truncated at the row cap");
    }
    Ok(())
}

/// "staff.xlsx" → "staff-modified.xlsx", next to the input.
fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "staff".to_string());
    input.with_file_name(format!("{stem}-modified.xlsx"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_sits_next_to_the_input() {
        let out = default_output(&PathBuf::from("/data/staff.xlsx"));
        assert_eq!(out, PathBuf::from("/data/staff-modified.xlsx"));
    }
}
