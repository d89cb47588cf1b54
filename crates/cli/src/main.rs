// Rollbook CLI - headless roster reconciliation and directory builds

mod build;
mod config;
mod exit_codes;
mod index;
mod pipeline;
mod staff;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use config::ConfigError;
use exit_codes::{EXIT_CONFIG, EXIT_IO, EXIT_PARSE, EXIT_SUCCESS};
use rollbook_io::IoError;

#[derive(Parser)]
#[command(name = "rollbook")]
#[command(about = "School roster reconciliation and directory index builder")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile the class list against directory exports and render output
    #[command(after_help = "\
Examples:
  rollbook build --class-list classes.xlsx --directory pta.xlsx --output directory.xlsx
  rollbook build --class-list classes.xlsx --directory pta-k2.xlsx pta-35.xlsx --json
  rollbook build --class-list classes.xlsx --directory pta.xlsx --csv flat.csv --config rollbook.toml")]
    Build {
        /// Class-list workbook (one sheet per teacher)
        #[arg(long)]
        class_list: PathBuf,

        /// Directory export workbook(s)
        #[arg(long, num_args = 1.., required = true)]
        directory: Vec<PathBuf>,

        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Write the styled workbook here
        #[arg(long)]
        output: Option<PathBuf>,

        /// Write a flat CSV of the reconciled directory
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the machine-readable run report to stdout
        #[arg(long)]
        json: bool,

        /// Suppress the human summary and warnings
        #[arg(long)]
        quiet: bool,
    },

    /// Print the alphabetical student index as text
    #[command(after_help = "\
Examples:
  rollbook index --class-list classes.xlsx --directory pta.xlsx")]
    Index {
        /// Class-list workbook (one sheet per teacher)
        #[arg(long)]
        class_list: PathBuf,

        /// Directory export workbook(s)
        #[arg(long, num_args = 1.., required = true)]
        directory: Vec<PathBuf>,

        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate a config file without running
    Validate {
        /// Path to the TOML config file
        config: PathBuf,
    },

    /// Clean up a staff contact sheet (title-cased names, mail/dialer links)
    #[command(after_help = "\
Examples:
  rollbook staff staff.xlsx
  rollbook staff staff.xlsx --output staff-clean.xlsx")]
    Staff {
        /// The staff spreadsheet
        input: PathBuf,

        /// Output path (defaults to <input>-modified.xlsx)
        #[arg(long)]
        output: Option<PathBuf>,

        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl From<IoError> for CliError {
    fn from(e: IoError) -> Self {
        let code = match &e {
            IoError::Open { .. } | IoError::Write(_) => EXIT_IO,
            _ => EXIT_PARSE,
        };
        let hint = match &e {
            IoError::SheetTitleMismatch { .. } => {
                Some("rename the sheet or fix its header row so they agree".to_string())
            }
            _ => None,
        };
        Self { code, message: e.to_string(), hint }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self { code: EXIT_CONFIG, message: e.to_string(), hint: None }
    }
}

fn cmd_validate(path: PathBuf) -> Result<(), CliError> {
    let config = config::RunConfig::load(Some(&path))?;
    println!(
        "{}: ok ({} column-groups x {} rows per page)",
        path.display(),
        config.layout.column_groups,
        config.layout.page_height,
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Build {
            class_list,
            directory,
            config,
            output,
            csv,
            json,
            quiet,
        } => build::cmd_build(class_list, directory, config, output, csv, json, quiet),
        Commands::Index { class_list, directory, config } => {
            index::cmd_index(class_list, directory, config)
        }
        Commands::Validate { config } => cmd_validate(config),
        Commands::Staff { input, output, config } => staff::cmd_staff(input, output, config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            eprintln!("error: {}", e.message);
            if let Some(hint) = &e.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(e.code)
        }
    }
}
