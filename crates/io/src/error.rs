use std::fmt;

use rollbook_core::ModelError;

#[derive(Debug)]
pub enum IoError {
    /// Workbook could not be opened or read.
    Open { path: String, message: String },
    /// A sheet could not be read.
    Sheet { sheet: String, message: String },
    /// A header cell that must be present was empty.
    MissingCell { sheet: String, cell: String },
    /// A required data field was empty.
    MissingField { source: String, row: usize, field: &'static str },
    /// The teacher parsed from a class sheet's header disagrees with the
    /// sheet's own title.
    SheetTitleMismatch { sheet: String, teacher: String },
    /// Grade or name normalization failed.
    Model(ModelError),
    /// Output could not be written.
    Write(String),
}

impl fmt::Display for IoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, message } => write!(f, "cannot open {path}: {message}"),
            Self::Sheet { sheet, message } => write!(f, "cannot read sheet '{sheet}': {message}"),
            Self::MissingCell { sheet, cell } => {
                write!(f, "sheet '{sheet}': missing header cell {cell}")
            }
            Self::MissingField { source, row, field } => {
                write!(f, "{source} row {row}: missing {field}")
            }
            Self::SheetTitleMismatch { sheet, teacher } => {
                write!(f, "sheet '{sheet}': header names teacher '{teacher}'")
            }
            Self::Model(e) => write!(f, "{e}"),
            Self::Write(message) => write!(f, "write error: {message}"),
        }
    }
}

impl std::error::Error for IoError {}

impl From<ModelError> for IoError {
    fn from(e: ModelError) -> Self {
        Self::Model(e)
    }
}

impl From<rust_xlsxwriter::XlsxError> for IoError {
    fn from(e: rust_xlsxwriter::XlsxError) -> Self {
        Self::Write(e.to_string())
    }
}

impl From<csv::Error> for IoError {
    fn from(e: csv::Error) -> Self {
        Self::Write(e.to_string())
    }
}
