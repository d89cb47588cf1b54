//! `rollbook-io` — workbook ingestion and rendering.
//!
//! Import: class-list and directory workbooks are converted one-way into
//! the core record model. Export: a presentation snapshot (styled class
//! sheets plus the paginated index), not a round-trip format.

pub mod csv;
pub mod error;
pub mod export;
pub mod staff;
pub mod xlsx;

pub use csv::export_csv;
pub use error::IoError;
pub use export::{export_workbook, ExportReport};
pub use staff::{transform_staff, StaffConfig, StaffReport};
pub use xlsx::{import_class_lists, import_directory, ClassListReport, DirectoryReport};
